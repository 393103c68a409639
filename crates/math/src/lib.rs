//! `mlk-math` — NTT and modular-reduction kernels for ML-KEM.
//!
//! `no_std`, zero-allocation arithmetic over `Z_q[X]/(X^{256}+1)` with
//! q = 3329. Every primitive that mutates coefficients documents the
//! magnitude bound it accepts and the bound it guarantees, so absence of
//! `i16` overflow can be argued call site by call site instead of
//! re-derived inside each loop.

#![no_std]
#![deny(unsafe_code)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]

pub mod ntt;
pub mod reduce;

/// Polynomial ring degree.
pub const N: usize = 256;

/// Field modulus.
pub const Q: i16 = 3329;
