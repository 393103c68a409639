//! `mlk-kernels` -- Arithmetic kernels for ML-KEM.
//!
//! Facade over the two leaf crates: [`mlk_hash`] (Keccak-f[1600]
//! permutation, rate-blocked sponge absorption, SHA-3/SHAKE one-shots)
//! and [`mlk_math`] (radix-2 NTT butterflies, Montgomery/Barrett
//! reduction). The KEM protocol layers above — key generation,
//! encapsulation, decapsulation, serialization — are out of scope; this
//! workspace carries only the numeric kernels and their magnitude-bound
//! contracts.

#![no_std]
#![deny(unsafe_code)]

pub use mlk_hash as hash;
pub use mlk_math as math;
