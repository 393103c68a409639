//! Scalar Keccak sponge kernels for ML-KEM.
//!
//! The permutation ([`keccakf1600`]) and the rate-blocked absorption
//! ([`sponge`]) are the primitives; the FIPS 202 functions ML-KEM needs
//! are thin compositions of the two:
//!
//! | ML-KEM name | Primitive | Function |
//! |-------------|-----------|----------|
//! | **H**       | SHA3-256  | [`hash_h`] |
//! | **G**       | SHA3-512  | [`hash_g`] |
//! | **XOF**     | SHAKE-128 | [`xof_absorb`] / [`Shake128Reader`] |
//! | PRF, **J**  | SHAKE-256 | [`shake256`] |

#![no_std]
#![deny(unsafe_code)]

pub mod keccakf1600;
pub mod sponge;

pub use keccakf1600::{PLEN, permute};
pub use sponge::{absorb_once, squeeze};

use zeroize::Zeroize;

pub const SHAKE128_RATE: usize = 168;
pub const SHAKE256_RATE: usize = 136;
pub const SHA3_256_RATE: usize = 136;
pub const SHA3_512_RATE: usize = 72;

/// Domain-separation padding byte for the SHAKE family.
pub const SHAKE_PAD: u8 = 0x1F;
/// Domain-separation padding byte for the fixed-output SHA-3 family.
pub const SHA3_PAD: u8 = 0x06;

/// H(input) = SHA3-256(input) -> 32 bytes.
#[must_use]
pub fn hash_h(input: impl AsRef<[u8]>) -> [u8; 32] {
    let mut state = [0u64; PLEN];
    absorb_once(&mut state, SHA3_256_RATE, input.as_ref(), SHA3_PAD);
    let mut out = [0u8; 32];
    squeeze(&mut state, SHA3_256_RATE, &mut out);
    out
}

/// G(input) = SHA3-512(input) -> 64 bytes.
#[must_use]
pub fn hash_g(input: impl AsRef<[u8]>) -> [u8; 64] {
    let mut state = [0u64; PLEN];
    absorb_once(&mut state, SHA3_512_RATE, input.as_ref(), SHA3_PAD);
    let mut out = [0u8; 64];
    squeeze(&mut state, SHA3_512_RATE, &mut out);
    out
}

/// SHAKE-128(input), squeezed to fill `output`.
pub fn shake128(input: &[u8], output: &mut [u8]) {
    let mut state = [0u64; PLEN];
    absorb_once(&mut state, SHAKE128_RATE, input, SHAKE_PAD);
    squeeze(&mut state, SHAKE128_RATE, output);
    state.zeroize();
}

/// SHAKE-256(input), squeezed to fill `output`.
pub fn shake256(input: &[u8], output: &mut [u8]) {
    let mut state = [0u64; PLEN];
    absorb_once(&mut state, SHAKE256_RATE, input, SHAKE_PAD);
    squeeze(&mut state, SHAKE256_RATE, output);
    state.zeroize();
}

/// Incremental SHAKE-128 reader for matrix sampling.
///
/// Created by [`xof_absorb`]. Each call to
/// [`squeeze_block`](Self::squeeze_block) produces the next 168-byte rate
/// block, one permutation per block. The state may carry secret-derived
/// material and is zeroized on drop.
pub struct Shake128Reader {
    state: [u64; PLEN],
}

impl Shake128Reader {
    /// Squeeze the next SHAKE-128 rate block (168 bytes).
    #[inline]
    pub fn squeeze_block(&mut self, out: &mut [u8; SHAKE128_RATE]) {
        squeeze(&mut self.state, SHAKE128_RATE, out);
    }
}

impl Drop for Shake128Reader {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

/// Absorb `seed || x || y` into a fresh SHAKE-128 state and return a
/// reader, as used to sample one matrix entry per `(x, y)` pair.
#[must_use]
pub fn xof_absorb(seed: &[u8; 32], x: u8, y: u8) -> Shake128Reader {
    let mut input = [0u8; 34];
    input[..32].copy_from_slice(seed);
    input[32] = x;
    input[33] = y;

    let mut state = [0u64; PLEN];
    absorb_once(&mut state, SHAKE128_RATE, &input, SHAKE_PAD);
    Shake128Reader { state }
}
