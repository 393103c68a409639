//! Rate-blocked sponge absorption and extraction.
//!
//! [`absorb_once`] consumes an entire message in a single call, applying
//! the FIPS 202 domain-separation padding; [`squeeze`] extracts output,
//! permuting before every rate-sized block. The pair is byte-compatible
//! with any FIPS 202 implementation of the same rate and padding byte.

use crate::keccakf1600::{PLEN, permute};

/// XOR one full rate-sized block into the state, little-endian lane order.
#[inline]
fn xor_block(state: &mut [u64; PLEN], block: &[u8]) {
    debug_assert!(block.len().is_multiple_of(8));
    for (s, b) in state.iter_mut().zip(block.chunks_exact(8)) {
        *s ^= u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
    }
}

/// Absorb `input` in one call and pad; the state is left ready for
/// [`squeeze`].
///
/// `rate` is the block width in bytes, a multiple of 8 below 200; `pad` is
/// the domain-separation byte of the algorithm family (`0x06` for SHA-3,
/// `0x1F` for SHAKE). An invalid rate is a caller contract breach, checked
/// in debug builds only.
///
/// Full blocks are XORed into the first `rate` state bytes and followed by
/// a permutation; the trailing partial block (possibly empty) is XORed in,
/// then `pad` is XORed at byte offset `input.len() % rate` and `0x80` into
/// byte `rate - 1`. No permutation follows the padded block — the squeeze
/// side permutes before extracting. The permutation count is therefore
/// `input.len() / rate`, a function of the public length alone; no byte of
/// `input` influences control flow or addressing.
pub fn absorb_once(state: &mut [u64; PLEN], rate: usize, input: &[u8], pad: u8) {
    debug_assert!(rate.is_multiple_of(8) && rate < 200);

    let mut offset = 0;
    while input.len() - offset >= rate {
        xor_block(state, &input[offset..offset + rate]);
        permute(state);
        offset += rate;
    }

    for (i, &byte) in input[offset..].iter().enumerate() {
        state[i / 8] ^= u64::from(byte) << (8 * (i % 8));
    }
    let end = input.len() - offset;
    state[end / 8] ^= u64::from(pad) << (8 * (end % 8));
    state[(rate - 1) / 8] ^= 0x80_u64 << (8 * ((rate - 1) % 8));
}

/// Copy the first `out.len()` state bytes out in little-endian lane order.
/// `out` must be at most one rate block.
#[inline]
fn copy_block(state: &[u64; PLEN], out: &mut [u8]) {
    let mut written = 0;
    for &word in state {
        if written >= out.len() {
            break;
        }
        let bytes = word.to_le_bytes();
        let n = (out.len() - written).min(8);
        out[written..written + n].copy_from_slice(&bytes[..n]);
        written += n;
    }
}

/// Squeeze `out.len()` bytes from an absorbed state, permuting before each
/// rate-sized block (the final block may be short).
pub fn squeeze(state: &mut [u64; PLEN], rate: usize, out: &mut [u8]) {
    debug_assert!(rate.is_multiple_of(8) && rate < 200);
    for block in out.chunks_mut(rate) {
        permute(state);
        copy_block(state, block);
    }
}
