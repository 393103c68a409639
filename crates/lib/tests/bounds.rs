//! Bound-saturation trials for the butterfly kernels.
//!
//! Coefficients are drawn from the crate's own SHAKE-128 stream and pushed
//! to the edge of each documented input bound; outputs are checked against
//! the documented output bound. One run per layer stride of the forward
//! and inverse transforms, 10,000 trials each.

use mlk_kernels::hash::{SHAKE128_RATE, Shake128Reader, xof_absorb};
use mlk_kernels::math::ntt::{ZETAS, butterfly_block, inv_butterfly_block};
use mlk_kernels::math::{N, Q};

const TRIALS: usize = 10_000;

/// Pulls `u16` words out of a SHAKE-128 stream, one rate block at a time.
struct CoeffStream {
    reader: Shake128Reader,
    buf: [u8; SHAKE128_RATE],
    pos: usize,
}

impl CoeffStream {
    fn new(domain: u8) -> Self {
        let seed: [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(59));
        Self {
            reader: xof_absorb(&seed, domain, 0),
            buf: [0u8; SHAKE128_RATE],
            pos: SHAKE128_RATE,
        }
    }

    fn next_u16(&mut self) -> u16 {
        if self.pos == SHAKE128_RATE {
            self.reader.squeeze_block(&mut self.buf);
            self.pos = 0;
        }
        let v = u16::from_le_bytes([self.buf[self.pos], self.buf[self.pos + 1]]);
        self.pos += 2;
        v
    }

    /// Roughly uniform in `[-(bound-1), bound-1]`.
    fn coeff(&mut self, bound: i32) -> i16 {
        let span = (2 * bound - 1) as u32;
        ((u32::from(self.next_u16()) % span) as i32 - (bound - 1)) as i16
    }
}

fn all_below(coeffs: &[i16], bound: i32) -> bool {
    coeffs.iter().all(|&c| i32::from(c).abs() < bound)
}

#[test]
fn forward_butterfly_preserves_documented_bound() {
    for layer in 1..=7u32 {
        let bound = (layer as i32) * i32::from(Q);
        let len = N >> layer;
        let blocks = N / (2 * len);
        let mut stream = CoeffStream::new(layer as u8);

        for trial in 0..TRIALS {
            let start = (trial % blocks) * 2 * len;
            let zeta = ZETAS[1 + trial % 127];

            let mut r = [0i16; N];
            for c in r[start..start + 2 * len].iter_mut() {
                *c = stream.coeff(bound);
            }
            // Saturate the input contract on both halves of the block.
            r[start] = (bound - 1) as i16;
            r[start + len] = -((bound - 1) as i16);

            butterfly_block(&mut r, zeta, start, len, bound);

            assert!(
                all_below(&r[start..start + 2 * len], bound + i32::from(Q)),
                "output bound violated (layer={layer}, trial={trial}, start={start})"
            );
        }
    }
}

#[test]
fn inverse_butterfly_outputs_stay_reduced() {
    let q = i32::from(Q);
    for layer in 1..=7u32 {
        let len = 1 << layer; // 2, 4, ..., 128
        let blocks = N / (2 * len);
        let mut stream = CoeffStream::new(0x80 | layer as u8);

        for trial in 0..TRIALS {
            let start = (trial % blocks) * 2 * len;
            let zeta = ZETAS[1 + trial % 127];

            let mut r = [0i16; N];
            for c in r[start..start + 2 * len].iter_mut() {
                *c = stream.coeff(q);
            }
            r[start] = (q - 1) as i16;
            r[start + len] = -((q - 1) as i16);

            inv_butterfly_block(&mut r, zeta, start, len);

            let (lo, hi) = r[start..start + 2 * len].split_at(len);
            assert!(
                all_below(lo, (q + 1) / 2),
                "sum branch left centred range (layer={layer}, trial={trial})"
            );
            assert!(
                all_below(hi, q),
                "twiddle branch reached q (layer={layer}, trial={trial})"
            );
        }
    }
}
