//! Keccak-f[1600] permutation over the 25-lane sponge state.
//!
//! Scalar, fixed-iteration implementation: 24 rounds of theta, rho, pi,
//! chi and iota. Every loop bound and table index is a compile-time
//! constant, so the instruction and memory-access sequence is identical
//! for all inputs.

/// Number of 64-bit lanes in the sponge state (1600 bits).
pub const PLEN: usize = 25;

/// Round constants for the iota step, one per round.
const RC: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation offsets for the rho step, in lane-trail order.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane trail for the combined rho-pi step: `PI[i]` is the destination of
/// the lane displaced in step `i`. Starts from lane 1; lane 0 never moves.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the full 24-round Keccak-f[1600] permutation in place.
pub fn permute(state: &mut [u64; PLEN]) {
    for &rc in &RC {
        // theta: column parities
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // rho + pi: rotate each lane and move it along the trail
        let mut last = state[1];
        for i in 0..24 {
            let t = state[PI[i]];
            state[PI[i]] = last.rotate_left(RHO[i]);
            last = t;
        }

        // chi: row nonlinearity
        for y in 0..5 {
            let row = 5 * y;
            let t0 = state[row];
            let t1 = state[row + 1];
            let t2 = state[row + 2];
            let t3 = state[row + 3];
            let t4 = state[row + 4];
            state[row] = t0 ^ (!t1 & t2);
            state[row + 1] = t1 ^ (!t2 & t3);
            state[row + 2] = t2 ^ (!t3 & t4);
            state[row + 3] = t3 ^ (!t4 & t0);
            state[row + 4] = t4 ^ (!t0 & t1);
        }

        // iota
        state[0] ^= rc;
    }
}
