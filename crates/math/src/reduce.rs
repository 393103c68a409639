//! Montgomery and Barrett modular reduction for the ML-KEM field (q = 3329).
//!
//! These are the only reduction points in the transform; each states the
//! input magnitude it accepts and the output magnitude it guarantees as a
//! small multiple of q. All three are fixed sequences of arithmetic
//! operations with no data-dependent control flow.

use crate::Q;

/// q^{-1} mod 2^{16} (Montgomery inverse).
pub const QINV: i16 = -3327;

/// Montgomery reduction: computes `a * R^{-1} mod q` where R = 2^{16}.
///
/// Input: `a in {-q*2^{15}, ..., q*2^{15} - 1}`. Output: `r in {-q+1, ...,
/// q-1}` with `r \equiv a*R^{-1} (mod q)`.
#[inline]
#[must_use]
pub const fn montgomery_reduce(a: i32) -> i16 {
    let t = (a as i16).wrapping_mul(QINV);
    ((a - (t as i32) * (Q as i32)) >> 16) as i16
}

/// Barrett reduction: centered reduction modulo q.
///
/// Input: any `i16`. Output: `r in {-(q-1)/2, ..., (q-1)/2}` with
/// `r \equiv a (mod q)`. The quotient estimate is exact over the full
/// `i16` range, so the wrapping subtraction below never wraps the true
/// residue, only the intermediate `t*q` product.
#[inline]
#[must_use]
pub const fn barrett_reduce(a: i16) -> i16 {
    const V: i32 = ((1i32 << 26) + (Q as i32) / 2) / (Q as i32); // 20159
    let t = ((V * (a as i32) + (1 << 25)) >> 26) as i16;
    a.wrapping_sub(t.wrapping_mul(Q))
}

/// Field multiplication followed by Montgomery reduction: `a*b*R^{-1} mod q`.
///
/// Input: `|a*b| <= q*2^{15}`, which holds at every call site because one
/// operand is always a centred twiddle factor (`|zeta| <= (q-1)/2`) or a
/// coefficient below `q`. Output: `|r| < q`.
#[inline]
#[must_use]
pub const fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce((a as i32) * (b as i32))
}
