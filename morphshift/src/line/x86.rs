//! SSE line primitives for 8-bit lines.
//!
//! Every function here is observationally identical to its counterpart in
//! [`super::scalar`]. Partial registers at either end of a line are handed to
//! the scalar code on sub-slices. Only SSE2 instructions are used; the
//! x86-64-v2 token gates the `#[arcane]` entry points.

use archmage::{arcane, X64V2Token};
use core::arch::x86_64::*;
use safe_unaligned_simd::x86_64 as safe_simd;

use super::scalar;

/// Bytes per register.
pub const LANES: usize = 16;

#[inline]
#[target_feature(enable = "sse2")]
fn load(_t: X64V2Token, line: &[u8], at: usize) -> __m128i {
    let arr: &[u8; LANES] = line[at..at + LANES].try_into().unwrap();
    safe_simd::_mm_loadu_si128(arr)
}

#[inline]
#[target_feature(enable = "sse2")]
fn store(_t: X64V2Token, line: &mut [u8], at: usize, v: __m128i) {
    let arr: &mut [u8; LANES] = (&mut line[at..at + LANES]).try_into().unwrap();
    safe_simd::_mm_storeu_si128(arr, v);
}

/// Bytes `r..r + 16` of the 32-byte concatenation `lo ++ hi`.
///
/// The byte-shift instructions only take an immediate, hence one arm per
/// remainder.
#[inline]
#[target_feature(enable = "sse2")]
fn funnel(_t: X64V2Token, lo: __m128i, hi: __m128i, r: usize) -> __m128i {
    macro_rules! arms {
        ($($n:literal)*) => {
            match r {
                $($n => _mm_or_si128(_mm_srli_si128::<$n>(lo), _mm_slli_si128::<{ 16 - $n }>(hi)),)*
                _ => lo,
            }
        };
    }
    arms!(1 2 3 4 5 6 7 8 9 10 11 12 13 14 15)
}

#[arcane]
pub fn max_merge_line(t: X64V2Token, dst: &mut [u8], src: &[u8]) {
    let n = dst.len();
    let mut i = 0;
    while i + LANES <= n {
        let v = _mm_max_epu8(load(t, dst, i), load(t, src, i));
        store(t, dst, i, v);
        i += LANES;
    }
    scalar::max_merge_line(&mut dst[i..], &src[i..n]);
}

#[arcane]
pub fn fill_max_line(t: X64V2Token, dst: &mut [u8], fill: u8) {
    let f = _mm_set1_epi8(fill as i8);
    let n = dst.len();
    let mut i = 0;
    while i + LANES <= n {
        let v = _mm_max_epu8(load(t, dst, i), f);
        store(t, dst, i, v);
        i += LANES;
    }
    scalar::fill_max_line(&mut dst[i..], fill);
}

/// `dst[i] = max(dst[i], src[i + amount])`, the last `amount` bytes meeting `fill`.
#[arcane]
pub fn shift_left_line(t: X64V2Token, dst: &mut [u8], src: &[u8], amount: usize, fill: u8) {
    let n = dst.len();
    let amount = amount.min(n);
    let keep = n - amount;
    let (q, r) = (amount / LANES, amount % LANES);

    let mut i = 0;
    if r == 0 {
        while i + LANES <= keep {
            let v = _mm_max_epu8(load(t, dst, i), load(t, src, i + amount));
            store(t, dst, i, v);
            i += LANES;
        }
    } else {
        // lo/hi are the two registers straddling src[i + amount..]
        while i + LANES <= keep && i + q * LANES + 2 * LANES <= n {
            let base = i + q * LANES;
            let lo = load(t, src, base);
            let hi = load(t, src, base + LANES);
            let v = _mm_max_epu8(load(t, dst, i), funnel(t, lo, hi, r));
            store(t, dst, i, v);
            i += LANES;
        }
    }
    scalar::max_merge_line(&mut dst[i..keep], &src[i + amount..n]);
    fill_max_line(t, &mut dst[keep..], fill);
}

/// `dst[i] = max(dst[i], src[i - amount])`, the first `amount` bytes meeting `fill`.
#[arcane]
pub fn shift_right_line(t: X64V2Token, dst: &mut [u8], src: &[u8], amount: usize, fill: u8) {
    let n = dst.len();
    let amount = amount.min(n);
    let (q, r) = (amount / LANES, amount % LANES);

    // First destination register whose source registers are both in range.
    let start = if r == 0 { amount } else { (q + 1) * LANES }.min(n);
    scalar::max_merge_line(&mut dst[amount..start], &src[..start - amount]);

    let mut i = start;
    if r == 0 {
        while i + LANES <= n {
            let v = _mm_max_epu8(load(t, dst, i), load(t, src, i - amount));
            store(t, dst, i, v);
            i += LANES;
        }
    } else {
        while i + LANES <= n {
            let base = i - q * LANES;
            let lo = load(t, src, base - LANES);
            let hi = load(t, src, base);
            let v = _mm_max_epu8(load(t, dst, i), funnel(t, lo, hi, LANES - r));
            store(t, dst, i, v);
            i += LANES;
        }
    }
    scalar::max_merge_line(&mut dst[i..], &src[i - amount..n - amount]);
    fill_max_line(t, &mut dst[..amount], fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use archmage::SimdToken;

    fn ramp(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i * 37 % 251) as u8).collect()
    }

    #[test]
    fn test_funnel_every_remainder() {
        let Some(token) = X64V2Token::summon() else {
            return;
        };
        let bytes: Vec<u8> = (1..=48).collect();
        for r in 0..LANES {
            let mut out = vec![0u8; 48];
            shift_left_line(token, &mut out, &bytes, r, 0);
            for (k, &v) in out.iter().enumerate() {
                let expect = if k + r < 48 { bytes[k + r] } else { 0 };
                assert_eq!(v, expect, "remainder {r} byte {k}");
            }
        }
    }

    #[test]
    fn test_long_line_left_and_right() {
        let Some(token) = X64V2Token::summon() else {
            return;
        };
        let src = ramp(200);
        for amount in [1, 15, 16, 17, 33, 100, 199, 200, 300] {
            let mut simd = vec![7u8; 200];
            let mut reference = simd.clone();
            shift_left_line(token, &mut simd, &src, amount, 3);
            scalar::shift_left_line(&mut reference, &src, amount, 3);
            assert_eq!(simd, reference, "left {amount}");

            let mut simd = vec![7u8; 200];
            let mut reference = simd.clone();
            shift_right_line(token, &mut simd, &src, amount, 250);
            scalar::shift_right_line(&mut reference, &src, amount, 250);
            assert_eq!(simd, reference, "right {amount}");
        }
    }
}
