//! Scalar line primitives.
//!
//! These are the reference semantics for every other implementation. They are
//! generic over the line element so the same code serves 8-bit and 32-bit
//! lines; binary lines have their own bit-packed versions in
//! [`super::binary`].

/// `dst[i] = max(dst[i], src[i])` over the whole line.
#[inline]
pub fn max_merge_line<T: Copy + Ord>(dst: &mut [T], src: &[T]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (*d).max(s);
    }
}

/// `dst[i] = max(dst[i], fill)` over the whole line.
#[inline]
pub fn fill_max_line<T: Copy + Ord>(dst: &mut [T], fill: T) {
    for d in dst.iter_mut() {
        *d = (*d).max(fill);
    }
}

/// Merges `src` moved `amount` positions towards the start of the line.
///
/// `dst[i]` meets `src[i + amount]`; the last `amount` positions meet `fill`.
/// `amount` is clamped to the line length.
#[inline]
pub fn shift_left_line<T: Copy + Ord>(dst: &mut [T], src: &[T], amount: usize, fill: T) {
    let n = dst.len();
    let amount = amount.min(n);
    let keep = n - amount;
    max_merge_line(&mut dst[..keep], &src[amount..n]);
    fill_max_line(&mut dst[keep..], fill);
}

/// Merges `src` moved `amount` positions towards the end of the line.
///
/// `dst[i]` meets `src[i - amount]`; the first `amount` positions meet `fill`.
/// `amount` is clamped to the line length.
#[inline]
pub fn shift_right_line<T: Copy + Ord>(dst: &mut [T], src: &[T], amount: usize, fill: T) {
    let n = dst.len();
    let amount = amount.min(n);
    let keep = n - amount;
    max_merge_line(&mut dst[amount..], &src[..keep]);
    fill_max_line(&mut dst[..amount], fill);
}
