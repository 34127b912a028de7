//! Bit-packed line primitives for binary images.
//!
//! A binary line stores pixel `x` in bit `x % 8` of byte `x / 8`. The
//! maximum of two binary pixels is their OR, so the primitives OR source bits
//! into the destination. Amounts are in pixels. Bits past `width` in the last
//! byte are padding: they are never read as pixels and never written.

/// Bits of byte `i` that hold pixels of a `width`-pixel line.
#[inline]
fn line_mask(i: usize, width: usize) -> u8 {
    let first = i * 8;
    if first >= width {
        0
    } else if width - first >= 8 {
        0xFF
    } else {
        (1u8 << (width - first)) - 1
    }
}

/// Bits `k` of an 8-pixel window starting at pixel `start` for which
/// `0 <= start + k < width`.
#[inline]
fn window_mask(start: i64, width: usize) -> u8 {
    let lo = (-start).clamp(0, 8);
    let hi = (width as i64 - start).clamp(0, 8);
    if hi <= lo {
        return 0;
    }
    ((1u16 << hi) - (1u16 << lo)) as u8
}

/// Raw 8-pixel window starting at pixel `start`; bytes outside the slice read as 0.
#[inline]
fn window(src: &[u8], start: i64) -> u8 {
    let byte_at = |k: i64| -> u16 {
        usize::try_from(k)
            .ok()
            .and_then(|k| src.get(k))
            .map_or(0, |&b| u16::from(b))
    };
    let j = start.div_euclid(8);
    let r = start.rem_euclid(8);
    (((byte_at(j + 1) << 8) | byte_at(j)) >> r) as u8
}

#[inline]
fn fill_byte(fill: u8) -> u8 {
    if fill != 0 { 0xFF } else { 0 }
}

/// ORs `src` pixel `x + offset` into `dst` pixel `x`, `fill` standing in for
/// pixels outside `[0, width)`.
fn merge_offset(dst: &mut [u8], src: &[u8], width: usize, offset: i64, fill: u8) {
    let fill = fill_byte(fill);
    for (i, d) in dst.iter_mut().enumerate() {
        let dmask = line_mask(i, width);
        if dmask == 0 {
            break;
        }
        let start = (i * 8) as i64 + offset;
        let smask = window_mask(start, width);
        let bits = (window(src, start) & smask) | (fill & !smask);
        *d |= bits & dmask;
    }
}

/// `dst |= src` over the `width` pixels of the line.
pub fn max_merge_line(dst: &mut [u8], src: &[u8], width: usize) {
    for (i, (d, &s)) in dst.iter_mut().zip(src).enumerate() {
        let mask = line_mask(i, width);
        if mask == 0 {
            break;
        }
        *d |= s & mask;
    }
}

/// Sets every pixel of the line when `fill` is non-zero.
pub fn fill_max_line(dst: &mut [u8], width: usize, fill: u8) {
    if fill == 0 {
        return;
    }
    for (i, d) in dst.iter_mut().enumerate() {
        *d |= line_mask(i, width);
    }
}

/// Clears every pixel of the line, leaving padding bits alone.
pub fn clear_line(dst: &mut [u8], width: usize) {
    for (i, d) in dst.iter_mut().enumerate() {
        *d &= !line_mask(i, width);
    }
}

/// `dst[x] |= src[x + amount]`, the last `amount` pixels meeting `fill`.
pub fn shift_left_line(dst: &mut [u8], src: &[u8], width: usize, amount: usize, fill: u8) {
    let amount = amount.min(width) as i64;
    merge_offset(dst, src, width, amount, fill);
}

/// `dst[x] |= src[x - amount]`, the first `amount` pixels meeting `fill`.
pub fn shift_right_line(dst: &mut [u8], src: &[u8], width: usize, amount: usize, fill: u8) {
    let amount = amount.min(width) as i64;
    merge_offset(dst, src, width, -amount, fill);
}
