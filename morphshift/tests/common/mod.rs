//! Common test utilities: generators and per-pixel reference operators.
//!
//! The reference operators work pixel by pixel through `Image::get`, so they
//! share no code with the line drivers they check.

#![allow(dead_code)]

pub mod generators;

use morphshift::Image;

/// All pixels in row-major order.
pub fn pixels(img: &Image) -> Vec<u32> {
    let mut out = Vec::with_capacity(img.width() * img.height());
    for y in 0..img.height() {
        for x in 0..img.width() {
            out.push(img.get(x, y));
        }
    }
    out
}

/// Neighbor value of `(x, y)` at `(x + dx, y + dy)`, `fill` outside.
pub fn neighbor(img: &Image, x: i64, y: i64, dx: i64, dy: i64, fill: u32) -> u32 {
    let (sx, sy) = (x + dx, y + dy);
    let inside = (0..img.width() as i64).contains(&sx) && (0..img.height() as i64).contains(&sy);
    if inside { img.get(sx as usize, sy as usize) } else { fill }
}

/// `dest[p] = src[p - (dx, dy)]`, `fill` where the source is outside.
pub fn reference_shift(src: &Image, dx: i64, dy: i64, fill: u32) -> Vec<u32> {
    let fill = src.depth().truncate(fill);
    let mut out = Vec::new();
    for y in 0..src.height() as i64 {
        for x in 0..src.width() as i64 {
            out.push(neighbor(src, x, y, -dx, -dy, fill));
        }
    }
    out
}

/// `acc[p] = max(acc[p], src[p + (dx, dy)])`, `fill` where the neighbor is outside.
pub fn reference_sup(src: &Image, acc: &Image, dx: i64, dy: i64, fill: u32) -> Vec<u32> {
    let mut out = Vec::new();
    for y in 0..src.height() as i64 {
        for x in 0..src.width() as i64 {
            let own = acc.get(x as usize, y as usize);
            out.push(own.max(neighbor(src, x, y, dx, dy, fill)));
        }
    }
    out
}
