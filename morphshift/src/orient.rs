//! 2-D drivers, one per orientation category.
//!
//! Every driver computes, for each destination line `y`,
//! `dst[x, y] = max(dst[x, y], src[x + dx, y + dy])` with `fill` standing in
//! for neighbors outside the image. Drivers never allocate and never fail;
//! all validation happens in the entry points.

use crate::grid::{orientation_of, Orientation};
use crate::image::{Image, Lines, LinesMut, Sample};
use crate::kernel::LineKernel;
use crate::MorphError;

/// Read and write line views of a source and destination of the same depth.
pub(crate) fn views<'a, T: Sample>(
    src: &'a Image,
    dest: &'a mut Image,
) -> Result<(Lines<'a, T>, LinesMut<'a, T>), MorphError> {
    let depths = MorphError::BadDepth {
        src: src.depth().bits(),
        dest: dest.depth().bits(),
    };
    match (src.lines::<T>(), dest.lines_mut::<T>()) {
        (Some(s), Some(d)) => Ok((s, d)),
        _ => Err(depths),
    }
}

/// Saturating conversion of a displacement magnitude to a line offset.
#[inline]
fn magnitude(v: i64) -> usize {
    usize::try_from(v.unsigned_abs()).unwrap_or(usize::MAX)
}

/// Source line index for destination line `y` displaced by `dy`, if inside.
#[inline]
fn source_row(y: usize, dy: i64, height: usize) -> Option<usize> {
    let sy = (y as i64).checked_add(dy)?;
    usize::try_from(sy).ok().filter(|&sy| sy < height)
}

/// Merges one source line into one destination line moved by `dx`.
#[inline]
fn merge_row<K: LineKernel>(
    k: &K,
    dst: &mut [K::Elem],
    src: &[K::Elem],
    dx: i64,
    fill: K::Elem,
    width: usize,
) {
    match dx.signum() {
        0 => k.max_merge(dst, src, width),
        1 => k.shift_left(dst, src, magnitude(dx), fill, width),
        _ => k.shift_right(dst, src, magnitude(dx), fill, width),
    }
}

fn center<K: LineKernel>(k: &K, src: &Lines<'_, K::Elem>, dst: &mut LinesMut<'_, K::Elem>, width: usize) {
    for y in 0..dst.height() {
        k.max_merge(dst.line_mut(y), src.line(y), width);
    }
}

fn horizontal<K: LineKernel>(
    k: &K,
    src: &Lines<'_, K::Elem>,
    dst: &mut LinesMut<'_, K::Elem>,
    width: usize,
    dx: i64,
    fill: K::Elem,
) {
    for y in 0..dst.height() {
        merge_row(k, dst.line_mut(y), src.line(y), dx, fill, width);
    }
}

fn vertical<K: LineKernel>(
    k: &K,
    src: &Lines<'_, K::Elem>,
    dst: &mut LinesMut<'_, K::Elem>,
    width: usize,
    dy: i64,
    fill: K::Elem,
) {
    let height = dst.height();
    for y in 0..height {
        match source_row(y, dy, height) {
            Some(sy) => k.max_merge(dst.line_mut(y), src.line(sy), width),
            None => k.fill_max(dst.line_mut(y), fill, width),
        }
    }
}

fn diagonal<K: LineKernel>(
    k: &K,
    src: &Lines<'_, K::Elem>,
    dst: &mut LinesMut<'_, K::Elem>,
    width: usize,
    dx: i64,
    dy: i64,
    fill: K::Elem,
) {
    staggered(k, src, dst, width, dy, |_| dx, fill);
}

/// Driver whose horizontal displacement depends on the destination line.
///
/// Hexagonal shifts use this: moving between lines of different parity
/// changes the column offset by one.
pub(crate) fn staggered<K: LineKernel>(
    k: &K,
    src: &Lines<'_, K::Elem>,
    dst: &mut LinesMut<'_, K::Elem>,
    width: usize,
    dy: i64,
    dx_of_row: impl Fn(usize) -> i64,
    fill: K::Elem,
) {
    let height = dst.height();
    for y in 0..height {
        match source_row(y, dy, height) {
            Some(sy) => merge_row(k, dst.line_mut(y), src.line(sy), dx_of_row(y), fill, width),
            None => k.fill_max(dst.line_mut(y), fill, width),
        }
    }
}

/// Sets every pixel of every destination line to zero.
pub(crate) fn clear<K: LineKernel>(k: &K, dst: &mut LinesMut<'_, K::Elem>, width: usize) {
    for y in 0..dst.height() {
        k.clear(dst.line_mut(y), width);
    }
}

impl Orientation {
    /// Runs the driver of this category for the vector `(dx, dy)`.
    ///
    /// `self` must be `orientation_of(dx, dy)`.
    pub(crate) fn drive<K: LineKernel>(
        self,
        k: &K,
        src: &Lines<'_, K::Elem>,
        dst: &mut LinesMut<'_, K::Elem>,
        width: usize,
        (dx, dy): (i64, i64),
        fill: K::Elem,
    ) {
        debug_assert_eq!(self, orientation_of(dx, dy));
        match self {
            Self::Center => center(k, src, dst, width),
            Self::East | Self::West => horizontal(k, src, dst, width, dx, fill),
            Self::North | Self::South => vertical(k, src, dst, width, dy, fill),
            Self::NorthEast | Self::NorthWest | Self::SouthEast | Self::SouthWest => {
                diagonal(k, src, dst, width, dx, dy, fill);
            }
        }
    }
}
