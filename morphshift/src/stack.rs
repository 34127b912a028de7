//! Shifts over stacks of planes on the cubic grid.
//!
//! A stack is a slice of equally sized planes. Directions 0..=8 are the square in-plane directions. 9..=17 add one step
//! to the previous plane (`plane i -> i - amplitude`) and 18..=26 one step to
//! the next plane (`plane i -> i + amplitude`), combined with the in-plane
//! direction `d % 9`.
//!
//! Only the cubic grid is supported; centered-cubic and face-centered-cubic
//! stacks are not.

use crate::grid::Grid;
use crate::line::LineOps;
use crate::shift::{check_pair, shift_with};
use crate::{Image, MorphError};

/// Number of cubic grid directions, center included.
pub const CUBIC_DIRECTIONS: u32 = 27;

/// Shifts every plane of `src` into `dest` by `amplitude` steps of a cubic
/// `direction`.
///
/// Destination planes that receive no source plane are filled with `fill`.
///
/// # Errors
/// - [`MorphError::BadStackLength`] if the stacks differ in length.
/// - [`MorphError::BadSize`] / [`MorphError::BadDepth`] if any plane differs
///   from the first source plane.
/// - [`MorphError::InvalidStackDirection`] if `direction >= 27`.
///
/// Nothing is written on error.
pub fn shift_stack(
    src: &[Image],
    dest: &mut [Image],
    direction: u32,
    amplitude: u32,
    fill: u32,
) -> Result<(), MorphError> {
    shift_stack_with(LineOps::detect(), src, dest, direction, amplitude, fill)
}

/// [`shift_stack`] with an explicit choice of line primitives.
///
/// # Errors
/// Same as [`shift_stack`].
pub fn shift_stack_with(
    ops: LineOps,
    src: &[Image],
    dest: &mut [Image],
    direction: u32,
    amplitude: u32,
    fill: u32,
) -> Result<(), MorphError> {
    validate(src, dest, direction).inspect_err(|e| log::debug!("shift_stack rejected: {e}"))?;

    let len = src.len();
    let amp = usize::try_from(amplitude).unwrap_or(usize::MAX);
    let in_plane = direction % 9;
    log::trace!("shift_stack {len} planes direction {direction} amplitude {amplitude}");

    for (j, plane) in dest.iter_mut().enumerate() {
        let from = match direction / 9 {
            0 => Some(j),
            1 => j.checked_add(amp).filter(|&i| i < len),
            _ => j.checked_sub(amp),
        };
        match from {
            Some(i) => shift_with(ops, &src[i], plane, in_plane, amplitude, fill, Grid::Square)?,
            None => plane.fill(fill),
        }
    }
    Ok(())
}

fn validate(src: &[Image], dest: &[Image], direction: u32) -> Result<(), MorphError> {
    if src.len() != dest.len() {
        return Err(MorphError::BadStackLength {
            src: src.len(),
            dest: dest.len(),
        });
    }
    if let Some(first) = src.first() {
        let planes = || src.iter().chain(dest);
        // All sizes before any depth.
        if let Some(plane) = planes().find(|p| !first.same_size(p)) {
            return Err(MorphError::BadSize {
                src: (first.width(), first.height()),
                dest: (plane.width(), plane.height()),
            });
        }
        for plane in planes() {
            check_pair(first, plane)?;
        }
    }
    if direction >= CUBIC_DIRECTIONS {
        return Err(MorphError::InvalidStackDirection { direction });
    }
    Ok(())
}
