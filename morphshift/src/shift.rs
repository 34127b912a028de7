//! Translation of image content by a grid direction and an amplitude.

use crate::grid::{hex_displacement, hex_line_offset, orientation_of, vector_for, Grid};
use crate::image::{Depth, Image, Sample};
use crate::kernel::{BinaryKernel, GreyKernel, LineKernel, LongKernel};
use crate::line::LineOps;
use crate::orient::{clear, staggered, views};
use crate::MorphError;

/// Resolved displacement of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Displacement {
    /// Content moves by `(dx, dy)` pixels.
    Square { dx: i64, dy: i64 },
    /// Content moves by `(ex, ey)`, `ex` in half pixels.
    Hexagonal { ex: i64, ey: i64 },
}

impl Displacement {
    fn resolve(direction: u32, amplitude: u32, grid: Grid) -> Result<Self, MorphError> {
        match grid {
            Grid::Square => {
                let (vx, vy) = vector_for(direction, grid)?;
                let a = i64::from(amplitude);
                Ok(Self::Square {
                    dx: a * i64::from(vx),
                    dy: a * i64::from(vy),
                })
            }
            Grid::Hexagonal => {
                let (ex, ey) = hex_displacement(direction, amplitude)?;
                Ok(Self::Hexagonal { ex, ey })
            }
        }
    }
}

/// Checks that two images can take part in one operation: size first, then depth.
pub(crate) fn check_pair(src: &Image, dest: &Image) -> Result<(), MorphError> {
    if !src.same_size(dest) {
        return Err(MorphError::BadSize {
            src: (src.width(), src.height()),
            dest: (dest.width(), dest.height()),
        });
    }
    if src.depth() != dest.depth() {
        return Err(MorphError::BadDepth {
            src: src.depth().bits(),
            dest: dest.depth().bits(),
        });
    }
    Ok(())
}

/// Shifts `src` into `dest` by `amplitude` steps of `direction` on `grid`.
///
/// Every pixel of `dest` is overwritten. Pixels whose source lies outside the
/// image get `fill`, truncated to the image depth. Works on all depths.
///
/// # Errors
/// - [`MorphError::BadSize`] if the images differ in width or height.
/// - [`MorphError::BadDepth`] if the images differ in depth.
/// - [`MorphError::InvalidDirection`] if `direction` is out of range for `grid`.
///
/// `dest` is left untouched on error.
///
/// # Example
/// ```rust
/// use morphshift::{shift, Depth, Grid, Image};
///
/// let src = Image::filled(3, 3, Depth::Grey, 255);
/// let mut dest = Image::new(3, 3, Depth::Grey);
/// // Direction 3 is east.
/// shift(&src, &mut dest, 3, 1, 0, Grid::Square).unwrap();
/// assert_eq!(dest.get(0, 1), 0);
/// assert_eq!(dest.get(1, 1), 255);
/// ```
pub fn shift(
    src: &Image,
    dest: &mut Image,
    direction: u32,
    amplitude: u32,
    fill: u32,
    grid: Grid,
) -> Result<(), MorphError> {
    shift_with(LineOps::detect(), src, dest, direction, amplitude, fill, grid)
}

/// [`shift`] with an explicit choice of line primitives.
///
/// # Errors
/// Same as [`shift`].
pub fn shift_with(
    ops: LineOps,
    src: &Image,
    dest: &mut Image,
    direction: u32,
    amplitude: u32,
    fill: u32,
    grid: Grid,
) -> Result<(), MorphError> {
    let displacement = check_pair(src, dest)
        .and_then(|()| Displacement::resolve(direction, amplitude, grid))
        .inspect_err(|e| log::debug!("shift rejected: {e}"))?;

    let depth = src.depth();
    let fill = depth.truncate(fill);
    log::trace!(
        "shift {}x{} depth {} {displacement:?} fill {fill} ({ops:?})",
        src.width(),
        src.height(),
        depth.bits(),
    );

    match depth {
        Depth::Binary => translate(&BinaryKernel, src, dest, displacement, fill as u8),
        Depth::Grey => translate(&GreyKernel(ops), src, dest, displacement, fill as u8),
        Depth::Long => translate(&LongKernel, src, dest, displacement, fill),
    }
}

/// Clears `dest`, then max-merges the displaced source into it.
fn translate<K>(
    k: &K,
    src: &Image,
    dest: &mut Image,
    displacement: Displacement,
    fill: K::Elem,
) -> Result<(), MorphError>
where
    K: LineKernel,
    K::Elem: Sample,
{
    let width = src.width();
    let (s, mut d) = views::<K::Elem>(src, dest)?;
    clear(k, &mut d, width);
    match displacement {
        // dest[p] = src[p - v]: the neighbor of p is at -v.
        Displacement::Square { dx, dy } => {
            let v = (-dx, -dy);
            orientation_of(v.0, v.1).drive(k, &s, &mut d, width, v, fill);
        }
        Displacement::Hexagonal { ex, ey } => {
            staggered(
                k,
                &s,
                &mut d,
                width,
                -ey,
                |y| -hex_line_offset(ex, ey, y as i64),
                fill,
            );
        }
    }
    Ok(())
}
