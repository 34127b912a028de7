//! Directional neighbor maximum, the building block of dilation along a vector.

use crate::grid::orientation_of;
use crate::image::{Depth, Image, Sample};
use crate::kernel::{BinaryKernel, GreyKernel, LineKernel};
use crate::line::LineOps;
use crate::orient::views;
use crate::MorphError;

/// Value assumed for pixels outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeMode {
    /// Outside pixels are background (0).
    #[default]
    Empty,
    /// Outside pixels are foreground (the largest value of the depth).
    Filled,
}

impl EdgeMode {
    /// Literal fill value for `depth`.
    #[must_use]
    pub const fn fill_for(self, depth: Depth) -> u32 {
        match self {
            Self::Empty => 0,
            Self::Filled => depth.max_value(),
        }
    }
}

/// `srcdest[x, y] = max(srcdest[x, y], src[x + dx, y + dy])` for every pixel.
///
/// Neighbors outside the image take the value selected by `edge`. Only
/// binary/binary and greyscale/greyscale pairs are accepted.
///
/// # Errors
/// - [`MorphError::BadSize`] if the images differ in width or height.
/// - [`MorphError::BadDepth`] for any other depth combination.
///
/// # Example
/// ```rust
/// use morphshift::{sup_vector, Depth, EdgeMode, Image};
///
/// let mut src = Image::new(4, 1, Depth::Grey);
/// src.set(2, 0, 50);
/// let mut acc = src.clone();
/// sup_vector(&src, &mut acc, 1, 0, EdgeMode::Empty).unwrap();
/// assert_eq!(acc.get(1, 0), 50);
/// assert_eq!(acc.get(2, 0), 50);
/// ```
pub fn sup_vector(
    src: &Image,
    srcdest: &mut Image,
    dx: i32,
    dy: i32,
    edge: EdgeMode,
) -> Result<(), MorphError> {
    sup_vector_with(LineOps::detect(), src, srcdest, dx, dy, edge)
}

/// [`sup_vector`] with an explicit choice of line primitives.
///
/// # Errors
/// Same as [`sup_vector`].
pub fn sup_vector_with(
    ops: LineOps,
    src: &Image,
    srcdest: &mut Image,
    dx: i32,
    dy: i32,
    edge: EdgeMode,
) -> Result<(), MorphError> {
    if !src.same_size(srcdest) {
        let err = MorphError::BadSize {
            src: (src.width(), src.height()),
            dest: (srcdest.width(), srcdest.height()),
        };
        log::debug!("sup_vector rejected: {err}");
        return Err(err);
    }

    let v = (i64::from(dx), i64::from(dy));
    let orientation = orientation_of(v.0, v.1);
    let fill = edge.fill_for(src.depth());
    log::trace!(
        "sup_vector {}x{} depth {} {orientation:?} ({dx}, {dy}) fill {fill} ({ops:?})",
        src.width(),
        src.height(),
        src.depth().bits(),
    );

    match (src.depth(), srcdest.depth()) {
        (Depth::Binary, Depth::Binary) => neighbor_max(&BinaryKernel, src, srcdest, v, fill as u8),
        (Depth::Grey, Depth::Grey) => neighbor_max(&GreyKernel(ops), src, srcdest, v, fill as u8),
        (s, d) => {
            let err = MorphError::BadDepth {
                src: s.bits(),
                dest: d.bits(),
            };
            log::debug!("sup_vector rejected: {err}");
            Err(err)
        }
    }
}

fn neighbor_max<K>(
    k: &K,
    src: &Image,
    srcdest: &mut Image,
    v: (i64, i64),
    fill: K::Elem,
) -> Result<(), MorphError>
where
    K: LineKernel,
    K::Elem: Sample,
{
    let width = src.width();
    let (s, mut d) = views::<K::Elem>(src, srcdest)?;
    orientation_of(v.0, v.1).drive(k, &s, &mut d, width, v, fill);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_mode_literals() {
        assert_eq!(EdgeMode::Empty.fill_for(Depth::Long), 0);
        assert_eq!(EdgeMode::Filled.fill_for(Depth::Binary), 1);
        assert_eq!(EdgeMode::Filled.fill_for(Depth::Grey), 255);
        assert_eq!(EdgeMode::Filled.fill_for(Depth::Long), u32::MAX);
    }

    #[test]
    fn test_zero_vector_is_pointwise_max() {
        let src = Image::from_fn(10, 3, Depth::Grey, |x, _| (x * 20) as u32);
        let mut acc = Image::filled(10, 3, Depth::Grey, 100);
        sup_vector(&src, &mut acc, 0, 0, EdgeMode::Filled).unwrap();
        for x in 0..10 {
            assert_eq!(acc.get(x, 1), ((x * 20) as u32).max(100));
        }
    }

    #[test]
    fn test_filled_edge_reaches_border() {
        let src = Image::new(5, 5, Depth::Binary);
        let mut acc = Image::new(5, 5, Depth::Binary);
        sup_vector(&src, &mut acc, -1, 1, EdgeMode::Filled).unwrap();
        // Column 0 and row 4 look outside the image.
        assert_eq!(acc.get(0, 2), 1);
        assert_eq!(acc.get(3, 4), 1);
        assert_eq!(acc.get(3, 2), 0);
    }

    #[test]
    fn test_rejects_long_and_mixed_depths() {
        let long = Image::new(4, 4, Depth::Long);
        let mut long_acc = Image::new(4, 4, Depth::Long);
        assert!(matches!(
            sup_vector(&long, &mut long_acc, 1, 0, EdgeMode::Empty),
            Err(MorphError::BadDepth { src: 32, dest: 32 })
        ));
        let binary = Image::new(4, 4, Depth::Binary);
        assert!(matches!(
            sup_vector(&binary, &mut long_acc, 1, 0, EdgeMode::Empty),
            Err(MorphError::BadDepth { src: 1, dest: 32 })
        ));
        let mut other = Image::new(4, 5, Depth::Long);
        assert!(matches!(
            sup_vector(&binary, &mut other, 1, 0, EdgeMode::Empty),
            Err(MorphError::BadSize { .. })
        ));
    }
}
