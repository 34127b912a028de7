//! # morphshift
//!
//! Directional shift and neighbor-maximum operators for morphological image
//! processing on square and hexagonal grids.
//!
//! Two operators are provided:
//! - [`shift`]: translates image content by `amplitude` steps of a grid
//!   direction, filling vacated pixels with a caller-supplied value.
//! - [`sup_vector`]: for every pixel, takes the maximum of its own value and
//!   the value of the pixel displaced from it by a vector. Repeating it along
//!   a segment gives a dilation by that segment.
//!
//! Images are 1-bit (bit-packed), 8-bit or 32-bit. 8-bit lines run on SSE
//! registers when the CPU supports it; the scalar path gives identical
//! results and is always available through [`LineOps::scalar`].
//!
//! ## Example
//!
//! ```rust
//! use morphshift::{shift, sup_vector, Depth, EdgeMode, Grid, Image};
//!
//! let mut src = Image::new(8, 8, Depth::Grey);
//! src.set(3, 3, 200);
//!
//! // Move the pixel two steps south-east (direction 4).
//! let mut moved = Image::new(8, 8, Depth::Grey);
//! shift(&src, &mut moved, 4, 2, 0, Grid::Square).unwrap();
//! assert_eq!(moved.get(5, 5), 200);
//!
//! // Grow it one pixel to the left.
//! let mut grown = moved.clone();
//! sup_vector(&moved, &mut grown, 1, 0, EdgeMode::Empty).unwrap();
//! assert_eq!(grown.get(4, 5), 200);
//! assert_eq!(grown.get(5, 5), 200);
//! ```
//!
//! ## Features
//!
//! - **`simd`** (default): SSE line primitives on x86_64
//! - **`internals`**: Expose the line primitives and depth kernels for benchmarking (unstable API)

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::doc_markdown)]

mod grid;

// Internal modules - exposed with "internals" feature for benchmarking
#[cfg(feature = "internals")]
pub mod image;
#[cfg(not(feature = "internals"))]
pub(crate) mod image;

#[cfg(feature = "internals")]
pub mod kernel;
#[cfg(not(feature = "internals"))]
pub(crate) mod kernel;

#[cfg(feature = "internals")]
pub mod line;
#[cfg(not(feature = "internals"))]
pub(crate) mod line;

pub(crate) mod orient;

mod shift;
mod stack;
mod sup_vector;

pub use grid::{opposite, orientation_of, vector_for, Grid, Orientation};
pub use image::{Depth, Image, LINE_ALIGN};
pub use line::LineOps;
pub use shift::{shift, shift_with};
pub use stack::{shift_stack, shift_stack_with, CUBIC_DIRECTIONS};
pub use sup_vector::{sup_vector, sup_vector_with, EdgeMode};

// Re-export imgref types for greyscale interop
pub use imgref::{Img, ImgRef, ImgVec};

/// Error type for shift operations.
///
/// Every check runs before any pixel is written, so a failed call leaves the
/// destination untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MorphError {
    /// Image dimensions don't match.
    BadSize {
        /// Source width and height.
        src: (usize, usize),
        /// Destination width and height.
        dest: (usize, usize),
    },
    /// Image depths don't match or aren't supported by the operation.
    BadDepth {
        /// Source bits per pixel.
        src: u32,
        /// Destination bits per pixel.
        dest: u32,
    },
    /// Direction index out of range for the grid.
    InvalidDirection {
        /// Index provided.
        direction: u32,
        /// Grid it was looked up on.
        grid: Grid,
    },
    /// Source and destination stacks hold a different number of planes.
    BadStackLength {
        /// Source planes.
        src: usize,
        /// Destination planes.
        dest: usize,
    },
    /// Cubic direction index out of range (valid: 0..27).
    InvalidStackDirection {
        /// Index provided.
        direction: u32,
    },
}

impl std::fmt::Display for MorphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadSize { src, dest } => {
                write!(
                    f,
                    "image dimensions don't match: {}x{} vs {}x{}",
                    src.0, src.1, dest.0, dest.1
                )
            }
            Self::BadDepth { src, dest } => {
                write!(f, "unsupported depth combination: {src}-bit and {dest}-bit")
            }
            Self::InvalidDirection { direction, grid } => {
                write!(
                    f,
                    "invalid direction {direction} for the {grid} grid (valid: 0..{})",
                    grid.direction_count()
                )
            }
            Self::BadStackLength { src, dest } => {
                write!(f, "stack lengths don't match: {src} vs {dest} planes")
            }
            Self::InvalidStackDirection { direction } => {
                write!(
                    f,
                    "invalid cubic direction {direction} (valid: 0..{CUBIC_DIRECTIONS})"
                )
            }
        }
    }
}

impl std::error::Error for MorphError {}
