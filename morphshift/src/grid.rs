//! Grid geometry: direction tables and orientation classification.
//!
//! Directions are small indices into a per-grid table. Index 0 is always the
//! center (null vector), the others walk clockwise starting from the top.
//! The y axis grows downwards, so "up" is a negative `dy`.
//!
//! ## Hexagonal grid
//!
//! Odd lines are offset half a pixel to the right of even lines. A unit step
//! therefore lands on a different column depending on the parity of the line
//! it starts from. [`vector_for`] reports the vector of a step taken from an
//! even line; shifts by larger amplitudes go through [`hex_line_offset`],
//! which works in half-pixel units and is exact on every line.

use std::fmt;

use crate::MorphError;

/// Grid topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grid {
    /// 8-connected square grid (directions 0..=8).
    #[default]
    Square,
    /// 6-connected hexagonal grid (directions 0..=6).
    Hexagonal,
}

impl Grid {
    /// Number of valid direction indices, center included.
    #[must_use]
    pub const fn direction_count(self) -> u32 {
        match self {
            Self::Square => SQUARE_VECTORS.len() as u32,
            Self::Hexagonal => HEXAGONAL_VECTORS.len() as u32,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => f.write_str("square"),
            Self::Hexagonal => f.write_str("hexagonal"),
        }
    }
}

// ============================================================================
// Direction tables
// ============================================================================

/// Square grid: center, N, NE, E, SE, S, SW, W, NW.
const SQUARE_VECTORS: [(i32, i32); 9] = [
    (0, 0),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Hexagonal grid, step taken from an even line: center, NE, E, SE, SW, W, NW.
const HEXAGONAL_VECTORS: [(i32, i32); 7] = [
    (0, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Hexagonal grid in half-pixel x units, same order as [`HEXAGONAL_VECTORS`].
const HEXAGONAL_HALF_STEPS: [(i32, i32); 7] = [
    (0, 0),
    (1, -1),
    (2, 0),
    (1, 1),
    (-1, 1),
    (-2, 0),
    (-1, -1),
];

/// Returns the unit displacement `(dx, dy)` of `direction` on `grid`.
///
/// # Errors
/// [`MorphError::InvalidDirection`] if the index is out of range for the grid.
///
/// # Example
/// ```rust
/// use morphshift::{vector_for, Grid};
///
/// assert_eq!(vector_for(3, Grid::Square).unwrap(), (1, 0));
/// assert!(vector_for(7, Grid::Hexagonal).is_err());
/// ```
pub fn vector_for(direction: u32, grid: Grid) -> Result<(i32, i32), MorphError> {
    let table: &[(i32, i32)] = match grid {
        Grid::Square => &SQUARE_VECTORS,
        Grid::Hexagonal => &HEXAGONAL_VECTORS,
    };
    table
        .get(direction as usize)
        .copied()
        .ok_or(MorphError::InvalidDirection { direction, grid })
}

/// Returns the direction pointing the opposite way (center maps to itself).
///
/// # Errors
/// [`MorphError::InvalidDirection`] if the index is out of range for the grid.
pub fn opposite(direction: u32, grid: Grid) -> Result<u32, MorphError> {
    let count = grid.direction_count();
    if direction >= count {
        return Err(MorphError::InvalidDirection { direction, grid });
    }
    if direction == 0 {
        return Ok(0);
    }
    // Principal directions form a ring of `count - 1` entries.
    let ring = count - 1;
    Ok((direction - 1 + ring / 2) % ring + 1)
}

/// Content displacement of a hexagonal shift: `(ex, ey)` with `ex` in
/// half-pixel units.
pub(crate) fn hex_displacement(direction: u32, amplitude: u32) -> Result<(i64, i64), MorphError> {
    let (hx, hy) = HEXAGONAL_HALF_STEPS
        .get(direction as usize)
        .copied()
        .ok_or(MorphError::InvalidDirection {
            direction,
            grid: Grid::Hexagonal,
        })?;
    let a = i64::from(amplitude);
    Ok((a * i64::from(hx), a * i64::from(hy)))
}

/// Horizontal content offset, in whole pixels, of destination line `y` for a
/// hexagonal displacement `(ex, ey)`.
///
/// The source line is `y - ey`. Moving between lines of different parity
/// absorbs half a pixel, which is why the result depends on `y`.
#[inline]
pub(crate) fn hex_line_offset(ex: i64, ey: i64, y: i64) -> i64 {
    let ys = y - ey;
    (ex + ys.rem_euclid(2) - y.rem_euclid(2)).div_euclid(2)
}

// ============================================================================
// Orientation classification
// ============================================================================

/// Sign class of a displacement vector.
///
/// One 2-D driver exists per category; the magnitude of the vector is a
/// parameter of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `dx == 0 && dy == 0`
    Center,
    /// `dx == 0 && dy < 0`
    North,
    /// `dx == 0 && dy > 0`
    South,
    /// `dx > 0 && dy == 0`
    East,
    /// `dx < 0 && dy == 0`
    West,
    /// `dx > 0 && dy < 0`
    NorthEast,
    /// `dx < 0 && dy < 0`
    NorthWest,
    /// `dx > 0 && dy > 0`
    SouthEast,
    /// `dx < 0 && dy > 0`
    SouthWest,
}

impl Orientation {
    /// Every category, in a fixed order.
    pub const ALL: [Self; 9] = [
        Self::Center,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];
}

/// Classifies `(dx, dy)` by the independent signs of its components.
#[must_use]
pub fn orientation_of(dx: i64, dy: i64) -> Orientation {
    use std::cmp::Ordering::{Equal, Greater, Less};

    match (dx.cmp(&0), dy.cmp(&0)) {
        (Equal, Equal) => Orientation::Center,
        (Equal, Less) => Orientation::North,
        (Equal, Greater) => Orientation::South,
        (Greater, Equal) => Orientation::East,
        (Less, Equal) => Orientation::West,
        (Greater, Less) => Orientation::NorthEast,
        (Less, Less) => Orientation::NorthWest,
        (Greater, Greater) => Orientation::SouthEast,
        (Less, Greater) => Orientation::SouthWest,
    }
}
