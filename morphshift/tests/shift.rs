//! Shift engine against per-pixel references, on every depth and both grids.

mod common;

use common::generators::{checkerboard, noise, sparse};
use common::{pixels, reference_shift};
use morphshift::{
    opposite, shift, shift_with, sup_vector, vector_for, Depth, EdgeMode, Grid, Image, LineOps,
    MorphError,
};

const DEPTHS: [Depth; 3] = [Depth::Binary, Depth::Grey, Depth::Long];

/// Hexagonal steps in half-pixel x units, indexed by direction.
const HEX_HALF_STEPS: [(i64, i64); 7] = [(0, 0), (1, -1), (2, 0), (1, 1), (-1, 1), (-2, 0), (-1, -1)];

/// Hexagonal shift computed in doubled-x coordinates, where a pixel at
/// `(x, y)` sits at `2x + (y & 1)`.
fn reference_hex_shift(src: &Image, direction: u32, amplitude: u32, fill: u32) -> Vec<u32> {
    let (hx, hy) = HEX_HALF_STEPS[direction as usize];
    let (ex, ey) = (hx * i64::from(amplitude), hy * i64::from(amplitude));
    let fill = src.depth().truncate(fill);
    let (w, h) = (src.width() as i64, src.height() as i64);
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let sy = y - ey;
            let sx2 = 2 * x + (y & 1) - ex;
            let v = if (0..h).contains(&sy) {
                let sx = (sx2 - (sy & 1)) / 2;
                if (0..w).contains(&sx) { src.get(sx as usize, sy as usize) } else { fill }
            } else {
                fill
            };
            out.push(v);
        }
    }
    out
}

fn run(src: &Image, direction: u32, amplitude: u32, fill: u32, grid: Grid) -> Image {
    let mut dest = Image::new(src.width(), src.height(), src.depth());
    shift(src, &mut dest, direction, amplitude, fill, grid).unwrap();
    dest
}

/// Pixels at least `margin` away from every border.
fn interior(img: &Image, margin: usize) -> Vec<u32> {
    let mut out = Vec::new();
    for y in margin..img.height().saturating_sub(margin) {
        for x in margin..img.width().saturating_sub(margin) {
            out.push(img.get(x, y));
        }
    }
    out
}

#[test]
fn edge_fill_on_full_image() {
    let src = Image::filled(3, 3, Depth::Grey, 255);
    let dest = run(&src, 3, 1, 0, Grid::Square);
    assert_eq!(pixels(&dest), vec![0, 255, 255, 0, 255, 255, 0, 255, 255]);
}

#[test]
fn checkerboard_shift_then_neighbor_max_at_negated_vector() {
    let board = checkerboard(4, 4, Depth::Grey);
    let shifted = run(&board, 3, 1, 0, Grid::Square);

    // Reading the shifted image one pixel to the right recovers the board,
    // except for the last column which looks outside.
    let mut acc = Image::new(4, 4, Depth::Grey);
    sup_vector(&shifted, &mut acc, 1, 0, EdgeMode::Empty).unwrap();
    let expected: Vec<u32> = (0..16)
        .map(|i| {
            let (x, y) = (i % 4, i / 4);
            if x == 3 { 0 } else { board.get(x, y) }
        })
        .collect();
    assert_eq!(pixels(&acc), expected);

    let mut acc = board.clone();
    sup_vector(&shifted, &mut acc, 1, 0, EdgeMode::Empty).unwrap();
    assert_eq!(pixels(&acc), pixels(&board));
}

#[test]
fn size_mismatch_leaves_destination_untouched() {
    let src = noise(8, 8, Depth::Grey, 1);
    let mut dest = Image::filled(8, 7, Depth::Grey, 42);
    assert!(matches!(
        shift(&src, &mut dest, 3, 1, 0, Grid::Square),
        Err(MorphError::BadSize {
            src: (8, 8),
            dest: (8, 7)
        })
    ));
    assert!(pixels(&dest).iter().all(|&v| v == 42));
}

#[test]
fn square_shifts_match_reference_on_every_depth() {
    for depth in DEPTHS {
        let src = noise(37, 11, depth, 7);
        for direction in 0..Grid::Square.direction_count() {
            let (vx, vy) = vector_for(direction, Grid::Square).unwrap();
            for amplitude in [0u32, 1, 2, 5, 16, 17, 40] {
                for fill in [0, u32::MAX] {
                    let dest = run(&src, direction, amplitude, fill, Grid::Square);
                    let a = i64::from(amplitude);
                    assert_eq!(
                        pixels(&dest),
                        reference_shift(&src, a * i64::from(vx), a * i64::from(vy), fill),
                        "{depth:?} direction {direction} amplitude {amplitude} fill {fill}"
                    );
                }
            }
        }
    }
}

#[test]
fn hexagonal_shifts_match_reference_on_every_depth() {
    for depth in DEPTHS {
        let src = noise(23, 12, depth, 99);
        for direction in 0..Grid::Hexagonal.direction_count() {
            for amplitude in [0u32, 1, 2, 3, 6, 30] {
                let dest = run(&src, direction, amplitude, 1, Grid::Hexagonal);
                assert_eq!(
                    pixels(&dest),
                    reference_hex_shift(&src, direction, amplitude, 1),
                    "{depth:?} direction {direction} amplitude {amplitude}"
                );
            }
        }
    }
}

#[test]
fn hexagonal_amplitude_equals_repeated_unit_shifts() {
    let src = sparse(30, 30, Depth::Grey, 4, 5);
    for direction in 1..Grid::Hexagonal.direction_count() {
        for amplitude in 2..6u32 {
            let direct = run(&src, direction, amplitude, 0, Grid::Hexagonal);
            let mut stepped = src.clone();
            for _ in 0..amplitude {
                stepped = run(&stepped, direction, 1, 0, Grid::Hexagonal);
            }
            let margin = amplitude as usize + 1;
            assert_eq!(
                interior(&direct, margin),
                interior(&stepped, margin),
                "direction {direction} amplitude {amplitude}"
            );
        }
    }
}

#[test]
fn opposite_shift_restores_interior() {
    for grid in [Grid::Square, Grid::Hexagonal] {
        let src = noise(25, 20, Depth::Grey, 3);
        for direction in 0..grid.direction_count() {
            let back = opposite(direction, grid).unwrap();
            for amplitude in [1u32, 2, 3] {
                let there = run(&src, direction, amplitude, 0, grid);
                let again = run(&there, back, amplitude, 0, grid);
                let margin = amplitude as usize + 1;
                assert_eq!(
                    interior(&again, margin),
                    interior(&src, margin),
                    "{grid} direction {direction} amplitude {amplitude}"
                );
            }
        }
    }
}

#[test]
fn binary_padding_never_becomes_content() {
    // Width 13 leaves 3 padding bits in the last byte of every line, and
    // `filled` sets them.
    let src = Image::filled(13, 4, Depth::Binary, 1);
    let dest = run(&src, 7, 2, 0, Grid::Square);
    for y in 0..4 {
        assert_eq!(dest.get(10, y), 1);
        assert_eq!(dest.get(11, y), 0);
        assert_eq!(dest.get(12, y), 0);
    }
}

#[test]
fn vector_and_scalar_paths_agree_on_wide_images() {
    let src = noise(203, 9, Depth::Grey, 11);
    for grid in [Grid::Square, Grid::Hexagonal] {
        for direction in 0..grid.direction_count() {
            for amplitude in [1u32, 15, 16, 17, 33, 64, 150] {
                let mut fast = Image::new(203, 9, Depth::Grey);
                let mut slow = Image::new(203, 9, Depth::Grey);
                shift_with(LineOps::detect(), &src, &mut fast, direction, amplitude, 77, grid)
                    .unwrap();
                shift_with(LineOps::scalar(), &src, &mut slow, direction, amplitude, 77, grid)
                    .unwrap();
                assert_eq!(pixels(&fast), pixels(&slow), "{grid} {direction} {amplitude}");
            }
        }
    }
}

#[test]
fn empty_images_are_accepted() {
    for depth in DEPTHS {
        let src = Image::new(0, 5, depth);
        let mut dest = Image::new(0, 5, depth);
        shift(&src, &mut dest, 4, 3, 1, Grid::Square).unwrap();
        let src = Image::new(6, 0, depth);
        let mut dest = Image::new(6, 0, depth);
        shift(&src, &mut dest, 2, 3, 1, Grid::Hexagonal).unwrap();
    }
}
