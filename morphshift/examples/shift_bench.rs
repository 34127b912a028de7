//! Benchmark for shift and neighbor-maximum throughput, vector vs scalar.
//!
//! Run with: `cargo run --release --example shift_bench --features internals`

use morphshift::line::binary;
use morphshift::{shift_with, sup_vector_with, Depth, EdgeMode, Grid, Image, LineOps};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn time(iterations: u32, mut f: impl FnMut()) -> Duration {
    // Warm up
    f();
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    start.elapsed() / iterations
}

fn main() {
    let width = 1024;
    let height = 1024;
    let iterations = 50;

    let grey = Image::from_fn(width, height, Depth::Grey, |x, y| ((x * 7 + y * 13) % 256) as u32);
    let mut dest = Image::new(width, height, Depth::Grey);

    println!("Shift benchmark");
    println!("Image size: {}x{}", width, height);
    println!("Iterations: {}", iterations);
    println!("Vector path available: {}", LineOps::detect().is_vectorized());
    println!();

    for (name, ops) in [("vector", LineOps::detect()), ("scalar", LineOps::scalar())] {
        for amplitude in [1u32, 16, 21] {
            let t = time(iterations, || {
                shift_with(ops, &grey, &mut dest, 4, amplitude, 0, Grid::Square).unwrap();
                black_box(&dest);
            });
            println!("grey shift SE x{amplitude:<3} ({name}): {t:?} per iter");
        }
        let t = time(iterations, || {
            shift_with(ops, &grey, &mut dest, 1, 5, 0, Grid::Hexagonal).unwrap();
            black_box(&dest);
        });
        println!("grey hex shift NE x5  ({name}): {t:?} per iter");

        let mut acc = grey.clone();
        let t = time(iterations, || {
            sup_vector_with(ops, &grey, &mut acc, -3, 1, EdgeMode::Filled).unwrap();
            black_box(&acc);
        });
        println!("grey sup_vector (-3,1) ({name}): {t:?} per iter");
        println!();
    }

    let bin = Image::from_fn(width, height, Depth::Binary, |x, y| u32::from((x ^ y) % 3 == 0));
    let mut bin_dest = Image::new(width, height, Depth::Binary);
    let t = time(iterations, || {
        shift_with(LineOps::detect(), &bin, &mut bin_dest, 7, 9, 1, Grid::Square).unwrap();
        black_box(&bin_dest);
    });
    println!("binary shift W x9: {t:?} per iter");

    let line = vec![0x5Au8; width / 8];
    let mut out = vec![0u8; width / 8];
    let t = time(iterations * 1000, || {
        binary::shift_left_line(&mut out, black_box(&line), width, 13, 0);
    });
    println!("binary line shift x13: {t:?} per line");
}
