//! Deterministic synthetic images for the shift tests.
//!
//! An LCG PRNG keeps inputs identical across platforms and runs.

use morphshift::{Depth, Image};

// ============================================================================
// LCG PRNG
// ============================================================================

/// LCG pseudo-random number generator (deterministic)
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    pub fn next_u8(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }

    /// Uniform in `0..n` (n > 0).
    pub fn below(&mut self, n: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(n)) >> 32) as u32
    }
}

// ============================================================================
// Image generation
// ============================================================================

/// Random image covering the full value range of the depth.
pub fn noise(width: usize, height: usize, depth: Depth, seed: u64) -> Image {
    let mut rng = Lcg::new(seed);
    Image::from_fn(width, height, depth, |_, _| match depth {
        Depth::Binary => rng.next_u32() >> 31,
        Depth::Grey => u32::from(rng.next_u8()),
        Depth::Long => rng.next_u32(),
    })
}

/// Sparse image: about one pixel in `one_in` set to the depth maximum.
pub fn sparse(width: usize, height: usize, depth: Depth, one_in: u32, seed: u64) -> Image {
    let mut rng = Lcg::new(seed);
    let max = depth.max_value();
    Image::from_fn(width, height, depth, |_, _| {
        if rng.below(one_in) == 0 { max } else { 0 }
    })
}

/// Checkerboard of 0 and the depth maximum, `(0, 0)` set.
pub fn checkerboard(width: usize, height: usize, depth: Depth) -> Image {
    let max = depth.max_value();
    Image::from_fn(width, height, depth, |x, y| if (x + y) % 2 == 0 { max } else { 0 })
}
