//! Line primitives: the four operations every 2-D driver is built from.
//!
//! [`scalar`] holds the reference versions for 8-bit and 32-bit lines and
//! [`binary`] the bit-packed ones. On x86_64 with the `simd` feature, 8-bit
//! lines go through the SSE versions in `x86` whenever [`LineOps`] carries a
//! capability token.

pub mod binary;
pub mod scalar;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod x86;

use std::fmt;

/// Handle selecting the implementation of the 8-bit line primitives.
///
/// Both paths produce identical results; [`LineOps::scalar`] exists so the
/// vector path can be checked against it.
#[derive(Clone, Copy)]
pub struct LineOps {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    token: Option<archmage::X64V2Token>,
}

impl LineOps {
    /// Uses the vector path if the CPU supports it.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            use archmage::SimdToken;
            Self {
                token: archmage::X64V2Token::summon(),
            }
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            Self {}
        }
    }

    /// Always uses the scalar path.
    #[must_use]
    pub fn scalar() -> Self {
        Self {
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            token: None,
        }
    }

    /// Whether these ops run on vector registers.
    #[must_use]
    pub fn is_vectorized(self) -> bool {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            self.token.is_some()
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            false
        }
    }

    /// `dst[i] = max(dst[i], src[i])`.
    #[inline]
    pub fn max_merge_line(self, dst: &mut [u8], src: &[u8]) {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        if let Some(t) = self.token {
            return x86::max_merge_line(t, dst, src);
        }
        scalar::max_merge_line(dst, src);
    }

    /// `dst[i] = max(dst[i], fill)`.
    #[inline]
    pub fn fill_max_line(self, dst: &mut [u8], fill: u8) {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        if let Some(t) = self.token {
            return x86::fill_max_line(t, dst, fill);
        }
        scalar::fill_max_line(dst, fill);
    }

    /// `dst[i] = max(dst[i], src[i + amount])`, the last `amount` bytes meeting `fill`.
    #[inline]
    pub fn shift_left_line(self, dst: &mut [u8], src: &[u8], amount: usize, fill: u8) {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        if let Some(t) = self.token {
            return x86::shift_left_line(t, dst, src, amount, fill);
        }
        scalar::shift_left_line(dst, src, amount, fill);
    }

    /// `dst[i] = max(dst[i], src[i - amount])`, the first `amount` bytes meeting `fill`.
    #[inline]
    pub fn shift_right_line(self, dst: &mut [u8], src: &[u8], amount: usize, fill: u8) {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        if let Some(t) = self.token {
            return x86::shift_right_line(t, dst, src, amount, fill);
        }
        scalar::shift_right_line(dst, src, amount, fill);
    }
}

impl Default for LineOps {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Debug for LineOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineOps")
            .field("vectorized", &self.is_vectorized())
            .finish()
    }
}
