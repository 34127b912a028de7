//! Per-depth bundles of line primitives.
//!
//! The 2-D drivers are written once over [`LineKernel`]; each depth supplies
//! its element type and its line primitives.

use crate::line::{binary, scalar, LineOps};

/// Line primitives for one pixel depth.
///
/// `width` is the line width in pixels. Byte and word kernels ignore it since
/// their lines hold exactly `width` elements; the bit-packed kernel uses it to
/// leave padding bits alone.
pub trait LineKernel {
    /// Storage element of a line.
    type Elem: Copy + Ord;

    fn max_merge(&self, dst: &mut [Self::Elem], src: &[Self::Elem], width: usize);
    fn fill_max(&self, dst: &mut [Self::Elem], fill: Self::Elem, width: usize);
    fn shift_left(
        &self,
        dst: &mut [Self::Elem],
        src: &[Self::Elem],
        amount: usize,
        fill: Self::Elem,
        width: usize,
    );
    fn shift_right(
        &self,
        dst: &mut [Self::Elem],
        src: &[Self::Elem],
        amount: usize,
        fill: Self::Elem,
        width: usize,
    );
    /// Sets every pixel of the line to zero.
    fn clear(&self, dst: &mut [Self::Elem], width: usize);
}

/// 1-bit lines, bit-packed. A non-zero fill means "set".
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryKernel;

impl LineKernel for BinaryKernel {
    type Elem = u8;

    #[inline]
    fn max_merge(&self, dst: &mut [u8], src: &[u8], width: usize) {
        binary::max_merge_line(dst, src, width);
    }

    #[inline]
    fn fill_max(&self, dst: &mut [u8], fill: u8, width: usize) {
        binary::fill_max_line(dst, width, fill);
    }

    #[inline]
    fn shift_left(&self, dst: &mut [u8], src: &[u8], amount: usize, fill: u8, width: usize) {
        binary::shift_left_line(dst, src, width, amount, fill);
    }

    #[inline]
    fn shift_right(&self, dst: &mut [u8], src: &[u8], amount: usize, fill: u8, width: usize) {
        binary::shift_right_line(dst, src, width, amount, fill);
    }

    #[inline]
    fn clear(&self, dst: &mut [u8], width: usize) {
        binary::clear_line(dst, width);
    }
}

/// 8-bit lines, through the vector path when `LineOps` has one.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreyKernel(pub LineOps);

impl LineKernel for GreyKernel {
    type Elem = u8;

    #[inline]
    fn max_merge(&self, dst: &mut [u8], src: &[u8], _width: usize) {
        self.0.max_merge_line(dst, src);
    }

    #[inline]
    fn fill_max(&self, dst: &mut [u8], fill: u8, _width: usize) {
        self.0.fill_max_line(dst, fill);
    }

    #[inline]
    fn shift_left(&self, dst: &mut [u8], src: &[u8], amount: usize, fill: u8, _width: usize) {
        self.0.shift_left_line(dst, src, amount, fill);
    }

    #[inline]
    fn shift_right(&self, dst: &mut [u8], src: &[u8], amount: usize, fill: u8, _width: usize) {
        self.0.shift_right_line(dst, src, amount, fill);
    }

    #[inline]
    fn clear(&self, dst: &mut [u8], _width: usize) {
        dst.fill(0);
    }
}

/// 32-bit lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongKernel;

impl LineKernel for LongKernel {
    type Elem = u32;

    #[inline]
    fn max_merge(&self, dst: &mut [u32], src: &[u32], _width: usize) {
        scalar::max_merge_line(dst, src);
    }

    #[inline]
    fn fill_max(&self, dst: &mut [u32], fill: u32, _width: usize) {
        scalar::fill_max_line(dst, fill);
    }

    #[inline]
    fn shift_left(&self, dst: &mut [u32], src: &[u32], amount: usize, fill: u32, _width: usize) {
        scalar::shift_left_line(dst, src, amount, fill);
    }

    #[inline]
    fn shift_right(&self, dst: &mut [u32], src: &[u32], amount: usize, fill: u32, _width: usize) {
        scalar::shift_right_line(dst, src, amount, fill);
    }

    #[inline]
    fn clear(&self, dst: &mut [u32], _width: usize) {
        dst.fill(0);
    }
}
