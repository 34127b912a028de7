//! Image buffer type for the shift operators.
//!
//! Pixels are stored line by line. Each line holds
//! `ceil(width * depth / 8)` meaningful bytes and starts on a 16-byte
//! boundary relative to the first line, so that vector registers walk a line
//! from its start without straddling two lines.
//!
//! Binary images are bit-packed, least significant bit first: pixel `x`
//! lives in bit `x % 8` of byte `x / 8`.

use imgref::{ImgRef, ImgVec};

use crate::MorphError;

/// Line alignment in bytes (one 128-bit register).
pub const LINE_ALIGN: usize = 16;

/// Pixel depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// 1 bit per pixel, bit-packed.
    Binary,
    /// 8 bits per pixel.
    Grey,
    /// 32 bits per pixel.
    Long,
}

impl Depth {
    /// Bits per pixel.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Binary => 1,
            Self::Grey => 8,
            Self::Long => 32,
        }
    }

    /// Maps a bit count to a depth.
    ///
    /// # Errors
    /// [`MorphError::BadDepth`] for anything other than 1, 8 or 32.
    pub fn from_bits(bits: u32) -> Result<Self, MorphError> {
        match bits {
            1 => Ok(Self::Binary),
            8 => Ok(Self::Grey),
            32 => Ok(Self::Long),
            _ => Err(MorphError::BadDepth {
                src: bits,
                dest: bits,
            }),
        }
    }

    /// Largest pixel value at this depth.
    #[must_use]
    pub const fn max_value(self) -> u32 {
        match self {
            Self::Binary => 1,
            Self::Grey => 0xFF,
            Self::Long => u32::MAX,
        }
    }

    /// Truncates a raw value to this depth. Binary treats any non-zero value as 1.
    #[must_use]
    pub const fn truncate(self, value: u32) -> u32 {
        match self {
            Self::Binary => (value != 0) as u32,
            Self::Grey => value & 0xFF,
            Self::Long => value,
        }
    }

    /// Meaningful bytes in a line of `width` pixels.
    #[must_use]
    pub const fn line_bytes(self, width: usize) -> usize {
        match self {
            Self::Binary => width.div_ceil(8),
            Self::Grey => width,
            Self::Long => width * 4,
        }
    }
}

#[derive(Debug, Clone)]
enum Storage {
    Bytes(Vec<u8>),
    Words(Vec<u32>),
}

/// Single-plane image of uniform depth.
#[derive(Debug, Clone)]
pub struct Image {
    storage: Storage,
    width: usize,
    height: usize,
    depth: Depth,
    stride: usize, // elements per line (bytes, or words for `Long`)
}

impl Image {
    /// Creates a new image filled with zeros.
    #[must_use]
    pub fn new(width: usize, height: usize, depth: Depth) -> Self {
        let line_bytes = depth.line_bytes(width);
        let stride_bytes = line_bytes.div_ceil(LINE_ALIGN) * LINE_ALIGN;
        let storage = match depth {
            Depth::Binary | Depth::Grey => Storage::Bytes(vec![0; stride_bytes * height]),
            Depth::Long => Storage::Words(vec![0; stride_bytes / 4 * height]),
        };
        let stride = match depth {
            Depth::Long => stride_bytes / 4,
            _ => stride_bytes,
        };
        Self {
            storage,
            width,
            height,
            depth,
            stride,
        }
    }

    /// Creates an image filled with a constant value (truncated to the depth).
    #[must_use]
    pub fn filled(width: usize, height: usize, depth: Depth, value: u32) -> Self {
        let mut img = Self::new(width, height, depth);
        img.fill(value);
        img
    }

    /// Creates an image by evaluating `f(x, y)` for every pixel.
    #[must_use]
    pub fn from_fn(
        width: usize,
        height: usize,
        depth: Depth,
        mut f: impl FnMut(usize, usize) -> u32,
    ) -> Self {
        let mut img = Self::new(width, height, depth);
        for y in 0..height {
            for x in 0..width {
                img.set(x, y, f(x, y));
            }
        }
        img
    }

    /// Copies a greyscale `imgref` image (any stride) into a new 8-bit image.
    #[must_use]
    pub fn from_grey(src: ImgRef<'_, u8>) -> Self {
        let mut img = Self::new(src.width(), src.height(), Depth::Grey);
        if let Some(mut lines) = img.lines_mut::<u8>() {
            for (y, row) in src.rows().enumerate() {
                lines.line_mut(y).copy_from_slice(row);
            }
        }
        img
    }

    /// Exports an 8-bit image as a tightly packed `ImgVec`.
    ///
    /// Returns `None` for binary and 32-bit images.
    #[must_use]
    pub fn to_grey(&self) -> Option<ImgVec<u8>> {
        if self.depth != Depth::Grey {
            return None;
        }
        let lines = self.lines::<u8>()?;
        let mut buf = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            buf.extend_from_slice(lines.line(y));
        }
        Some(ImgVec::new(buf, self.width, self.height))
    }

    /// Image width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel depth.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Meaningful bytes per line.
    #[inline]
    #[must_use]
    pub fn line_bytes(&self) -> usize {
        self.depth.line_bytes(self.width)
    }

    /// Checks if two images have the same dimensions.
    #[must_use]
    pub fn same_size(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Returns the bytes of a binary or greyscale line, `None` for 32-bit images.
    ///
    /// # Panics
    /// Panics if `y` is out of range.
    #[inline]
    #[must_use]
    pub fn line(&self, y: usize) -> Option<&[u8]> {
        self.lines::<u8>().map(|lines| lines.line(y))
    }

    /// Returns the mutable bytes of a binary or greyscale line, `None` for 32-bit images.
    ///
    /// # Panics
    /// Panics if `y` is out of range.
    #[inline]
    pub fn line_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        let len = self.line_bytes();
        let start = y * self.stride;
        match &mut self.storage {
            Storage::Bytes(data) => Some(&mut data[start..start + len]),
            Storage::Words(_) => None,
        }
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
    }

    /// Gets a pixel value.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the image.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.check_bounds(x, y);
        match &self.storage {
            Storage::Bytes(data) => {
                let row = y * self.stride;
                match self.depth {
                    Depth::Binary => u32::from((data[row + x / 8] >> (x % 8)) & 1),
                    _ => u32::from(data[row + x]),
                }
            }
            Storage::Words(data) => data[y * self.stride + x],
        }
    }

    /// Sets a pixel value (truncated to the depth).
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        self.check_bounds(x, y);
        let value = self.depth.truncate(value);
        match &mut self.storage {
            Storage::Bytes(data) => {
                let row = y * self.stride;
                match self.depth {
                    Depth::Binary => {
                        let bit = 1u8 << (x % 8);
                        let byte = &mut data[row + x / 8];
                        if value != 0 {
                            *byte |= bit;
                        } else {
                            *byte &= !bit;
                        }
                    }
                    _ => data[row + x] = value as u8,
                }
            }
            Storage::Words(data) => data[y * self.stride + x] = value,
        }
    }

    /// Fills the image with a constant value (truncated to the depth).
    pub fn fill(&mut self, value: u32) {
        let value = self.depth.truncate(value);
        match &mut self.storage {
            Storage::Bytes(data) => {
                let byte = match self.depth {
                    Depth::Binary => 0u8.wrapping_sub(value as u8),
                    _ => value as u8,
                };
                data.fill(byte);
            }
            Storage::Words(data) => data.fill(value),
        }
    }

    pub(crate) fn lines<T: Sample>(&self) -> Option<Lines<'_, T>> {
        T::lines(self)
    }

    pub(crate) fn lines_mut<T: Sample>(&mut self) -> Option<LinesMut<'_, T>> {
        T::lines_mut(self)
    }
}

// ============================================================================
// Line views
// ============================================================================

/// Borrowed read-only view over the lines of an image.
pub(crate) struct Lines<'a, T> {
    data: &'a [T],
    stride: usize,
    len: usize,
}

impl<'a, T> Lines<'a, T> {
    #[inline]
    pub(crate) fn line(&self, y: usize) -> &'a [T] {
        let data: &'a [T] = self.data;
        let start = y * self.stride;
        &data[start..start + self.len]
    }
}

/// Borrowed mutable view over the lines of an image.
pub(crate) struct LinesMut<'a, T> {
    data: &'a mut [T],
    stride: usize,
    len: usize,
    height: usize,
}

impl<T> LinesMut<'_, T> {
    #[inline]
    pub(crate) fn line_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        &mut self.data[start..start + self.len]
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.height
    }
}

/// Storage element of a line: `u8` for binary and greyscale, `u32` for 32-bit.
pub(crate) trait Sample: Copy + Ord + Sized {
    fn lines(img: &Image) -> Option<Lines<'_, Self>>;
    fn lines_mut(img: &mut Image) -> Option<LinesMut<'_, Self>>;
}

impl Sample for u8 {
    fn lines(img: &Image) -> Option<Lines<'_, Self>> {
        let len = img.line_bytes();
        match &img.storage {
            Storage::Bytes(data) => Some(Lines {
                data,
                stride: img.stride,
                len,
            }),
            Storage::Words(_) => None,
        }
    }

    fn lines_mut(img: &mut Image) -> Option<LinesMut<'_, Self>> {
        let len = img.line_bytes();
        let (stride, height) = (img.stride, img.height);
        match &mut img.storage {
            Storage::Bytes(data) => Some(LinesMut {
                data,
                stride,
                len,
                height,
            }),
            Storage::Words(_) => None,
        }
    }
}

impl Sample for u32 {
    fn lines(img: &Image) -> Option<Lines<'_, Self>> {
        match &img.storage {
            Storage::Words(data) => Some(Lines {
                data,
                stride: img.stride,
                len: img.width,
            }),
            Storage::Bytes(_) => None,
        }
    }

    fn lines_mut(img: &mut Image) -> Option<LinesMut<'_, Self>> {
        let (stride, len, height) = (img.stride, img.width, img.height);
        match &mut img.storage {
            Storage::Words(data) => Some(LinesMut {
                data,
                stride,
                len,
                height,
            }),
            Storage::Bytes(_) => None,
        }
    }
}
