use rgb::ComponentBytes as _;

use crate::error::BitmapError;

/// One decoded sample: 8-bit red, green and blue, no alpha.
pub type Pixel = rgb::RGB8;

/// Decoded pixel grid, stored as one flat row-major buffer.
///
/// Row 0 is the first row stored in the file, which for BMP is the visual
/// bottom of the image. Rows are never flipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl Raster {
    pub(crate) fn new(pixels: Vec<Pixel>, width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Allocation size in bytes of a `width` x `height` raster.
    pub(crate) fn byte_len(width: u32, height: u32) -> Result<usize, BitmapError> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(size_of::<Pixel>()))
            .ok_or(BitmapError::DimensionsTooLarge { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels, row after row in stored (bottom-up) order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Flat `r, g, b, r, g, b, ...` view of the pixel data.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Pixel at column `x` of stored row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Stored row `y` (row 0 = bottom scanline).
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Rows in stored order, bottom scanline first.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        (0..self.height).map(move |y| {
            let start = y * self.width;
            &self.pixels[start..start + self.width]
        })
    }

    /// Zero-copy [`imgref::ImgRef`] view. `None` when the raster has no pixels.
    ///
    /// The view keeps the stored row order, so its first row is the bottom
    /// of the image.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Option<imgref::ImgRef<'_, Pixel>> {
        if self.is_empty() {
            return None;
        }
        Some(imgref::ImgRef::new(&self.pixels[..], self.width, self.height))
    }

    /// Copy into an owned [`imgref::ImgVec`]. `None` when the raster has no pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Option<imgref::ImgVec<Pixel>> {
        if self.is_empty() {
            return None;
        }
        Some(imgref::ImgVec::new(
            self.pixels.clone(),
            self.width,
            self.height,
        ))
    }
}
