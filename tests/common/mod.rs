//! Minimal 24-bit BMP writer used to build test inputs.

#![allow(dead_code)]

use bmpraster::Pixel;

/// Builder for a BITMAPINFOHEADER file with configurable quirks.
pub struct BmpBuilder {
    pub width: i32,
    pub height: i32,
    pub bit_depth: u16,
    pub compression: u32,
    pub header_size: u32,
    /// Opaque bytes inserted between the headers and the pixel array.
    pub gap: Vec<u8>,
    /// Overrides the pixel offset written to the file header.
    pub pixel_offset: Option<u32>,
    pub pad_byte: u8,
}

impl BmpBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            bit_depth: 24,
            compression: 0,
            header_size: 40,
            gap: Vec::new(),
            pixel_offset: None,
            pad_byte: 0,
        }
    }

    pub fn stride(&self) -> usize {
        (self.width as usize * 3 + 3) / 4 * 4
    }

    /// Headers followed by `raw` pixel bytes written verbatim.
    pub fn build_raw(&self, raw: &[u8]) -> Vec<u8> {
        let offset = self
            .pixel_offset
            .unwrap_or(54 + self.gap.len() as u32);
        let file_size = 54 + self.gap.len() + raw.len();

        let mut out = Vec::with_capacity(file_size);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());

        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&self.bit_depth.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&(raw.len() as u32).to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());

        out.extend_from_slice(&self.gap);
        out.extend_from_slice(raw);
        out
    }

    /// Encode `pixels` (stored row order, row 0 first) as BGR rows with padding.
    pub fn build(&self, pixels: &[Pixel]) -> Vec<u8> {
        let w = self.width as usize;
        let h = self.height as usize;
        assert_eq!(pixels.len(), w * h);
        let stride = self.stride();
        let mut raw = Vec::with_capacity(stride * h);
        for y in 0..h {
            for p in &pixels[y * w..(y + 1) * w] {
                raw.extend_from_slice(&[p.b, p.g, p.r]);
            }
            raw.resize(raw.len() + stride - w * 3, self.pad_byte);
        }
        self.build_raw(&raw)
    }
}

pub fn noise_pixels(w: usize, h: usize, seed: u32) -> Vec<Pixel> {
    let mut state = seed;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    (0..w * h)
        .map(|_| Pixel::new(next(), next(), next()))
        .collect()
}

pub fn gradient_pixels(w: usize, h: usize) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            pixels.push(Pixel::new(x as u8, y as u8, (x ^ y) as u8));
        }
    }
    pixels
}
