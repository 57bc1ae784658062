//! Gap skipping and the 24-bit pixel array reader.

use std::io::Read;

use super::header::PIXEL_OFFSET_AT;
use super::reader::ByteReader;
use crate::error::BitmapError;
use crate::pixel::Pixel;

/// Pixels converted per read call; keeps the scratch buffer on the stack
/// regardless of image width.
const CHUNK_PIXELS: usize = 1365;
const BYTES_PER_PIXEL: usize = 3;
const PREALLOC_PIXELS: usize = 1 << 20;

/// Bytes per on-disk scanline: the bit width of one row rounded up to a
/// multiple of 32 bits.
pub fn row_stride(bit_depth: u16, width: u32) -> u64 {
    (u64::from(bit_depth) * u64::from(width) + 31) / 32 * 4
}

/// Discard everything between the parsed headers and `pixel_offset`.
pub(crate) fn skip_gap<R: Read>(
    reader: &mut ByteReader<R>,
    pixel_offset: u32,
) -> Result<(), BitmapError> {
    let consumed = reader.position();
    let gap = i128::from(pixel_offset) - i128::from(consumed);
    if gap < 0 {
        return Err(BitmapError::malformed(
            PIXEL_OFFSET_AT,
            format!("pixel offset {pixel_offset} lies inside the {consumed} header bytes"),
        ));
    }
    reader.skip(gap as u64)
}

/// Read `height` bottom-up rows of `width` BGR triples, dropping row padding.
pub(crate) fn read_pixel_array<R: Read>(
    reader: &mut ByteReader<R>,
    width: usize,
    height: usize,
) -> Result<Vec<Pixel>, BitmapError> {
    let stride = row_stride(24, width as u32);
    if stride == 0 {
        // Zero-width rows occupy no bytes, whatever the height.
        return Ok(Vec::new());
    }
    let padding = (stride - width as u64 * BYTES_PER_PIXEL as u64) as usize;

    // Capped: the declared dimensions alone never size the allocation.
    let mut pixels = Vec::with_capacity(width.saturating_mul(height).min(PREALLOC_PIXELS));
    let mut chunk = [0u8; CHUNK_PIXELS * BYTES_PER_PIXEL];
    let mut pad = [0u8; 3];
    for _row in 0..height {
        let mut remaining = width;
        while remaining > 0 {
            let n = remaining.min(CHUNK_PIXELS);
            let bytes = &mut chunk[..n * BYTES_PER_PIXEL];
            reader.read_exact_bytes(bytes)?;
            pixels.extend(
                bytes
                    .chunks_exact(BYTES_PER_PIXEL)
                    .map(|bgr| Pixel::new(bgr[2], bgr[1], bgr[0])),
            );
            remaining -= n;
        }
        reader.read_exact_bytes(&mut pad[..padding])?;
    }
    Ok(pixels)
}
