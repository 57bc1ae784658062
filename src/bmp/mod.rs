//! 24-bit uncompressed BMP decoder (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::probe_bmp`], etc.
//!
//! Decoding runs three stages over one forward-only stream:
//! headers, then the gap up to the declared pixel offset, then the rows.

mod decode;
mod header;
mod reader;

pub use decode::row_stride;
pub use header::{FILE_HEADER_LEN, FileHeader, HEADERS_LEN, INFO_HEADER_LEN, InfoHeader};

use std::io::Read;

use crate::decode::{Bitmap, Headers};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::Raster;
use reader::ByteReader;

/// Parse both headers and leave the reader positioned right after them.
fn read_headers<R: Read>(reader: &mut ByteReader<R>) -> Result<Headers, BitmapError> {
    let file = header::read_file_header(reader)?;
    let info = header::read_info_header(reader)?;
    Ok(Headers { file, info })
}

/// Header-only parse; no gap or pixel byte is consumed.
pub(crate) fn probe<R: Read>(input: R) -> Result<Headers, BitmapError> {
    read_headers(&mut ByteReader::new(input))
}

/// Full decode.
pub(crate) fn decode<R: Read>(input: R, limits: Option<&Limits>) -> Result<Bitmap, BitmapError> {
    let mut reader = ByteReader::new(input);

    let headers = read_headers(&mut reader)?;
    // Validation guarantees both are non-negative.
    let width = headers.info.width.unsigned_abs();
    let height = headers.info.height.unsigned_abs();
    check_limits(limits, width, height)?;

    decode::skip_gap(&mut reader, headers.file.pixel_offset)?;

    let pixels = decode::read_pixel_array(&mut reader, width as usize, height as usize)?;
    let raster = Raster::new(pixels, width as usize, height as usize);
    Ok(Bitmap::new(headers.file, headers.info, raster))
}

fn check_limits(limits: Option<&Limits>, width: u32, height: u32) -> Result<(), BitmapError> {
    match limits {
        Some(limits) => limits.check_raster(width, height),
        None => Raster::byte_len(width, height).map(|_| ()),
    }
}
