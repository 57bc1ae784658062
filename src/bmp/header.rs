//! File header and BITMAPINFOHEADER parsing.

use std::io::Read;

use super::reader::ByteReader;
use crate::error::BitmapError;

/// Size of the BITMAPFILEHEADER record on disk.
pub const FILE_HEADER_LEN: u32 = 14;
/// Size of the BITMAPINFOHEADER record on disk.
pub const INFO_HEADER_LEN: u32 = 40;
/// Bytes occupied by both headers on disk.
pub const HEADERS_LEN: u32 = FILE_HEADER_LEN + INFO_HEADER_LEN;

// Absolute field offsets, reported in validation errors.
const MAGIC_AT: u64 = 0;
pub(crate) const PIXEL_OFFSET_AT: u64 = 10;
const HEADER_SIZE_AT: u64 = 14;
const WIDTH_AT: u64 = 18;
const HEIGHT_AT: u64 = 22;
const BIT_DEPTH_AT: u64 = 28;
const COMPRESSION_AT: u64 = 30;

const SUPPORTED_DEPTH: u16 = 24;
const BI_RGB: u32 = 0;

/// The 14-byte BITMAPFILEHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Type tag, `b"BM"` for every file this decoder accepts.
    pub magic: [u8; 2],
    /// Total file size as declared; not validated.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Start of the pixel array, from the beginning of the file.
    pub pixel_offset: u32,
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    /// Declared DIB header size. Larger values (V4/V5 headers) are accepted;
    /// the bytes past the first 40 are skipped as part of the gap.
    pub header_size: u32,
    pub width: i32,
    /// Always non-negative after a successful decode: rows are bottom-up.
    pub height: i32,
    pub color_planes: u16,
    pub bit_depth: u16,
    pub compression: u32,
    /// Declared pixel data size; may be zero for uncompressed files.
    pub image_size: u32,
    /// Pixels per meter.
    pub horizontal_resolution: i32,
    /// Pixels per meter.
    pub vertical_resolution: i32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    /// On-disk bytes per scanline, padding included.
    pub fn row_stride(&self) -> u64 {
        super::row_stride(self.bit_depth, self.width.unsigned_abs())
    }

    /// Total bytes the pixel array occupies on disk.
    pub fn pixel_data_len(&self) -> u64 {
        self.row_stride() * u64::from(self.height.unsigned_abs())
    }
}

pub(crate) fn read_file_header<R: Read>(
    reader: &mut ByteReader<R>,
) -> Result<FileHeader, BitmapError> {
    let magic = [reader.read_u8()?, reader.read_u8()?];
    if &magic != b"BM" {
        return Err(BitmapError::unsupported(
            MAGIC_AT,
            format!("type tag {magic:02X?} is not \"BM\""),
        ));
    }
    Ok(FileHeader {
        magic,
        file_size: reader.read_u32_le()?,
        reserved1: reader.read_u16_le()?,
        reserved2: reader.read_u16_le()?,
        pixel_offset: reader.read_u32_le()?,
    })
}

pub(crate) fn read_info_header<R: Read>(
    reader: &mut ByteReader<R>,
) -> Result<InfoHeader, BitmapError> {
    let info = InfoHeader {
        header_size: reader.read_u32_le()?,
        width: reader.read_i32_le()?,
        height: reader.read_i32_le()?,
        color_planes: reader.read_u16_le()?,
        bit_depth: reader.read_u16_le()?,
        compression: reader.read_u32_le()?,
        image_size: reader.read_u32_le()?,
        horizontal_resolution: reader.read_i32_le()?,
        vertical_resolution: reader.read_i32_le()?,
        colors_used: reader.read_u32_le()?,
        important_colors: reader.read_u32_le()?,
    };
    validate_info_header(&info)?;
    Ok(info)
}

fn validate_info_header(info: &InfoHeader) -> Result<(), BitmapError> {
    if info.header_size < INFO_HEADER_LEN {
        return Err(BitmapError::unsupported(
            HEADER_SIZE_AT,
            format!(
                "DIB header size {} is smaller than BITMAPINFOHEADER",
                info.header_size
            ),
        ));
    }
    if info.bit_depth != SUPPORTED_DEPTH {
        return Err(BitmapError::unsupported(
            BIT_DEPTH_AT,
            format!("bit depth {} (only 24 is supported)", info.bit_depth),
        ));
    }
    if info.compression != BI_RGB {
        return Err(BitmapError::unsupported(
            COMPRESSION_AT,
            format!("compression method {}", info.compression),
        ));
    }
    if info.width < 0 {
        return Err(BitmapError::malformed(
            WIDTH_AT,
            format!("negative width {}", info.width),
        ));
    }
    if info.height < 0 {
        return Err(BitmapError::unsupported(
            HEIGHT_AT,
            "top-down row order (negative height)",
        ));
    }
    Ok(())
}
