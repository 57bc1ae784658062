//! # bmpraster
//!
//! Decoder for uncompressed 24-bit Windows bitmaps (BMP).
//!
//! A decode reads the 14-byte file header and the 40-byte
//! `BITMAPINFOHEADER`, skips whatever lies between the headers and the
//! declared pixel offset, then reads the 4-byte-aligned rows into a flat
//! RGB [`Raster`]. Rows keep the on-disk bottom-up order.
//!
//! ## Supported input
//!
//! - `BM` type tag, `BITMAPINFOHEADER` (or a larger DIB header whose extra
//!   bytes are skipped), 24 bits per pixel, no compression, bottom-up rows.
//!
//! Anything else fails with [`BitmapError::UnsupportedFormat`].
//!
//! ## Non-Goals
//!
//! - Encoding
//! - RLE, bitfields, palettes, bit depths other than 24
//! - Recovering partial images from truncated files
//!
//! ## Usage
//!
//! ```no_run
//! use bmpraster::{decode_bmp, probe_bmp};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without decoding
//! let headers = probe_bmp(data)?;
//! println!("{}x{}", headers.info.width, headers.info.height);
//!
//! // Decode
//! let bitmap = decode_bmp(data)?;
//! let bottom_left = bitmap.raster().get(0, 0);
//! # Ok::<(), bmpraster::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod bmp;
mod decode;
mod error;
mod limits;
mod pixel;

// Re-exports
pub use bmp::{FILE_HEADER_LEN, FileHeader, HEADERS_LEN, INFO_HEADER_LEN, InfoHeader, row_stride};
pub use decode::{Bitmap, DecodeRequest, Headers, decode_bmp, decode_file, probe_bmp};
pub use error::BitmapError;
pub use limits::Limits;
pub use pixel::{Pixel, Raster};
