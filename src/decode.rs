use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::bmp::{FileHeader, InfoHeader};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::Raster;

/// The two BMP headers, as returned by [`crate::probe_bmp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Headers {
    pub file: FileHeader,
    pub info: InfoHeader,
}

/// A fully decoded BMP: both headers and the pixel grid.
///
/// Raster dimensions always equal `info_header().width` x `info_header().height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    file_header: FileHeader,
    info_header: InfoHeader,
    raster: Raster,
}

impl Bitmap {
    pub(crate) fn new(file_header: FileHeader, info_header: InfoHeader, raster: Raster) -> Self {
        Self {
            file_header,
            info_header,
            raster,
        }
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn width(&self) -> usize {
        self.raster.width()
    }

    pub fn height(&self) -> usize {
        self.raster.height()
    }

    /// Drop the headers and keep the pixels.
    pub fn into_raster(self) -> Raster {
        self.raster
    }

    pub fn into_parts(self) -> (FileHeader, InfoHeader, Raster) {
        (self.file_header, self.info_header, self.raster)
    }
}

/// Configurable decode of one BMP stream.
///
/// ```no_run
/// use bmpraster::{DecodeRequest, Limits};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits {
///     max_pixels: Some(64 * 1024 * 1024),
///     ..Limits::default()
/// };
/// let bitmap = DecodeRequest::new(data).with_limits(&limits).decode()?;
/// println!("{}x{}", bitmap.width(), bitmap.height());
/// # Ok::<(), bmpraster::BitmapError>(())
/// ```
pub struct DecodeRequest<'a, R> {
    input: R,
    limits: Option<&'a Limits>,
}

impl<'a, R: Read> DecodeRequest<'a, R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode. The input is consumed and dropped on every exit path.
    pub fn decode(self) -> Result<Bitmap, BitmapError> {
        crate::bmp::decode(self.input, self.limits)
    }

    /// Parse only the headers; no pixel data is read.
    pub fn probe(self) -> Result<Headers, BitmapError> {
        crate::bmp::probe(self.input)
    }
}

/// Decode a 24-bit uncompressed BMP from any reader.
///
/// Pass `&mut reader` to keep using the stream afterwards.
pub fn decode_bmp<R: Read>(input: R) -> Result<Bitmap, BitmapError> {
    DecodeRequest::new(input).decode()
}

/// Read and validate the file and info headers without touching pixel data.
pub fn probe_bmp<R: Read>(input: R) -> Result<Headers, BitmapError> {
    DecodeRequest::new(input).probe()
}

/// Open `path` and decode it. Open failures are reported as
/// [`BitmapError::Io`] at offset 0.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Bitmap, BitmapError> {
    let file = File::open(path).map_err(|source| BitmapError::Io { offset: 0, source })?;
    decode_bmp(BufReader::new(file))
}
