use crate::error::BitmapError;
use crate::pixel::Raster;

/// Caps applied to the declared image size before any pixel byte is read.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size in bytes of the decoded [`Raster`].
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Validate a `width` x `height` raster against every configured cap.
    pub(crate) fn check_raster(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        let (w, h) = (u64::from(width), u64::from(height));
        exceeds("width", w, self.max_width)?;
        exceeds("height", h, self.max_height)?;
        exceeds("pixel count", w * h, self.max_pixels)?;
        let bytes = Raster::byte_len(width, height)?;
        exceeds("raster bytes", bytes as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, max: Option<u64>) -> Result<(), BitmapError> {
    match max {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
