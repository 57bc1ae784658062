use std::io;

/// Errors from BMP decoding.
///
/// Every variant is terminal: a failed decode never yields a partial raster.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    /// The stream ended before a header field, the gap, a pixel triple or a
    /// padding byte was complete. `offset` is where the input ran out.
    #[error("input truncated at byte {offset}")]
    TruncatedInput { offset: u64 },

    #[error("malformed header at byte {offset}: {reason}")]
    MalformedHeader { offset: u64, reason: String },

    #[error("unsupported BMP variant at byte {offset}: {reason}")]
    UnsupportedFormat { offset: u64, reason: String },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("read failed at byte {offset}")]
    Io {
        offset: u64,
        #[source]
        source: io::Error,
    },
}

impl BitmapError {
    /// Byte offset into the input at which decoding failed, when known.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Self::TruncatedInput { offset }
            | Self::MalformedHeader { offset, .. }
            | Self::UnsupportedFormat { offset, .. }
            | Self::Io { offset, .. } => Some(*offset),
            Self::LimitExceeded(_) | Self::DimensionsTooLarge { .. } => None,
        }
    }

    pub(crate) fn malformed(offset: u64, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            offset,
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(offset: u64, reason: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            offset,
            reason: reason.into(),
        }
    }
}
