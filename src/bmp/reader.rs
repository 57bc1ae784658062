use std::io::{self, Read};

use crate::error::BitmapError;

const SKIP_CHUNK: usize = 4096;

/// Forward-only little-endian reader that counts every byte it consumes.
///
/// Every read either fills exactly the requested number of bytes or fails;
/// the position reported in errors is where the input actually ran out.
pub(crate) struct ByteReader<R> {
    inner: R,
    pos: u64,
}

impl<R: Read> ByteReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Bytes consumed so far.
    pub(crate) fn position(&self) -> u64 {
        self.pos
    }

    pub(crate) fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BitmapError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.pos += filled as u64;
                    return Err(BitmapError::TruncatedInput { offset: self.pos });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(BitmapError::Io {
                        offset: self.pos + filled as u64,
                        source,
                    });
                }
            }
        }
        self.pos += filled as u64;
        Ok(())
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let mut buf = [0u8; N];
        self.read_exact_bytes(&mut buf)?;
        Ok(buf)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, BitmapError> {
        let [b] = self.read_fixed_bytes::<1>()?;
        Ok(b)
    }

    pub(crate) fn read_u16_le(&mut self) -> Result<u16, BitmapError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    pub(crate) fn read_u32_le(&mut self) -> Result<u32, BitmapError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    pub(crate) fn read_i32_le(&mut self) -> Result<i32, BitmapError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }

    /// Consume and discard exactly `n` bytes.
    pub(crate) fn skip(&mut self, n: u64) -> Result<(), BitmapError> {
        let mut scratch = [0u8; SKIP_CHUNK];
        let mut remaining = n;
        while remaining > 0 {
            let len = remaining.min(SKIP_CHUNK as u64) as usize;
            match self.inner.read(&mut scratch[..len]) {
                Ok(0) => return Err(BitmapError::TruncatedInput { offset: self.pos }),
                Ok(read) => {
                    self.pos += read as u64;
                    remaining -= read as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(BitmapError::Io {
                        offset: self.pos,
                        source,
                    });
                }
            }
        }
        Ok(())
    }
}
