//! PackBits decompression
//!
//! PackBits is a simple run-length encoding scheme used in TIFF files.

use tracing::warn;
use crate::error::{Error, Result};
use super::BlockDecoder;

/// Decompresses PackBits compressed data with no output cap
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    PackBitsDecoder::new().decode_block(data)
}

/// PackBits block decoder
///
/// Each run starts with a signed header byte:
/// - If header >= 0: copy next (header + 1) literal bytes
/// - If header < 0 and != -128: repeat next byte (1 - header) times
/// - If header == -128: no operation (skip)
///
/// A run that reaches past the end of the block is an error, never a short read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackBitsDecoder {
    max_output: Option<usize>,
}

impl PackBitsDecoder {
    /// Creates a decoder without an output cap
    pub fn new() -> Self {
        Self { max_output: None }
    }

    /// Creates a decoder that rejects blocks expanding past `limit` bytes
    pub fn with_max_output(limit: usize) -> Self {
        Self { max_output: Some(limit) }
    }

    /// Returns the configured output cap
    pub fn max_output(&self) -> Option<usize> {
        self.max_output
    }

    /// Decodes `data` and appends the result to `out`
    ///
    /// On error `out` is truncated back to its length before the call.
    pub fn decode_block_into(&self, data: &[u8], out: &mut Vec<u8>) -> Result<()> {
        let start_len = out.len();
        let result = self.expand(data, out, start_len);
        if result.is_err() {
            out.truncate(start_len);
        }
        result
    }

    fn expand(&self, data: &[u8], out: &mut Vec<u8>, start_len: usize) -> Result<()> {
        let mut pos = 0;

        while pos < data.len() {
            let offset = pos;
            let header = data[pos] as i8;
            pos += 1;

            match header {
                -128 => continue,

                0..=127 => {
                    let count = (header as usize) + 1;
                    let available = data.len() - pos;

                    if count > available {
                        warn!(offset, count, available, "PackBits literal run truncated");
                        return Err(Error::MalformedInput { offset, needed: count, available });
                    }

                    self.check_limit(out.len() - start_len + count)?;
                    out.extend_from_slice(&data[pos..pos + count]);
                    pos += count;
                }

                -127..=-1 => {
                    let Some(&byte) = data.get(pos) else {
                        warn!(offset, "PackBits repeat run missing its byte");
                        return Err(Error::MalformedInput { offset, needed: 1, available: 0 });
                    };

                    let count = (1 - header as isize) as usize;
                    pos += 1;

                    self.check_limit(out.len() - start_len + count)?;
                    out.resize(out.len() + count, byte);
                }
            }
        }

        Ok(())
    }

    fn check_limit(&self, requested: usize) -> Result<()> {
        match self.max_output {
            Some(limit) if requested > limit => Err(Error::LimitExceeded { limit, requested }),
            _ => Ok(()),
        }
    }
}

impl BlockDecoder for PackBitsDecoder {
    fn decode_block(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decode_block_into(data, &mut output)?;
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "PackBits"
    }
}
