//! Deflate/ZIP decompression

use std::io::Read;
use flate2::read::ZlibDecoder;
use crate::error::{Error, Result};
use super::BlockDecoder;

/// Decompresses Deflate/ZIP compressed data
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    DeflateDecoder.decode_block(data)
}

/// Zlib-wrapped deflate block decoder (TIFF compression 8 and 32946)
#[derive(Debug, Clone, Copy, Default)]
pub struct DeflateDecoder;

impl BlockDecoder for DeflateDecoder {
    fn decode_block(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut decoder = ZlibDecoder::new(data);
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| Error::InvalidFormat(format!("Deflate: {}", e)))?;
        Ok(decompressed)
    }

    fn name(&self) -> &'static str {
        "Deflate/ZIP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_deflate_decompression() {
        let original = b"Hello, world! This is test data for compression.";
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(original).unwrap();
        let compressed = encoder.finish().unwrap();

        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_corrupt_stream_is_malformed() {
        let err = decompress(&[0x78, 0x9C, 0xFF, 0xFF, 0xFF]).unwrap_err();
        assert!(err.is_malformed());
    }
}
