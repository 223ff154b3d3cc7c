//! Block decompression for TIFF strips and tiles
//!
//! Every scheme implements [`BlockDecoder`], so a container parser can hand any
//! compressed strip or tile to a decoder without knowing which scheme it is.

pub mod deflate;
pub mod packbits;
pub mod registry;

pub use deflate::DeflateDecoder;
pub use packbits::PackBitsDecoder;
pub use registry::DecoderRegistry;

use crate::error::{Error, Result};

/// Decodes one compressed block into a new buffer
///
/// Implementations keep no mutable state between calls and may be shared
/// across threads.
pub trait BlockDecoder: Send + Sync {
    /// Expands `data` into a newly allocated block
    fn decode_block(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Human-readable scheme name
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Pass-through decoder for uncompressed blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompression;

impl BlockDecoder for NoCompression {
    fn decode_block(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn name(&self) -> &'static str {
        "None"
    }
}

/// Compression types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// No compression
    None,
    /// Adobe Deflate/ZIP compression
    Deflate,
    /// Deflate under its pre-standard tag
    DeflateOld,
    /// PackBits compression
    PackBits,
}

impl Compression {
    /// All schemes with a built-in decoder
    pub const ALL: [Compression; 4] = [
        Compression::None,
        Compression::Deflate,
        Compression::DeflateOld,
        Compression::PackBits,
    ];

    /// Creates compression from TIFF compression tag value
    pub fn from_tag(value: u64) -> Result<Self> {
        match value {
            1 => Ok(Compression::None),
            8 => Ok(Compression::Deflate),
            32946 => Ok(Compression::DeflateOld),
            32773 => Ok(Compression::PackBits),
            _ => Err(Error::Unsupported(format!("Compression type {}", value))),
        }
    }

    /// Returns the TIFF compression tag value
    pub fn code(&self) -> u16 {
        match self {
            Compression::None => 1,
            Compression::Deflate => 8,
            Compression::DeflateOld => 32946,
            Compression::PackBits => 32773,
        }
    }

    /// Returns the name of this compression type
    pub fn name(&self) -> &'static str {
        match self {
            Compression::None => "None",
            Compression::Deflate | Compression::DeflateOld => "Deflate/ZIP",
            Compression::PackBits => "PackBits",
        }
    }

    /// Decompresses data
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Compression::None => NoCompression.decode_block(data),
            Compression::Deflate | Compression::DeflateOld => DeflateDecoder.decode_block(data),
            Compression::PackBits => PackBitsDecoder::new().decode_block(data),
        }
    }
}
