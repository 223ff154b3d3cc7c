//! tiff-packbits - PackBits block decoding for TIFF strips and tiles
//!
//! A container parser hands each compressed strip or tile to a
//! [`BlockDecoder`] picked by the file's compression code and gets back the
//! expanded bytes. PackBits is the main scheme here, next to pass-through and
//! Deflate decoders that fill the same role.
//!
//! # Examples
//!
//! ## Decoding one block
//!
//! ```
//! use tiff_packbits::{BlockDecoder, PackBitsDecoder};
//!
//! let block = [2, 0x41, 0x42, 0x43, 0xFE, 0x58];
//! let decoded = PackBitsDecoder::new().decode_block(&block)?;
//! assert_eq!(decoded, b"ABCXXX");
//! # Ok::<(), tiff_packbits::Error>(())
//! ```
//!
//! ## Decoding the strips of an image
//!
//! ```
//! use tiff_packbits::{BatchConfig, DecoderRegistry, StripDecoder};
//!
//! let registry = DecoderRegistry::with_defaults();
//! let strips = StripDecoder::new(&registry, BatchConfig::new(32773))?;
//!
//! let blocks: [&[u8]; 2] = [&[0xFD, 0x00], &[1, 0x10, 0x20]];
//! let image = strips.decode_concat(&blocks)?;
//! assert_eq!(image, [0u8, 0, 0, 0, 0x10, 0x20]);
//! # Ok::<(), tiff_packbits::Error>(())
//! ```

pub mod io;
pub mod error;
pub mod compression;
pub mod strips;

pub use error::{Error, Result};
pub use compression::{
    BlockDecoder, Compression, DecoderRegistry, DeflateDecoder, NoCompression, PackBitsDecoder,
};
pub use strips::{BatchConfig, StripDecoder};
pub use io::{ByteOrder, RawInput};
