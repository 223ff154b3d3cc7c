//! I/O utilities for tiff-packbits
//!
//! Turns externally supplied data into the raw bytes a container parser reads.

pub mod byte_order;
pub mod input;

pub use byte_order::ByteOrder;
pub use input::RawInput;
