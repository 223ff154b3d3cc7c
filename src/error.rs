//! Error types for tiff-packbits

/// Result type for block decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding compressed blocks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A run header at `offset` declares more bytes than the block holds
    #[error("Malformed input: run at offset {offset} needs {needed} bytes, {available} available")]
    MalformedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Corrupt stream in a scheme without run headers
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Unsupported feature
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Decoded output would exceed the configured cap
    #[error("Limit exceeded: output of {requested} bytes exceeds limit of {limit}")]
    LimitExceeded { limit: usize, requested: usize },

    /// Failure while decoding one block of a batch
    #[error("Block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns true if the error comes from structurally broken input,
    /// including when wrapped in a batch [`Error::Block`].
    pub fn is_malformed(&self) -> bool {
        match self {
            Error::MalformedInput { .. } | Error::InvalidFormat(_) => true,
            Error::Block { source, .. } => source.is_malformed(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = Error::MalformedInput { offset: 0, needed: 6, available: 2 };
        assert_eq!(
            err.to_string(),
            "Malformed input: run at offset 0 needs 6 bytes, 2 available"
        );
    }

    #[test]
    fn test_block_wraps_source() {
        let err = Error::Block {
            index: 3,
            source: Box::new(Error::MalformedInput { offset: 4, needed: 1, available: 0 }),
        };
        assert!(err.to_string().starts_with("Block 3: Malformed input"));
        assert!(err.is_malformed());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unsupported_is_not_malformed() {
        let err = Error::Unsupported("Compression type 7".to_string());
        assert!(!err.is_malformed());
        assert!(err.to_string().contains("7"));
    }
}
