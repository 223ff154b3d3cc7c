//! Decoder lookup by TIFF compression code

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use crate::error::{Error, Result};
use super::{BlockDecoder, Compression, DeflateDecoder, NoCompression, PackBitsDecoder};

/// Maps compression codes to shared decoder instances
///
/// Built once during setup, then shared read-only between strip and tile
/// decoding. Registering a code again replaces the previous decoder, which is
/// how callers swap in a configured decoder such as a capped
/// [`PackBitsDecoder`].
#[derive(Clone)]
pub struct DecoderRegistry {
    decoders: HashMap<u16, Arc<dyn BlockDecoder>>,
}

impl DecoderRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Creates a registry with every built-in scheme
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for compression in Compression::ALL {
            let decoder: Arc<dyn BlockDecoder> = match compression {
                Compression::None => Arc::new(NoCompression),
                Compression::Deflate | Compression::DeflateOld => Arc::new(DeflateDecoder),
                Compression::PackBits => Arc::new(PackBitsDecoder::new()),
            };
            registry.register(compression.code(), decoder);
        }
        registry
    }

    /// Registers `decoder` for `code`, returning the decoder it replaced
    pub fn register(
        &mut self,
        code: u16,
        decoder: Arc<dyn BlockDecoder>,
    ) -> Option<Arc<dyn BlockDecoder>> {
        debug!(code, scheme = decoder.name(), "registering block decoder");
        self.decoders.insert(code, decoder)
    }

    /// Returns the decoder for `code`
    pub fn get(&self, code: u16) -> Option<Arc<dyn BlockDecoder>> {
        self.decoders.get(&code).cloned()
    }

    /// Returns the decoder for `code` or an unsupported-compression error
    pub fn require(&self, code: u16) -> Result<Arc<dyn BlockDecoder>> {
        self.get(code)
            .ok_or_else(|| Error::Unsupported(format!("Compression type {}", code)))
    }

    pub fn contains(&self, code: u16) -> bool {
        self.decoders.contains_key(&code)
    }

    /// Registered codes in ascending order
    pub fn codes(&self) -> Vec<u16> {
        let mut codes: Vec<u16> = self.decoders.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Decodes one block with the decoder registered for `code`
    pub fn decode(&self, code: u16, block: &[u8]) -> Result<Vec<u8>> {
        self.require(code)?.decode_block(block)
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for code in self.codes() {
            if let Some(decoder) = self.decoders.get(&code) {
                map.entry(&code, &decoder.name());
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reverse;

    impl BlockDecoder for Reverse {
        fn decode_block(&self, data: &[u8]) -> Result<Vec<u8>> {
            Ok(data.iter().rev().copied().collect())
        }
    }

    #[test]
    fn test_defaults() {
        let registry = DecoderRegistry::with_defaults();
        assert_eq!(registry.codes(), vec![1, 8, 32773, 32946]);
        assert_eq!(registry.get(32773).unwrap().name(), "PackBits");
    }

    #[test]
    fn test_default_has_builtin_schemes() {
        let registry = DecoderRegistry::default();
        assert_eq!(registry.codes(), vec![1, 8, 32773, 32946]);
        assert_eq!(registry.decode(32773, &[0x80, 0, 0x09]).unwrap(), vec![0x09]);
        assert!(DecoderRegistry::new().codes().is_empty());
    }

    #[test]
    fn test_decode_packbits() {
        let registry = DecoderRegistry::with_defaults();
        let result = registry.decode(32773, &[(-1i8) as u8, 0x33]).unwrap();
        assert_eq!(result, vec![0x33, 0x33]);
    }

    #[test]
    fn test_unknown_code() {
        let registry = DecoderRegistry::new();
        assert!(!registry.contains(32773));
        assert!(matches!(registry.decode(32773, &[]), Err(Error::Unsupported(_))));
        assert!(registry.require(5).is_err());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = DecoderRegistry::with_defaults();
        let previous = registry.register(1, Arc::new(Reverse));
        assert_eq!(previous.unwrap().name(), "None");
        assert_eq!(registry.get(1).unwrap().name(), "unnamed");
        assert_eq!(registry.decode(1, &[1, 2, 3]).unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn test_capped_packbits() {
        let mut registry = DecoderRegistry::with_defaults();
        registry.register(32773, Arc::new(PackBitsDecoder::with_max_output(2)));
        let err = registry.decode(32773, &[(-2i8) as u8, 0x00]).unwrap_err();
        assert!(matches!(err, Error::LimitExceeded { limit: 2, requested: 3 }));
    }

    #[test]
    fn test_debug_lists_schemes() {
        let registry = DecoderRegistry::with_defaults();
        let text = format!("{:?}", registry);
        assert!(text.contains("32773: \"PackBits\""));
    }
}
