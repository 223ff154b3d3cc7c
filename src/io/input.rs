//! Raw input handed to a container parser

use super::ByteOrder;

/// Externally supplied image data, either text or a binary buffer
///
/// Text is widened to one 16-bit code unit per UTF-16 unit so the byte
/// length is always twice the unit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Text(String),
    Binary(Vec<u8>),
}

impl RawInput {
    /// Number of bytes [`RawInput::into_bytes`] will produce
    pub fn byte_len(&self) -> usize {
        match self {
            RawInput::Text(text) => text.encode_utf16().count() * 2,
            RawInput::Binary(bytes) => bytes.len(),
        }
    }

    /// Converts the input into the raw byte buffer parsing starts from
    pub fn into_bytes(self, order: ByteOrder) -> Vec<u8> {
        match self {
            RawInput::Binary(bytes) => bytes,
            RawInput::Text(text) => {
                let mut bytes = Vec::with_capacity(text.len() * 2);
                for unit in text.encode_utf16() {
                    bytes.extend_from_slice(&order.u16_bytes(unit));
                }
                bytes
            }
        }
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        RawInput::Text(text.to_string())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        RawInput::Text(text)
    }
}

impl From<Vec<u8>> for RawInput {
    fn from(bytes: Vec<u8>) -> Self {
        RawInput::Binary(bytes)
    }
}

impl From<&[u8]> for RawInput {
    fn from(bytes: &[u8]) -> Self {
        RawInput::Binary(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_passthrough() {
        let input = RawInput::from(&[0x4D, 0x4D, 0x00, 0x2A][..]);
        assert_eq!(input.byte_len(), 4);
        assert_eq!(input.into_bytes(ByteOrder::BigEndian), vec![0x4D, 0x4D, 0x00, 0x2A]);
    }

    #[test]
    fn test_text_little_endian() {
        let bytes = RawInput::from("AB").into_bytes(ByteOrder::LittleEndian);
        assert_eq!(bytes, vec![0x41, 0x00, 0x42, 0x00]);
    }

    #[test]
    fn test_text_big_endian() {
        let bytes = RawInput::from("AB").into_bytes(ByteOrder::BigEndian);
        assert_eq!(bytes, vec![0x00, 0x41, 0x00, 0x42]);
    }

    #[test]
    fn test_text_surrogate_pair() {
        let input = RawInput::from(String::from("\u{1F600}"));
        assert_eq!(input.byte_len(), 4);
        let bytes = input.into_bytes(ByteOrder::LittleEndian);
        assert_eq!(bytes, vec![0x3D, 0xD8, 0x00, 0xDE]);
    }

    #[test]
    fn test_empty_text() {
        assert!(RawInput::from("").into_bytes(ByteOrder::default()).is_empty());
    }
}
