//! Bytes - Opaque byte fields (commitment points, signatures, roots)
//!
//! On the wire these are JSON arrays of byte values. Roots coming from older
//! simulator builds arrive as `0x`-prefixed hex strings, so both are accepted
//! when decoding. Encoding always produces the array form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::format::{bytes_to_hex, display_bytes};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Full lowercase hex, no prefix
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Short `0x…` form for table cells
    pub fn display(&self) -> String {
        display_bytes(&self.0)
    }

    /// Parse hex with or without a `0x` prefix
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        hex::decode(digits).ok().map(Self)
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.0)
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BytesPayload {
            Array(Vec<u8>),
            Hex(String),
        }

        match BytesPayload::deserialize(deserializer)? {
            BytesPayload::Array(bytes) => Ok(Bytes(bytes)),
            BytesPayload::Hex(text) => Bytes::from_hex(&text).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid hex byte string: {text:?}"))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_byte_arrays() {
        let bytes: Bytes = serde_json::from_str("[138, 242, 0, 15]").expect("decode");
        assert_eq!(bytes.as_slice(), &[138, 242, 0, 15]);
        assert_eq!(bytes.to_hex(), "8af2000f");
    }

    #[test]
    fn decodes_prefixed_hex_roots() {
        let bytes: Bytes = serde_json::from_str("\"0x00ff10\"").expect("decode");
        assert_eq!(bytes.as_slice(), &[0x00, 0xff, 0x10]);
    }

    #[test]
    fn rejects_odd_length_hex() {
        assert!(serde_json::from_str::<Bytes>("\"0xabc\"").is_err());
        assert!(Bytes::from_hex("zz").is_none());
    }

    #[test]
    fn rejects_signed_hex_digits() {
        assert!(Bytes::from_hex("0x+f+f").is_none());
        assert!(serde_json::from_str::<Bytes>("\"0x+a\"").is_err());
    }

    #[test]
    fn rejects_values_that_are_not_bytes() {
        assert!(serde_json::from_str::<Bytes>("[1, 256]").is_err());
        assert!(serde_json::from_str::<Bytes>("42").is_err());
    }

    #[test]
    fn encodes_as_array() {
        let json = serde_json::to_string(&Bytes::new(vec![1, 2, 255])).expect("encode");
        assert_eq!(json, "[1,2,255]");
    }
}
