use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur when parsing an account address string.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address must start with '0x'")]
    InvalidPrefix,
    #[error("address must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("address payload is not valid hexadecimal")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("address payload must be exactly 32 bytes")]
    InvalidPayloadLength,
}

/// Number of raw bytes contained in an address.
pub const ADDRESS_BYTES: usize = 32;
/// Expected string length of an encoded address (`0x` prefix + 64 hex chars).
pub const ADDRESS_STRING_LENGTH: usize = 2 + ADDRESS_BYTES * 2;

/// Encode a 32-byte account identifier into the human readable format.
pub fn encode_address(bytes: &[u8; ADDRESS_BYTES]) -> String {
    let mut encoded = String::with_capacity(ADDRESS_STRING_LENGTH);
    encoded.push_str("0x");
    encoded.push_str(&hex::encode(bytes));
    encoded
}

/// Attempt to decode a human readable address string into the raw bytes.
pub fn decode_address(address: &str) -> Result<[u8; ADDRESS_BYTES], AddressError> {
    let payload = address
        .strip_prefix("0x")
        .ok_or(AddressError::InvalidPrefix)?;

    if address.len() != ADDRESS_STRING_LENGTH {
        return Err(AddressError::InvalidLength {
            expected: ADDRESS_STRING_LENGTH,
            actual: address.len(),
        });
    }

    let decoded = hex::decode(payload)?;

    let bytes: [u8; ADDRESS_BYTES] = decoded
        .try_into()
        .map_err(|_| AddressError::InvalidPayloadLength)?;

    Ok(bytes)
}

/// Account identity of a caller or the registry owner.
///
/// The registry only ever compares addresses for equality; no other attribute
/// of the identity is interpreted. Serializes as the `0x`-prefixed hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(pub [u8; ADDRESS_BYTES]);

impl Address {
    /// Wrap a raw 32-byte account identifier.
    pub const fn new(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Address(bytes)
    }

    /// Raw account bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_address(&self.0))
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(value: [u8; ADDRESS_BYTES]) -> Self {
        Address(value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        encode_address(&value.0)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        decode_address(&value).map(Address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let bytes = [7u8; ADDRESS_BYTES];
        let encoded = encode_address(&bytes);
        assert_eq!(encoded.len(), ADDRESS_STRING_LENGTH);
        assert!(encoded.starts_with("0x"));
        assert_eq!(decode_address(&encoded).unwrap(), bytes);
    }

    #[test]
    fn rejects_missing_prefix() {
        let encoded = hex::encode([1u8; ADDRESS_BYTES]);
        assert!(matches!(
            decode_address(&encoded),
            Err(AddressError::InvalidPrefix)
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            decode_address("0xabcdef"),
            Err(AddressError::InvalidLength { .. })
        ));
    }

    #[test]
    fn rejects_non_hex_payload() {
        let bad = format!("0x{}", "z".repeat(ADDRESS_BYTES * 2));
        assert!(matches!(
            decode_address(&bad),
            Err(AddressError::InvalidHex(_))
        ));
    }

    #[test]
    fn serializes_as_string() {
        let address = Address::new([0xab; ADDRESS_BYTES]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(ADDRESS_BYTES)));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
