//! Ethereum address type used by the registry configuration.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::ADDRESS_SIZE;
use crate::error::{NamehashError, Result};

/// A 20-byte Ethereum contract address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    bytes: [u8; ADDRESS_SIZE],
}

impl Address {
    /// Creates an address from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; ADDRESS_SIZE] =
            bytes
                .try_into()
                .map_err(|_| NamehashError::InvalidAddressLength {
                    expected: ADDRESS_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(Self { bytes })
    }

    /// Creates from a fixed-size array.
    pub const fn from_array(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self { bytes }
    }

    /// Parses a `0x`-prefixed 40-digit hex literal in a const context.
    ///
    /// Panics on malformed input, which turns into a compile error when the
    /// result is bound to a `const`.
    pub const fn from_hex_literal(s: &str) -> Self {
        let b = s.as_bytes();
        assert!(
            b.len() == 2 + 2 * ADDRESS_SIZE && b[0] == b'0' && b[1] == b'x',
            "address literal must be 0x followed by 40 hex digits"
        );
        let mut bytes = [0u8; ADDRESS_SIZE];
        let mut i = 0;
        while i < ADDRESS_SIZE {
            bytes[i] = (hex_digit(b[2 + 2 * i]) << 4) | hex_digit(b[3 + 2 * i]);
            i += 1;
        }
        Self { bytes }
    }

    /// Parses from hex string (with or without 0x prefix, any case).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the `0x`-prefixed lowercase hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }

    /// Returns true if this is the zero address.
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in address literal"),
    }
}

impl FromStr for Address {
    type Err = NamehashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PUBLIC_RESOLVER_ADDRESS;

    #[test]
    fn test_parse_mixed_case() {
        let addr = Address::from_hex(PUBLIC_RESOLVER_ADDRESS).unwrap();
        assert_eq!(addr.to_hex(), PUBLIC_RESOLVER_ADDRESS.to_lowercase());
        assert!(!addr.is_zero());
    }

    #[test]
    fn test_parse_without_prefix() {
        let addr: Address = "314159265dd8dbb310642f98f50c066173c1259b".parse().unwrap();
        assert_eq!(addr.as_bytes()[0], 0x31);
    }

    #[test]
    fn test_wrong_length() {
        let err = Address::from_hex("0x1234").unwrap_err();
        assert!(matches!(
            err,
            NamehashError::InvalidAddressLength {
                expected: 20,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_literal_matches_runtime_parse() {
        const RESOLVER: Address = Address::from_hex_literal(PUBLIC_RESOLVER_ADDRESS);
        assert_eq!(RESOLVER, Address::from_hex(PUBLIC_RESOLVER_ADDRESS).unwrap());
    }

    #[test]
    #[should_panic(expected = "address literal")]
    fn test_literal_rejects_short_input() {
        let _ = Address::from_hex_literal("0x1234");
    }

    #[test]
    fn test_zero() {
        assert!(Address::from_array([0u8; 20]).is_zero());
    }

    #[test]
    fn test_serde() {
        let addr = Address::from_array([0x11; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "11".repeat(20)));
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), addr);
    }
}
