//! Node and label hash types.
//!
//! Both are raw 32-byte values. Hex is only ever a rendering: parsing goes
//! through [`Node::from_hex`], which accepts an optional `0x` prefix and either
//! case, so callers never have to strip or re-add prefixes themselves.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{KECCAK256_SIZE, NODE_SIZE};
use crate::error::{NamehashError, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// NODE
// ═══════════════════════════════════════════════════════════════════════════════

/// A namehash node: the 32-byte identifier of a domain name.
///
/// [`Node::ROOT`] (all zeros) is the node of the empty name and the starting
/// value of every fold.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Node {
    bytes: [u8; NODE_SIZE],
}

impl Node {
    /// The root node (32 zero bytes).
    pub const ROOT: Node = Node {
        bytes: [0u8; NODE_SIZE],
    };

    /// Creates a node from a fixed-size array.
    pub const fn from_array(bytes: [u8; NODE_SIZE]) -> Self {
        Self { bytes }
    }

    /// Creates a node from raw bytes.
    ///
    /// # Errors
    /// Returns error if `bytes` is not exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; NODE_SIZE] =
            bytes
                .try_into()
                .map_err(|_| NamehashError::InvalidNodeLength {
                    expected: NODE_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(Self { bytes })
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

    /// Returns the node as a fixed-size array reference.
    pub fn as_array(&self) -> &[u8; NODE_SIZE] {
        &self.bytes
    }

    /// Consumes the node, returning the array.
    pub fn into_array(self) -> [u8; NODE_SIZE] {
        self.bytes
    }

    /// Returns the `0x`-prefixed lowercase hex rendering (66 characters).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }

    /// Returns true if this is the root node.
    pub fn is_root(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

impl From<[u8; NODE_SIZE]> for Node {
    fn from(bytes: [u8; NODE_SIZE]) -> Self {
        Self::from_array(bytes)
    }
}

impl From<Node> for [u8; NODE_SIZE] {
    fn from(node: Node) -> Self {
        node.bytes
    }
}

impl AsRef<[u8]> for Node {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl FromStr for Node {
    type Err = NamehashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.to_hex())
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Node::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// LABEL HASH
// ═══════════════════════════════════════════════════════════════════════════════

/// Keccak-256 digest of a single label.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelHash {
    bytes: [u8; KECCAK256_SIZE],
}

impl LabelHash {
    /// Creates a label hash from a fixed-size array.
    pub const fn from_array(bytes: [u8; KECCAK256_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the label hash as a fixed-size array reference.
    pub fn as_array(&self) -> &[u8; KECCAK256_SIZE] {
        &self.bytes
    }

    /// Returns the `0x`-prefixed lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }
}

impl From<[u8; KECCAK256_SIZE]> for LabelHash {
    fn from(bytes: [u8; KECCAK256_SIZE]) -> Self {
        Self::from_array(bytes)
    }
}

impl std::fmt::Debug for LabelHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LabelHash({})", self.to_hex())
    }
}

impl std::fmt::Display for LabelHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
