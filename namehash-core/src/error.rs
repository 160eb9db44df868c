//! Error types for namehash.
//!
//! Hashing itself never fails. Errors only come from the edges: parsing
//! hex-encoded nodes and addresses, looking up registry configuration and
//! loading configuration files.

use thiserror::Error;

/// Result type alias using `NamehashError`.
pub type Result<T> = std::result::Result<T, NamehashError>;

/// Main error type for all namehash operations.
#[derive(Debug, Error)]
pub enum NamehashError {
    // ═══════════════════════════════════════════════════════════════════════════
    // ENCODING ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Invalid hex encoding.
    #[error("Invalid hex encoding: {0}")]
    HexError(#[from] hex::FromHexError),

    /// Decoded node has the wrong length.
    #[error("Invalid node: expected {expected} bytes, got {actual}")]
    InvalidNodeLength { expected: usize, actual: usize },

    /// Decoded address has the wrong length.
    #[error("Invalid address: expected {expected} bytes, got {actual}")]
    InvalidAddressLength { expected: usize, actual: usize },

    // ═══════════════════════════════════════════════════════════════════════════
    // NAME ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Name contains empty labels and the caller asked for strict handling.
    #[error("Malformed name '{name}': empty label at position(s) {positions:?}")]
    MalformedName { name: String, positions: Vec<usize> },

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// No registry is configured for the requested network.
    #[error("No ENS registry configured for network {0}")]
    UnknownNetwork(u64),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl NamehashError {
    /// Returns true if this error came from decoding user-supplied hex.
    pub fn is_encoding_error(&self) -> bool {
        matches!(
            self,
            NamehashError::HexError(_)
                | NamehashError::InvalidNodeLength { .. }
                | NamehashError::InvalidAddressLength { .. }
        )
    }

    /// Returns true if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            NamehashError::UnknownNetwork(_)
                | NamehashError::ConfigError(_)
                | NamehashError::JsonError(_)
                | NamehashError::IoError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NamehashError::InvalidNodeLength {
            expected: 32,
            actual: 20,
        };
        assert!(err.to_string().contains("32"));
        assert!(err.to_string().contains("20"));

        let err = NamehashError::MalformedName {
            name: "a..b".into(),
            positions: vec![1],
        };
        assert!(err.to_string().contains("a..b"));
        assert!(err.to_string().contains("[1]"));
    }

    #[test]
    fn test_error_classification() {
        assert!(NamehashError::InvalidNodeLength { expected: 32, actual: 1 }.is_encoding_error());
        assert!(NamehashError::UnknownNetwork(5).is_config_error());
        assert!(!NamehashError::UnknownNetwork(5).is_encoding_error());
        assert!(!NamehashError::ConfigError("x".into()).is_encoding_error());
    }

    #[test]
    fn test_hex_error_conversion() {
        let hex_result = hex::decode("zz");
        let result: Result<Vec<u8>> = hex_result.map_err(NamehashError::from);
        assert!(matches!(result, Err(NamehashError::HexError(_))));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_result: std::result::Result<serde_json::Value, _> = serde_json::from_str("invalid");
        let result: Result<serde_json::Value> = json_result.map_err(NamehashError::from);
        assert!(matches!(result, Err(NamehashError::JsonError(_))));
    }
}
