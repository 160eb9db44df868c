//! # Namehash Crypto
//!
//! Keccak-256 and the ENS namehash algorithm (EIP-137).
//!
//! This crate provides:
//!
//! - **Hash**: the Keccak-256 primitive, as a function and as a [`Hasher256`] impl
//! - **Namehash**: the right-to-left label fold, plus single-step helpers
//!
//! Everything here is pure: no I/O, no logging, no shared state. Callers that
//! want to log a result do so themselves.
//!
//! ## Example
//!
//! ```rust
//! use namehash_crypto::{namehash, append_label};
//!
//! let eth = namehash("eth");
//! assert_eq!(
//!     eth.to_hex(),
//!     "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"
//! );
//! assert_eq!(append_label(eth, "foo"), namehash("foo.eth"));
//! ```
//!
//! [`Hasher256`]: namehash_core::Hasher256

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod hash;
pub mod namehash;

// Re-export main functions at crate root
pub use hash::{keccak256, Keccak};
pub use namehash::{append_label, append_label_with, labelhash, namehash, namehash_with};
