//! # Namehash Core
//!
//! Core types, errors, and traits for ENS namehash computation.
//!
//! This crate provides the foundational building blocks used by the other
//! namehash crates:
//!
//! - **Types**: [`Node`], [`LabelHash`], [`Address`] and the immutable [`RegistryConfig`]
//! - **Errors**: [`NamehashError`] with a crate-wide [`Result`] alias
//! - **Constants**: Hash sizes and well-known ENS contract addresses
//! - **Traits**: [`Hasher256`], the single hash primitive the fold depends on
//!
//! ## Example
//!
//! ```rust
//! use namehash_core::Node;
//!
//! let root = Node::ROOT;
//! assert!(root.is_root());
//! assert_eq!(root.to_hex().len(), 66);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{NamehashError, Result};
pub use traits::*;
pub use types::*;
