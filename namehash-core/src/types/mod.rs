//! Domain types for namehash.
//!
//! - [`Node`]: 32-byte namehash identifier, with [`Node::ROOT`] as the base case
//! - [`LabelHash`]: Keccak-256 digest of one label
//! - [`NameShape`]: label structure of a name, for flagging malformed input
//! - [`Address`] and [`RegistryConfig`]: immutable ENS deployment table

mod address;
mod name;
mod node;
mod registry;

pub use address::*;
pub use name::*;
pub use node::*;
pub use registry::*;
