//! ENS namehash (EIP-137).
//!
//! ```text
//! namehash("")            = 0x00..00
//! namehash(label || rest) = keccak256(namehash(rest) || keccak256(label))
//! ```
//!
//! Labels are folded right to left, so the top-level label is hashed first.
//! The node is threaded through the fold as raw bytes and each step hashes the
//! 64-byte buffer `[node @ 0..32, label_hash @ 32..64]`.
//!
//! Names are taken exactly as given. There is no normalization, and empty
//! labels produced by leading, trailing or consecutive dots are hashed as the
//! empty byte string rather than skipped. Use
//! [`namehash_core::inspect_name`] to flag such names before relying on the
//! result.

use namehash_core::constants::{FOLD_BUFFER_SIZE, LABEL_SEPARATOR, NODE_SIZE};
use namehash_core::traits::Hasher256;
use namehash_core::types::{LabelHash, Node};

use crate::hash::{keccak256, Keccak};

/// Computes the namehash of `name` using Keccak-256.
pub fn namehash(name: &str) -> Node {
    namehash_with(&Keccak, name)
}

/// Computes the namehash of `name` with the given hash primitive.
pub fn namehash_with<H: Hasher256 + ?Sized>(hasher: &H, name: &str) -> Node {
    if name.is_empty() {
        return Node::ROOT;
    }

    name.rsplit(LABEL_SEPARATOR)
        .fold(Node::ROOT, |node, label| append_label_with(hasher, node, label))
}

/// Computes the Keccak-256 hash of a single label.
pub fn labelhash(label: &str) -> LabelHash {
    LabelHash::from_array(keccak256(label.as_bytes()))
}

/// Derives the node of `label.<parent>` from the parent's node.
pub fn append_label(parent: Node, label: &str) -> Node {
    append_label_with(&Keccak, parent, label)
}

/// One fold step with the given hash primitive.
pub fn append_label_with<H: Hasher256 + ?Sized>(hasher: &H, parent: Node, label: &str) -> Node {
    let mut buffer = [0u8; FOLD_BUFFER_SIZE];
    buffer[..NODE_SIZE].copy_from_slice(parent.as_bytes());
    buffer[NODE_SIZE..].copy_from_slice(&hasher.hash(label.as_bytes()));
    Node::from_array(hasher.hash(&buffer))
}
