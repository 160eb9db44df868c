//! Keccak-256 hashing.
//!
//! Note: Keccak-256 is NOT SHA3-256. They use different padding, and ENS
//! (like the rest of Ethereum) uses the original Keccak padding.

use sha3::{Digest, Keccak256};

use namehash_core::constants::KECCAK256_SIZE;
use namehash_core::traits::Hasher256;

/// Computes the Keccak-256 digest of `input`.
pub fn keccak256(input: &[u8]) -> [u8; KECCAK256_SIZE] {
    let mut hasher = Keccak256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// Keccak-256 as a [`Hasher256`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keccak;

impl Hasher256 for Keccak {
    fn hash(&self, input: &[u8]) -> [u8; KECCAK256_SIZE] {
        keccak256(input)
    }
}
