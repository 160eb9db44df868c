//! Common traits for namehash.
//!
//! The namehash fold needs exactly one capability from its environment: a
//! 256-bit hash over arbitrary bytes. [`Hasher256`] names that seam so the
//! fold can be driven by Keccak-256 in production and by instrumented hashers
//! in tests.

use crate::constants::KECCAK256_SIZE;

/// A hash primitive mapping any byte string to a 32-byte digest.
///
/// Implementations must be deterministic and total over finite input.
pub trait Hasher256 {
    /// Hashes `input` into a 32-byte digest.
    fn hash(&self, input: &[u8]) -> [u8; KECCAK256_SIZE];
}

impl<H: Hasher256 + ?Sized> Hasher256 for &H {
    fn hash(&self, input: &[u8]) -> [u8; KECCAK256_SIZE] {
        (**self).hash(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstByte;

    impl Hasher256 for FirstByte {
        fn hash(&self, input: &[u8]) -> [u8; KECCAK256_SIZE] {
            [input.first().copied().unwrap_or(0); KECCAK256_SIZE]
        }
    }

    fn digest_via<H: Hasher256>(hasher: H, input: &[u8]) -> [u8; KECCAK256_SIZE] {
        hasher.hash(input)
    }

    #[test]
    fn test_reference_forwards() {
        let hasher = FirstByte;
        assert_eq!(digest_via(&hasher, b"x"), [b'x'; KECCAK256_SIZE]);
        assert_eq!(digest_via(&&hasher, b""), [0; KECCAK256_SIZE]);
    }

    #[test]
    fn test_trait_object() {
        let hasher: &dyn Hasher256 = &FirstByte;
        assert_eq!(hasher.hash(b"a"), [b'a'; KECCAK256_SIZE]);
    }
}
