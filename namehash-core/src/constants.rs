//! Constants for ENS namehash computation.
//!
//! Sizes follow EIP-137; addresses are the well-known ENS deployments.

// ═══════════════════════════════════════════════════════════════════════════════
// HASH SIZES
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of a Keccak-256 digest in bytes.
pub const KECCAK256_SIZE: usize = 32;

/// Size of a namehash node in bytes.
pub const NODE_SIZE: usize = KECCAK256_SIZE;

/// Size of the buffer hashed at each fold step: `node || label_hash`.
pub const FOLD_BUFFER_SIZE: usize = NODE_SIZE + KECCAK256_SIZE;

/// Size of an Ethereum address in bytes.
pub const ADDRESS_SIZE: usize = 20;

// ═══════════════════════════════════════════════════════════════════════════════
// NAME SYNTAX
// ═══════════════════════════════════════════════════════════════════════════════

/// Separator between labels of a domain name.
pub const LABEL_SEPARATOR: char = '.';

// ═══════════════════════════════════════════════════════════════════════════════
// ENS DEPLOYMENTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Ethereum mainnet network ID.
pub const MAINNET_NETWORK_ID: u64 = 1;

/// Ropsten testnet network ID.
pub const ROPSTEN_NETWORK_ID: u64 = 3;

/// ENS registry on mainnet.
pub const MAINNET_REGISTRY_ADDRESS: &str = "0x314159265dd8dbb310642f98f50c066173c1259b";

/// ENS registry on Ropsten.
pub const ROPSTEN_REGISTRY_ADDRESS: &str = "0x112234455c3a32fd11230c42e7bccd4a84e02010";

/// ENS public resolver on mainnet.
pub const PUBLIC_RESOLVER_ADDRESS: &str = "0xcAcbE14d88380F8eb37ec0d7788ec226EE7b3434";

/// ERC-165 interface ID of `text(bytes32,string)` on resolvers (EIP-634).
pub const TEXT_INTERFACE_ID: [u8; 4] = [0x59, 0xd1, 0xd4, 0x3c];

const _: () = assert!(FOLD_BUFFER_SIZE == 64);
