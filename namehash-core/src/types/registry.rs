//! ENS registry configuration.
//!
//! Maps network IDs to the ENS registry deployed on that network. The table is
//! an ordinary immutable value: build it once (defaults, a config file, or the
//! builder methods) and hand it to whatever talks to the contracts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    MAINNET_NETWORK_ID, MAINNET_REGISTRY_ADDRESS, PUBLIC_RESOLVER_ADDRESS, ROPSTEN_NETWORK_ID,
    ROPSTEN_REGISTRY_ADDRESS,
};
use crate::error::{NamehashError, Result};
use crate::types::Address;

const MAINNET_REGISTRY: Address = Address::from_hex_literal(MAINNET_REGISTRY_ADDRESS);
const ROPSTEN_REGISTRY: Address = Address::from_hex_literal(ROPSTEN_REGISTRY_ADDRESS);
const PUBLIC_RESOLVER: Address = Address::from_hex_literal(PUBLIC_RESOLVER_ADDRESS);

/// Contracts known for a single network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkContracts {
    /// ENS registry address
    pub registry: Address,
    /// Optional public resolver address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_resolver: Option<Address>,
}

/// Network ID → ENS contracts table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryConfig {
    networks: BTreeMap<u64, NetworkContracts>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            MAINNET_NETWORK_ID,
            NetworkContracts {
                registry: MAINNET_REGISTRY,
                public_resolver: Some(PUBLIC_RESOLVER),
            },
        );
        networks.insert(
            ROPSTEN_NETWORK_ID,
            NetworkContracts {
                registry: ROPSTEN_REGISTRY,
                public_resolver: None,
            },
        );
        Self { networks }
    }
}

impl RegistryConfig {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            networks: BTreeMap::new(),
        }
    }

    /// Adds or replaces the registry for a network.
    pub fn with_registry(mut self, network_id: u64, registry: Address) -> Self {
        self.networks
            .entry(network_id)
            .and_modify(|c| c.registry = registry)
            .or_insert(NetworkContracts {
                registry,
                public_resolver: None,
            });
        self
    }

    /// Sets the public resolver for an already configured network.
    ///
    /// # Errors
    /// Returns `UnknownNetwork` if no registry is configured for `network_id`.
    pub fn with_public_resolver(mut self, network_id: u64, resolver: Address) -> Result<Self> {
        let contracts = self
            .networks
            .get_mut(&network_id)
            .ok_or(NamehashError::UnknownNetwork(network_id))?;
        contracts.public_resolver = Some(resolver);
        Ok(self)
    }

    /// Overlays another table on top of this one. Entries in `other` win.
    pub fn merge(mut self, other: RegistryConfig) -> Self {
        self.networks.extend(other.networks);
        self
    }

    /// Returns the contracts configured for a network.
    pub fn contracts(&self, network_id: u64) -> Result<&NetworkContracts> {
        self.networks
            .get(&network_id)
            .ok_or(NamehashError::UnknownNetwork(network_id))
    }

    /// Returns the ENS registry address for a network.
    pub fn registry(&self, network_id: u64) -> Result<Address> {
        self.contracts(network_id).map(|c| c.registry)
    }

    /// Iterates over configured networks in ascending ID order.
    pub fn networks(&self) -> impl Iterator<Item = (u64, &NetworkContracts)> {
        self.networks.iter().map(|(id, c)| (*id, c))
    }

    /// Returns the number of configured networks.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Returns true if no network is configured.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_networks() {
        let config = RegistryConfig::default();
        assert_eq!(config.len(), 2);
        assert_eq!(
            config.registry(1).unwrap().to_hex(),
            MAINNET_REGISTRY_ADDRESS
        );
        assert_eq!(
            config.registry(3).unwrap().to_hex(),
            ROPSTEN_REGISTRY_ADDRESS
        );
        assert!(!config.registry(1).unwrap().is_zero());
        assert_eq!(
            config.contracts(1).unwrap().public_resolver.unwrap().to_hex(),
            PUBLIC_RESOLVER_ADDRESS.to_lowercase()
        );
    }

    #[test]
    fn test_unknown_network() {
        let config = RegistryConfig::default();
        assert!(matches!(
            config.registry(5),
            Err(NamehashError::UnknownNetwork(5))
        ));
    }

    #[test]
    fn test_builder() {
        let addr = Address::from_array([0x22; 20]);
        let resolver = Address::from_array([0x33; 20]);
        let config = RegistryConfig::empty()
            .with_registry(5, addr)
            .with_public_resolver(5, resolver)
            .unwrap();

        assert_eq!(config.registry(5).unwrap(), addr);
        assert_eq!(config.contracts(5).unwrap().public_resolver, Some(resolver));
        assert!(RegistryConfig::empty().with_public_resolver(5, resolver).is_err());
    }

    #[test]
    fn test_with_registry_keeps_resolver() {
        let addr = Address::from_array([0x44; 20]);
        let config = RegistryConfig::default().with_registry(1, addr);
        assert_eq!(config.registry(1).unwrap(), addr);
        assert!(config.contracts(1).unwrap().public_resolver.is_some());
    }

    #[test]
    fn test_merge_overrides() {
        let addr = Address::from_array([0x55; 20]);
        let overlay = RegistryConfig::empty().with_registry(3, addr);
        let config = RegistryConfig::default().merge(overlay);

        assert_eq!(config.registry(3).unwrap(), addr);
        assert_eq!(config.registry(1).unwrap().to_hex(), MAINNET_REGISTRY_ADDRESS);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "5": { "registry": "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e" }
        }"#;
        let config: RegistryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.registry(5).unwrap().to_hex(),
            "0x00000000000c2e074ec69a0dfb2997ba6c7d2e1e"
        );
        assert_eq!(config.networks().count(), 1);
    }
}
