//! CLI configuration.
//!
//! Settings come from an optional JSON file layered over built-in defaults.
//! Registry entries in the file are merged into the default table, so a file
//! only needs to list the networks it adds or overrides:
//!
//! ```json
//! {
//!   "network_id": 5,
//!   "strict": true,
//!   "registries": {
//!     "5": { "registry": "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e" }
//!   }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use namehash_core::constants::MAINNET_NETWORK_ID;
use namehash_core::error::{NamehashError, Result};
use namehash_core::types::RegistryConfig;

/// Resolved CLI configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CliConfig {
    /// Network used when a command does not name one
    pub network_id: u64,
    /// Reject names with empty labels instead of warning
    pub strict: bool,
    /// ENS deployments per network
    pub registries: RegistryConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            network_id: MAINNET_NETWORK_ID,
            strict: false,
            registries: RegistryConfig::default(),
        }
    }
}

/// On-disk form. Every field is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    network_id: Option<u64>,
    strict: Option<bool>,
    #[serde(default = "RegistryConfig::empty")]
    registries: RegistryConfig,
}

impl CliConfig {
    /// Loads configuration, reading `path` if given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reads a JSON config file and layers it over the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        debug!(path = %path.display(), networks = config.registries.len(), "Loaded config file");
        Ok(config)
    }

    /// Parses a JSON config document and layers it over the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(raw)?;
        let defaults = Self::default();

        let config = Self {
            network_id: file.network_id.unwrap_or(defaults.network_id),
            strict: file.strict.unwrap_or(defaults.strict),
            registries: defaults.registries.merge(file.registries),
        };
        config.validate()?;
        Ok(config)
    }

    /// Overrides the default network.
    pub fn with_network(mut self, network_id: u64) -> Self {
        self.network_id = network_id;
        self
    }

    /// Enables strict name handling.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = self.strict || strict;
        self
    }

    /// Checks that the default network has a registry.
    pub fn validate(&self) -> Result<()> {
        if self.registries.contracts(self.network_id).is_err() {
            return Err(NamehashError::ConfigError(format!(
                "default network {} has no registry configured",
                self.network_id
            )));
        }
        Ok(())
    }
}
