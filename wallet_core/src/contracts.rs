//! Contract deployment configuration with TOML file support.
//!
//! Package ids, module names and gas budgets for the marketplace, launchpad
//! and NFT collection contracts. Every field has a default pointing at the
//! devnet deployments, so an empty file is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use souffl3_types::ObjectId;

use crate::error::ConfigError;

/// Gas budget used by every call unless overridden.
pub const DEFAULT_GAS_BUDGET: u64 = 10_000;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsConfig {
    #[serde(default)]
    pub market: MarketContract,
    #[serde(default)]
    pub launchpad: LaunchpadContract,
    #[serde(default)]
    pub nft: NftContract,
}

/// Listing / trading package plus the package that creates marketplaces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketContract {
    #[serde(default = "default_market_package")]
    pub package: ObjectId,
    #[serde(default = "default_market_module")]
    pub module: String,
    #[serde(default = "default_marketplace_package")]
    pub marketplace_package: ObjectId,
    #[serde(default = "default_marketplace_module")]
    pub marketplace_module: String,
    #[serde(default = "default_gas_budget")]
    pub gas_budget: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchpadContract {
    #[serde(default = "default_launchpad_package")]
    pub package: ObjectId,
    /// Module holding the warehouse administration entry points.
    #[serde(default = "default_launchpad_admin_module")]
    pub admin_module: String,
    /// Module holding the public sale entry points.
    #[serde(default = "default_launchpad_port_module")]
    pub port_module: String,
    #[serde(default = "default_gas_budget")]
    pub gas_budget: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftContract {
    #[serde(default = "default_nft_package")]
    pub package: ObjectId,
    #[serde(default = "default_nft_module")]
    pub module: String,
    #[serde(default = "default_gas_budget")]
    pub gas_budget: u64,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn builtin_id(s: &str) -> ObjectId {
    s.parse().expect("built-in package ids are valid hex")
}

fn default_market_package() -> ObjectId {
    builtin_id("0xc3068e837c975ae949bffc00221c686785d09568")
}

fn default_market_module() -> String {
    "Market".to_string()
}

fn default_marketplace_package() -> ObjectId {
    builtin_id("0xde1cc780dad75e5ec9832563bfe93c5d6359b12b")
}

fn default_marketplace_module() -> String {
    "marketplace".to_string()
}

fn default_launchpad_package() -> ObjectId {
    builtin_id("0xfdfe8940223686b8967fdae16e6d824808bab85d")
}

fn default_launchpad_admin_module() -> String {
    "administrate".to_string()
}

fn default_launchpad_port_module() -> String {
    "port".to_string()
}

fn default_nft_package() -> ObjectId {
    builtin_id("0xab6ec47649852a86f370b17f169d883c1fa59f77")
}

fn default_nft_module() -> String {
    "suimarines".to_string()
}

fn default_gas_budget() -> u64 {
    DEFAULT_GAS_BUDGET
}

// ── Impl ───────────────────────────────────────────────────────────────

impl Default for MarketContract {
    fn default() -> Self {
        Self {
            package: default_market_package(),
            module: default_market_module(),
            marketplace_package: default_marketplace_package(),
            marketplace_module: default_marketplace_module(),
            gas_budget: default_gas_budget(),
        }
    }
}

impl Default for LaunchpadContract {
    fn default() -> Self {
        Self {
            package: default_launchpad_package(),
            admin_module: default_launchpad_admin_module(),
            port_module: default_launchpad_port_module(),
            gas_budget: default_gas_budget(),
        }
    }
}

impl Default for NftContract {
    fn default() -> Self {
        Self {
            package: default_nft_package(),
            module: default_nft_module(),
            gas_budget: default_gas_budget(),
        }
    }
}

impl ContractsConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::TomlStr(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ContractsConfig is always serializable to TOML")
    }
}
