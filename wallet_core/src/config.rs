//! Client configuration (`client.yaml`) parsing.
//!
//! ```yaml
//! keystore:
//!   File: /home/me/.sui/sui_config/sui.keystore
//! envs:
//!   - alias: devnet
//!     rpc: "https://fullnode.devnet.sui.io:443"
//! active_env: devnet
//! active_address: "0x80cbaa216ad42f58afd3cad49c65e3512bfb87e4"
//! ```
//!
//! The keystore is always resolved next to the configuration file: only the
//! file name of `keystore.File` is kept.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use souffl3_types::SuiAddress;

use crate::error::{ConfigError, WalletError};

/// The configuration file exactly as written, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawClientConfig {
    #[serde(default)]
    pub active_address: Option<String>,
    #[serde(default)]
    pub keystore: Option<RawKeystore>,
    #[serde(default)]
    pub active_env: Option<String>,
    #[serde(default)]
    pub envs: Option<Vec<RawEnv>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawKeystore {
    #[serde(rename = "File", default)]
    pub file: Option<String>,
}

/// One entry of the `envs` list.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEnv {
    pub alias: String,
    pub rpc: String,
    #[serde(default)]
    pub ws: Option<String>,
}

/// A validated client configuration. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub config_path: PathBuf,
    pub active_env: String,
    pub active_address: String,
    pub keystore_path: PathBuf,
    pub rpc_url: String,
}

impl ClientConfig {
    /// Load and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(path, &content)
    }

    /// Parse and validate YAML text that was read from `path`.
    pub fn from_yaml_str(path: impl AsRef<Path>, content: &str) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = if content.trim().is_empty() {
            RawClientConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ConfigError::Yaml {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };
        Self::from_raw(path, raw)
    }

    /// Validate an already-parsed configuration.
    ///
    /// Checks `active_address`, then `keystore.File`, then `active_env`, then
    /// resolves the RPC url from the first `envs` entry whose alias matches.
    pub fn from_raw(path: impl AsRef<Path>, raw: RawClientConfig) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let invalid = |field| ConfigError::ConfigInvalid {
            path: path.to_path_buf(),
            field,
        };

        let active_address = non_empty(raw.active_address).ok_or_else(|| invalid("active_address"))?;
        let keystore_file = non_empty(raw.keystore.and_then(|k| k.file))
            .ok_or_else(|| invalid("keystore.File"))?;
        let active_env = non_empty(raw.active_env).ok_or_else(|| invalid("active_env"))?;

        let envs = raw.envs.ok_or_else(|| ConfigError::ConfigMissingSection {
            path: path.to_path_buf(),
            section: "envs",
        })?;
        let rpc_url = envs
            .into_iter()
            .find(|env| env.alias == active_env)
            .and_then(|env| non_empty(Some(env.rpc)))
            .ok_or_else(|| ConfigError::UnknownEnv {
                path: path.to_path_buf(),
                env: active_env.clone(),
            })?;

        let file_name = Path::new(&keystore_file)
            .file_name()
            .ok_or_else(|| invalid("keystore.File"))?;
        let keystore_path = config_dir(path)?.join(file_name);

        Ok(Self {
            config_path: path.to_path_buf(),
            active_env,
            active_address,
            keystore_path,
            rpc_url,
        })
    }

    /// `(config_path, active_env, active_address, keystore_path, rpc_url)`.
    pub fn as_tuple(&self) -> (&Path, &str, &str, &Path, &str) {
        (
            &self.config_path,
            &self.active_env,
            &self.active_address,
            &self.keystore_path,
            &self.rpc_url,
        )
    }

    /// Parse `active_address` as an account address.
    pub fn active_address(&self) -> Result<SuiAddress, WalletError> {
        self.active_address
            .parse()
            .map_err(|e: souffl3_types::address::ParseIdError| WalletError::InvalidAddress {
                address: self.active_address.clone(),
                reason: e.reason,
            })
    }
}

/// `$HOME/.sui/sui_config/client.yaml`, the location the Sui CLI writes.
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".sui")
            .join("sui_config")
            .join("client.yaml")
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Absolute directory containing the configuration file.
fn config_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(dir))
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
}
