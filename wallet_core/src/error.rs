use std::path::PathBuf;

use souffl3_rpc::RpcError;
use souffl3_types::{KeyError, SuiAddress};
use thiserror::Error;

/// Failures while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} is not a valid client configuration: missing `{field}`", .path.display())]
    ConfigInvalid { path: PathBuf, field: &'static str },

    #[error("`{section}` not found in configuration file {}", .path.display())]
    ConfigMissingSection { path: PathBuf, section: &'static str },

    #[error("active_env `{env}` has no matching alias in `envs` of {}", .path.display())]
    UnknownEnv { path: PathBuf, env: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {}: {message}", .path.display())]
    Yaml { path: PathBuf, message: String },

    #[error("invalid TOML in {}: {message}", .path.display())]
    Toml { path: PathBuf, message: String },

    #[error("invalid TOML: {0}")]
    TomlStr(String),
}

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("key error: {0}")]
    Key(#[from] KeyError),

    #[error("node RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("keystore {}: {message}", .path.display())]
    Keystore { path: PathBuf, message: String },

    #[error("invalid active address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("no key in the keystore for active address {0}")]
    ActiveKeyNotFound(SuiAddress),

    #[error("no gas coin covers budget {budget} (largest balance: {largest})")]
    InsufficientGas { budget: u64, largest: u64 },

    #[error("call {target} rejected: {detail}")]
    CallRejected { target: String, detail: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
