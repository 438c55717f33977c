//! Wallet core library for souffl3.
//!
//! Provides everything the command-line tools need:
//! - Client configuration parsing (active address, keystore path, RPC url)
//! - Keystore loading and saving (base64 keystrings)
//! - A [`Wallet`] holding explicit config, keys and a node handle
//! - Gas coin selection
//! - Classification of objects created by publish / list / mint transactions
//! - Marketplace, launchpad and NFT contract calls

pub mod config;
pub mod contracts;
pub mod error;
pub mod gas;
pub mod keystore;
pub mod launchpad;
pub mod market;
pub mod nft;
pub mod objects;
pub mod wallet;

#[cfg(test)]
mod testing;

pub use config::{default_config_path, ClientConfig, RawClientConfig};
pub use contracts::ContractsConfig;
pub use error::{ConfigError, WalletError};
pub use gas::select_gas;
pub use keystore::{Keystore, RejectedKey};
pub use objects::{ListingObjects, PublishedObjects};
pub use launchpad::{LaunchpadClient, SaleMint, WarehouseBatch};
pub use market::{MarketClient, Purchase};
pub use nft::{NftClient, NftMetadata};
pub use wallet::Wallet;
