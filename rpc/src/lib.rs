//! JSON-RPC client for a Sui full node.
//!
//! [`SuiApi`] is the seam the wallet talks through; [`NodeClient`] implements
//! it over HTTP. Tests substitute an in-memory implementation.
//!
//! Methods used:
//! - `sui_getObject`, `sui_getObjectsOwnedByAddress` (objects and gas coins)
//! - `sui_getTransaction` (effects and created objects)
//! - `sui_moveCall` + `sui_executeTransactionSerializedSig` (move calls)

pub mod api;
pub mod client;
pub mod error;
pub mod wire;

pub use api::SuiApi;
pub use client::NodeClient;
pub use error::RpcError;
