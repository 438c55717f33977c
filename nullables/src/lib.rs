//! Nullable infrastructure for deterministic testing.
//!
//! The wallet reaches the chain only through [`souffl3_rpc::SuiApi`]. This
//! crate provides an implementation that:
//! - Serves objects, gas coins and transaction effects seeded by the test
//! - Records every submitted move call for assertions
//! - Never touches the network
//!
//! Usage: hand a [`NullSuiApi`] to the wallet in place of a `NodeClient`.

pub mod sui_api;

pub use sui_api::{NullSuiApi, SubmittedCall};
