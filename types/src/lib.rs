//! Fundamental types for the souffl3 wallet toolkit.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! signature schemes, key and signature bytes, addresses and object ids, and the
//! data model returned by a Sui full node.

pub mod address;
pub mod call;
pub mod error;
pub mod keys;
pub mod object;

pub use address::{ObjectId, SuiAddress, TransactionDigest};
pub use call::{CallArg, MoveCall, TransactionResult};
pub use error::KeyError;
pub use keys::{
    PrivateKey, PublicKey, Signature, SignatureScheme, ED25519_KEYPAIR_BYTES_LEN,
    ED25519_PRIVATEKEY_BYTES_LEN, ED25519_PUBLICKEY_BYTES_LEN, ED25519_SIGNATURE_BYTES_LEN,
    SUI_KEYPAIR_LEN,
};
pub use object::{
    ExecutionStatus, GasObject, ObjectInfo, ObjectRef, OwnedObjectRef, Owner, TransactionEffects,
};
