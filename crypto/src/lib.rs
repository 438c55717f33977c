//! Cryptographic primitives for the souffl3 wallet toolkit.
//!
//! - **Ed25519** key pairs, signing and signature verification
//! - Keystring decoding: `base64(flag || key material)` as stored in a Sui keystore
//! - Address derivation: first 20 bytes of SHA3-256(flag || public key)
//! - BIP39 mnemonics with SLIP-0010 derivation along `m/44'/784'/0'/0'/i'`

pub mod address;
pub mod keypair;
pub mod keys;
pub mod keystring;
pub mod mnemonic;
pub mod sign;

pub use address::derive_address;
pub use keypair::{KeyPair, Unsupported};
pub use keys::{generate_keypair, keypair_from_seed, public_from_private, Ed25519KeyPair};
pub use keystring::{decode_keystring, encode_keystring};
pub use mnemonic::{generate_mnemonic, keypair_from_mnemonic, validate_mnemonic, SUI_COIN_TYPE};
pub use sign::{serialize_signature, sign_message, verify_signature, Signer};
