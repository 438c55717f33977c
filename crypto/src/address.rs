//! Account address derivation from public keys.
//!
//! Address = first 20 bytes of SHA3-256(flag || public_key), rendered as
//! `0x` + 40 hex digits.

use sha3::{Digest, Sha3_256};
use souffl3_types::{PublicKey, SignatureScheme, SuiAddress};

const ADDRESS_LEN: usize = SuiAddress::LENGTH;

/// Derive the account address owned by a public key.
pub fn derive_address(scheme: SignatureScheme, public_key: &PublicKey) -> SuiAddress {
    let mut hasher = Sha3_256::new();
    hasher.update([scheme.flag()]);
    hasher.update(public_key.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; ADDRESS_LEN];
    bytes.copy_from_slice(&digest[..ADDRESS_LEN]);
    SuiAddress::new(bytes)
}
