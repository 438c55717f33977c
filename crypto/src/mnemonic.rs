//! BIP39 mnemonic generation and Ed25519 key derivation.
//!
//! Keys are derived with SLIP-0010 (Ed25519 supports hardened children only)
//! along `m/44'/784'/0'/0'/{account}'`, 784 being the Sui coin type.
//!
//! SLIP-0010 for Ed25519:
//! - master: `I = HMAC-SHA512(key = "ed25519 seed", data = seed)`; `k = I[..32]`, `c = I[32..]`
//! - child `i` (hardened): `I = HMAC-SHA512(key = c, data = 0x00 || k || ser32(i | 2^31))`

use bip39::Mnemonic;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use souffl3_types::{KeyError, PrivateKey};
use zeroize::Zeroize;

use crate::keys::{public_from_private, Ed25519KeyPair};

type HmacSha512 = Hmac<Sha512>;

/// SLIP-44 coin type registered for Sui.
pub const SUI_COIN_TYPE: u32 = 784;

const HARDENED: u32 = 0x8000_0000;
const SLIP10_ED25519_KEY: &[u8] = b"ed25519 seed";

/// Generate a new 24-word BIP39 mnemonic from 256-bit entropy.
pub fn generate_mnemonic() -> Result<String, KeyError> {
    let mut entropy = [0u8; 32];
    rand::RngCore::fill_bytes(&mut rand::rngs::OsRng, &mut entropy);
    let mnemonic =
        Mnemonic::from_entropy(&entropy).map_err(|e| KeyError::Derivation(e.to_string()))?;
    entropy.zeroize();
    Ok(mnemonic.to_string())
}

/// Validate that a phrase is a BIP39 mnemonic.
pub fn validate_mnemonic(mnemonic: &str) -> bool {
    Mnemonic::parse_normalized(mnemonic).is_ok()
}

/// Derive the Ed25519 key pair for `account` from a BIP39 phrase (empty passphrase).
pub fn keypair_from_mnemonic(mnemonic: &str, account: u32) -> Result<Ed25519KeyPair, KeyError> {
    let mnemonic = Mnemonic::parse_normalized(mnemonic)
        .map_err(|e| KeyError::InvalidMnemonic(e.to_string()))?;
    let mut seed = mnemonic.to_seed_normalized("");

    let path = [44, SUI_COIN_TYPE, 0, 0, account];
    let derived = derive_slip10(&seed, &path);
    seed.zeroize();
    let (mut key, _chain_code) = derived?;

    let private = PrivateKey(key);
    key.zeroize();
    let public = public_from_private(&private);
    Ok(Ed25519KeyPair { public, private })
}

/// Walk a fully hardened SLIP-0010 path, returning `(key, chain_code)`.
fn derive_slip10(seed: &[u8], path: &[u32]) -> Result<([u8; 32], [u8; 32]), KeyError> {
    let (mut key, mut chain) = hmac_split(SLIP10_ED25519_KEY, &[seed])?;

    for &index in path {
        if index >= HARDENED {
            return Err(KeyError::Derivation(format!(
                "path index {index} already has the hardened bit set"
            )));
        }
        let ser = (index | HARDENED).to_be_bytes();
        let (next_key, next_chain) = hmac_split(&chain, &[&[0u8][..], &key[..], &ser[..]])?;
        key.zeroize();
        key = next_key;
        chain = next_chain;
    }

    Ok((key, chain))
}

fn hmac_split(key: &[u8], parts: &[&[u8]]) -> Result<([u8; 32], [u8; 32]), KeyError> {
    let mut mac =
        HmacSha512::new_from_slice(key).map_err(|e| KeyError::Derivation(e.to_string()))?;
    for part in parts {
        mac.update(part);
    }
    let out = mac.finalize().into_bytes();

    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    left.copy_from_slice(&out[..32]);
    right.copy_from_slice(&out[32..]);
    Ok((left, right))
}
