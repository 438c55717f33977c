//! Keystring decoding.
//!
//! A keystring is `base64(flag || key material)`, the format of each entry in
//! a Sui keystore file. Only Ed25519 (`flag == 0`) keys can be decoded; the
//! other scheme flags are recognised but rejected with
//! [`KeyError::UnsupportedScheme`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use souffl3_types::{KeyError, SignatureScheme, ED25519_KEYPAIR_BYTES_LEN, SUI_KEYPAIR_LEN};

use crate::keypair::KeyPair;
use crate::keys::Ed25519KeyPair;

/// Decode a keystring into a key pair.
///
/// The string length is checked before decoding and the decoded length
/// after it, so a malformed string never produces a partially built pair.
/// A padded 44-character string can hold only 31 or 32 bytes; those fail
/// with [`KeyError::InvalidKeyLength`] carrying the decoded length.
pub fn decode_keystring(keystring: &str) -> Result<KeyPair, KeyError> {
    if keystring.len() != SUI_KEYPAIR_LEN {
        return Err(KeyError::InvalidKeyLength(keystring.len()));
    }
    let bytes = STANDARD
        .decode(keystring)
        .map_err(|e| KeyError::InvalidBase64(e.to_string()))?;
    if bytes.len() != 1 + ED25519_KEYPAIR_BYTES_LEN {
        return Err(KeyError::InvalidKeyLength(bytes.len()));
    }
    let (&flag, material) = bytes
        .split_first()
        .ok_or(KeyError::InvalidKeyLength(0))?;

    match SignatureScheme::try_from(flag)? {
        SignatureScheme::Ed25519 => Ok(KeyPair::Ed25519(Ed25519KeyPair::from_secret_bytes(
            material,
        )?)),
        // Not implemented: fail loudly rather than guessing at the layout.
        SignatureScheme::Secp256k1 | SignatureScheme::Secp256r1 => {
            Err(KeyError::UnsupportedScheme(flag))
        }
    }
}

/// Encode a key pair as a keystring (inverse of [`decode_keystring`]).
pub fn encode_keystring(keypair: &KeyPair) -> String {
    match keypair {
        KeyPair::Ed25519(kp) => kp.to_base64(),
        KeyPair::Secp256k1(never) | KeyPair::Secp256r1(never) => match *never {},
    }
}
