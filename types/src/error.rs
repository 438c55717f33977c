//! Key decoding and construction errors shared across crates.

use thiserror::Error;

use crate::keys::SignatureScheme;

/// Errors raised while decoding or constructing key material.
///
/// Messages carry lengths and scheme tags only, never key bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Either the character count of the keystring, or for a 44-character
    /// string the number of bytes it decodes to (anything but 33).
    #[error(
        "invalid keystring length {0}: expected {chars} characters decoding to {bytes} bytes",
        chars = crate::keys::SUI_KEYPAIR_LEN,
        bytes = crate::keys::ED25519_KEYPAIR_BYTES_LEN + 1
    )]
    InvalidKeyLength(usize),

    #[error("unsupported signature scheme flag: {0}")]
    UnsupportedScheme(u8),

    #[error("invalid key material: expected {expected} bytes, found {actual}")]
    InvalidKeyMaterial { expected: usize, actual: usize },

    #[error("scheme mismatch: expected {expected}, found flag {found}")]
    SchemeMismatch {
        expected: SignatureScheme,
        found: u8,
    },

    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    #[error("key derivation failed: {0}")]
    Derivation(String),
}
