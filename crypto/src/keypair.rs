//! Scheme-tagged key pairs.

use souffl3_types::{PrivateKey, PublicKey, Signature, SignatureScheme, SuiAddress};

use crate::keys::Ed25519KeyPair;
use crate::sign::{serialize_signature, sign_message};

/// Placeholder for schemes whose keys cannot be decoded yet.
///
/// Uninhabited: a `KeyPair::Secp256k1` or `KeyPair::Secp256r1` value can never
/// be constructed, so matches on those arms are statically unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {}

/// A key pair for one signature scheme.
pub enum KeyPair {
    Ed25519(Ed25519KeyPair),
    Secp256k1(Unsupported),
    Secp256r1(Unsupported),
}

impl KeyPair {
    pub fn scheme(&self) -> SignatureScheme {
        match self {
            KeyPair::Ed25519(_) => SignatureScheme::Ed25519,
            KeyPair::Secp256k1(never) | KeyPair::Secp256r1(never) => match *never {},
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        match self {
            KeyPair::Ed25519(kp) => kp.public_key(),
            KeyPair::Secp256k1(never) | KeyPair::Secp256r1(never) => match *never {},
        }
    }

    pub fn private_key(&self) -> &PrivateKey {
        match self {
            KeyPair::Ed25519(kp) => kp.private_key(),
            KeyPair::Secp256k1(never) | KeyPair::Secp256r1(never) => match *never {},
        }
    }

    /// The raw secret seed the pair was built from.
    pub fn private_key_seed(&self) -> &[u8; 32] {
        self.private_key().as_bytes()
    }

    pub fn sign(&self, message: &[u8]) -> Signature {
        match self {
            KeyPair::Ed25519(kp) => sign_message(message, &kp.private),
            KeyPair::Secp256k1(never) | KeyPair::Secp256r1(never) => match *never {},
        }
    }

    /// Sign and serialize as `base64(flag || signature || public key)`.
    pub fn sign_serialized(&self, message: &[u8]) -> String {
        let signature = self.sign(message);
        serialize_signature(self.scheme(), &signature, self.public_key())
    }

    pub fn address(&self) -> SuiAddress {
        crate::address::derive_address(self.scheme(), self.public_key())
    }

    pub fn to_keystring(&self) -> String {
        crate::keystring::encode_keystring(self)
    }
}

impl From<Ed25519KeyPair> for KeyPair {
    fn from(kp: Ed25519KeyPair) -> Self {
        KeyPair::Ed25519(kp)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("scheme", &self.scheme())
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
