//! Ed25519 key pairs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use souffl3_types::{
    KeyError, PrivateKey, PublicKey, SignatureScheme, ED25519_KEYPAIR_BYTES_LEN, SUI_KEYPAIR_LEN,
};

/// An Ed25519 key pair: the 32-byte seed and the public key derived from it.
pub struct Ed25519KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl Ed25519KeyPair {
    /// Build a key pair from a 32-byte secret seed, deriving the public key.
    pub fn from_secret_bytes(secret: &[u8]) -> Result<Self, KeyError> {
        if secret.len() != ED25519_KEYPAIR_BYTES_LEN {
            return Err(KeyError::InvalidKeyMaterial {
                expected: ED25519_KEYPAIR_BYTES_LEN,
                actual: secret.len(),
            });
        }
        let private = PrivateKey::from_bytes(secret)?;
        let public = public_from_private(&private);
        Ok(Self { public, private })
    }

    /// Parse a 44-character keystring whose flag byte must be Ed25519.
    pub fn from_base64(keystring: &str) -> Result<Self, KeyError> {
        if keystring.len() != SUI_KEYPAIR_LEN {
            return Err(KeyError::InvalidKeyLength(keystring.len()));
        }
        let bytes = STANDARD
            .decode(keystring)
            .map_err(|e| KeyError::InvalidBase64(e.to_string()))?;
        if bytes.len() != 1 + ED25519_KEYPAIR_BYTES_LEN {
            return Err(KeyError::InvalidKeyLength(bytes.len()));
        }
        match bytes.split_first() {
            Some((&flag, rest)) if flag == SignatureScheme::Ed25519.flag() => {
                Self::from_secret_bytes(rest)
            }
            Some((&flag, _)) => Err(KeyError::SchemeMismatch {
                expected: SignatureScheme::Ed25519,
                found: flag,
            }),
            None => Err(KeyError::InvalidKeyLength(0)),
        }
    }

    /// Encode as `base64(flag || seed)`.
    pub fn to_base64(&self) -> String {
        let mut bytes = Vec::with_capacity(1 + ED25519_KEYPAIR_BYTES_LEN);
        bytes.push(SignatureScheme::Ed25519.flag());
        bytes.extend_from_slice(self.private.as_bytes());
        let encoded = STANDARD.encode(&bytes);
        zeroize::Zeroize::zeroize(&mut bytes);
        encoded
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }
}

/// Generate a new Ed25519 key pair from a secure random source.
pub fn generate_keypair() -> Ed25519KeyPair {
    let signing_key = SigningKey::generate(&mut OsRng);
    let verifying_key = signing_key.verifying_key();
    Ed25519KeyPair {
        public: PublicKey(verifying_key.to_bytes()),
        private: PrivateKey(signing_key.to_bytes()),
    }
}

/// Derive the public key from a private key.
pub fn public_from_private(private: &PrivateKey) -> PublicKey {
    let signing_key = SigningKey::from_bytes(&private.0);
    PublicKey(signing_key.verifying_key().to_bytes())
}

/// Derive a key pair from a 32-byte seed (deterministic).
pub fn keypair_from_seed(seed: &[u8; 32]) -> Ed25519KeyPair {
    let private = PrivateKey(*seed);
    let public = public_from_private(&private);
    Ed25519KeyPair { public, private }
}
