//! Signature schemes and raw key types for wallet identity and signing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KeyError;

/// Length of a base64 keystring: `base64(flag || 32-byte seed)`.
pub const SUI_KEYPAIR_LEN: usize = 44;
/// Ed25519 seed length (the key material after the flag byte).
pub const ED25519_KEYPAIR_BYTES_LEN: usize = 32;
pub const ED25519_PRIVATEKEY_BYTES_LEN: usize = 32;
pub const ED25519_PUBLICKEY_BYTES_LEN: usize = 32;
pub const ED25519_SIGNATURE_BYTES_LEN: usize = 64;

/// Key encoding scheme. The discriminant is the flag byte that prefixes
/// serialized keys and signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SignatureScheme {
    #[serde(rename = "ED25519")]
    Ed25519 = 0,
    Secp256k1 = 1,
    Secp256r1 = 2,
}

impl SignatureScheme {
    /// Canonical scheme name as used by the node.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureScheme::Ed25519 => "ED25519",
            SignatureScheme::Secp256k1 => "Secp256k1",
            SignatureScheme::Secp256r1 => "Secp256r1",
        }
    }

    pub fn flag(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for SignatureScheme {
    type Error = KeyError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(SignatureScheme::Ed25519),
            1 => Ok(SignatureScheme::Secp256k1),
            2 => Ok(SignatureScheme::Secp256r1),
            other => Err(KeyError::UnsupportedScheme(other)),
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 32-byte Ed25519 public (verify) key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    /// Build a public key from a slice, checking the fixed length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let arr: [u8; ED25519_PUBLICKEY_BYTES_LEN] =
            bytes.try_into().map_err(|_| KeyError::InvalidKeyMaterial {
                expected: ED25519_PUBLICKEY_BYTES_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// A 32-byte Ed25519 private key seed.
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; 32]);

impl PrivateKey {
    /// Build a private key from a slice, checking the fixed length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let arr: [u8; ED25519_PRIVATEKEY_BYTES_LEN] =
            bytes.try_into().map_err(|_| KeyError::InvalidKeyMaterial {
                expected: ED25519_PRIVATEKEY_BYTES_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SigVisitor;

        impl<'de> serde::de::Visitor<'de> for SigVisitor {
            type Value = Signature;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "64 bytes")
            }

            fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                let arr: [u8; 64] = v
                    .try_into()
                    .map_err(|_| E::invalid_length(v.len(), &self))?;
                Ok(Signature(arr))
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut arr = [0u8; 64];
                for (i, byte) in arr.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Signature(arr))
            }
        }

        deserializer.deserialize_bytes(SigVisitor)
    }
}
