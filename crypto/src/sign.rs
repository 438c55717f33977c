//! Ed25519 message signing and verification.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::{Signer as _, SigningKey, Verifier, VerifyingKey};
use souffl3_types::{PrivateKey, PublicKey, Signature, SignatureScheme};

/// Sign a message with a private key, returning the signature.
///
/// Ed25519 signatures are deterministic: the same key and message always
/// produce the same signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    let sig = signing_key.sign(message);
    Signature(sig.to_bytes())
}

/// Verify a signature against a message and public key.
///
/// Returns `true` if the signature is valid, `false` otherwise.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key.verify(message, &dalek_sig).is_ok()
}

/// Anything that can sign raw bytes.
pub trait Signer {
    fn sign(&self, message: &[u8]) -> Signature;

    /// Sign with a recovery id, for parity with recoverable schemes.
    /// Ed25519 has no recovery id, so the default ignores it.
    fn sign_with_recovery_id(&self, message: &[u8], _recovery_id: u8) -> Signature {
        self.sign(message)
    }
}

impl Signer for PrivateKey {
    fn sign(&self, message: &[u8]) -> Signature {
        sign_message(message, self)
    }
}

/// Serialized signature accepted by the node: `base64(flag || signature || public key)`.
pub fn serialize_signature(
    scheme: SignatureScheme,
    signature: &Signature,
    public_key: &PublicKey,
) -> String {
    let mut bytes = Vec::with_capacity(1 + 64 + 32);
    bytes.push(scheme.flag());
    bytes.extend_from_slice(signature.as_bytes());
    bytes.extend_from_slice(public_key.as_bytes());
    STANDARD.encode(bytes)
}
