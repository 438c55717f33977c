//! Keystore file: a JSON array of base64 keystrings.
//!
//! Each entry is decoded independently. An entry that fails to decode is
//! reported and skipped; it never prevents the remaining keys from loading.

use std::io::Write;
use std::path::{Path, PathBuf};

use souffl3_crypto::{decode_keystring, KeyPair};
use souffl3_types::{KeyError, SuiAddress};
use tempfile::NamedTempFile;

use crate::error::WalletError;

/// A keystore entry that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedKey {
    /// Position of the entry in the file.
    pub index: usize,
    pub error: KeyError,
}

/// Decoded key pairs, in file order.
#[derive(Debug, Default)]
pub struct Keystore {
    keys: Vec<KeyPair>,
    rejected: Vec<RejectedKey>,
}

impl Keystore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a list of keystrings, keeping the good ones and recording the rest.
    pub fn from_keystrings<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            match decode_keystring(entry.as_ref()) {
                Ok(kp) => store.keys.push(kp),
                Err(error) => {
                    tracing::warn!(index, %error, "skipping undecodable keystore entry");
                    store.rejected.push(RejectedKey { index, error });
                }
            }
        }
        store
    }

    /// Load a keystore file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| keystore_err(path, format!("failed to read: {e}")))?;
        let entries: Vec<String> = serde_json::from_str(&json)
            .map_err(|e| keystore_err(path, format!("expected a JSON array of keystrings: {e}")))?;

        let store = Self::from_keystrings(&entries);
        tracing::debug!(
            path = %path.display(),
            loaded = store.keys.len(),
            rejected = store.rejected.len(),
            "loaded keystore"
        );
        Ok(store)
    }

    /// Write all decodable keys back as a JSON array of keystrings.
    ///
    /// The array goes to a temporary file beside `path` which then replaces
    /// `path`, so an interrupted save leaves the previous keystore intact.
    /// The temporary file is created owner-only (0600 on unix) and that mode
    /// carries over to the keystore.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), WalletError> {
        let path = path.as_ref();
        let entries: Vec<String> = self.keys.iter().map(KeyPair::to_keystring).collect();
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| keystore_err(path, format!("JSON serialization failed: {e}")))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| keystore_err(path, format!("failed to create temporary file: {e}")))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| keystore_err(path, format!("failed to write: {e}")))?;
        tmp.persist(path)
            .map_err(|e| keystore_err(path, format!("failed to replace keystore: {}", e.error)))?;

        tracing::debug!(path = %path.display(), keys = entries.len(), "saved keystore");
        Ok(())
    }

    /// Add a key pair unless one with the same address is already present.
    /// Returns the key's address.
    pub fn add(&mut self, keypair: KeyPair) -> SuiAddress {
        let address = keypair.address();
        if self.find(&address).is_none() {
            self.keys.push(keypair);
        }
        address
    }

    /// The key pair whose derived address is `address`.
    pub fn find(&self, address: &SuiAddress) -> Option<&KeyPair> {
        self.keys.iter().find(|kp| kp.address() == *address)
    }

    pub fn addresses(&self) -> Vec<SuiAddress> {
        self.keys.iter().map(KeyPair::address).collect()
    }

    pub fn keys(&self) -> &[KeyPair] {
        &self.keys
    }

    pub fn rejected(&self) -> &[RejectedKey] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn keystore_err(path: &Path, message: String) -> WalletError {
    WalletError::Keystore {
        path: PathBuf::from(path),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use souffl3_crypto::keypair_from_seed;

    fn keystring(seed: u8) -> String {
        keypair_from_seed(&[seed; 32]).to_base64()
    }

    #[test]
    fn bad_entries_do_not_block_good_ones() {
        let secp = {
            let mut s = keystring(1).into_bytes();
            // "AQ" prefix encodes flag 1 followed by the seed's high bits.
            s[0] = b'A';
            s[1] = b'Q';
            String::from_utf8(s).unwrap()
        };
        let entries = vec![keystring(1), "short".to_string(), secp, keystring(2)];
        let store = Keystore::from_keystrings(&entries);

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.rejected(),
            &[
                RejectedKey {
                    index: 1,
                    error: KeyError::InvalidKeyLength(5)
                },
                RejectedKey {
                    index: 2,
                    error: KeyError::UnsupportedScheme(1)
                },
            ]
        );
    }

    #[test]
    fn find_by_derived_address() {
        let store = Keystore::from_keystrings([keystring(1), keystring(2)]);
        let target = KeyPair::from(keypair_from_seed(&[2u8; 32])).address();
        let kp = store.find(&target).unwrap();
        assert_eq!(kp.private_key_seed(), &[2u8; 32]);
        assert_eq!(store.addresses().len(), 2);
    }

    #[test]
    fn add_deduplicates() {
        let mut store = Keystore::new();
        let a1 = store.add(KeyPair::from(keypair_from_seed(&[5u8; 32])));
        let a2 = store.add(KeyPair::from(keypair_from_seed(&[5u8; 32])));
        assert_eq!(a1, a2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sui.keystore");

        let store = Keystore::from_keystrings([keystring(7), keystring(8)]);
        store.save(&path).unwrap();
        let loaded = Keystore::load(&path).unwrap();

        assert_eq!(loaded.addresses(), store.addresses());
        assert!(loaded.rejected().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sui.keystore");
        Keystore::from_keystrings([keystring(7)]).save(&path).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn save_replaces_world_readable_keystore() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sui.keystore");
        std::fs::write(&path, "[]").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = Keystore::from_keystrings([keystring(7), keystring(8)]);
        store.save(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(Keystore::load(&path).unwrap().addresses(), store.addresses());
        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn failed_save_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sui.keystore");
        let result = Keystore::from_keystrings([keystring(7)]).save(&path);
        assert!(matches!(result, Err(WalletError::Keystore { .. })));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn load_nonexistent_file_fails() {
        let result = Keystore::load("/tmp/nonexistent-souffl3.keystore");
        assert!(matches!(result, Err(WalletError::Keystore { .. })));
    }

    #[test]
    fn load_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sui.keystore");
        std::fs::write(&path, r#"{"keys": []}"#).unwrap();
        assert!(matches!(
            Keystore::load(&path),
            Err(WalletError::Keystore { .. })
        ));
    }
}
