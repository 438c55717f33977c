//! Account addresses, object ids and transaction digests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Byte length of addresses and object ids.
pub const SUI_ADDRESS_LENGTH: usize = 20;

/// Error returned when a `0x`-prefixed hex id cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex id {input:?}: {reason}")]
pub struct ParseIdError {
    pub input: String,
    pub reason: String,
}

fn parse_hex_id(s: &str) -> Result<[u8; SUI_ADDRESS_LENGTH], ParseIdError> {
    let fail = |reason: String| ParseIdError {
        input: s.to_string(),
        reason,
    };
    let body = s.strip_prefix("0x").unwrap_or(s);
    if body.len() > SUI_ADDRESS_LENGTH * 2 {
        return Err(fail(format!(
            "expected at most {} hex digits, found {}",
            SUI_ADDRESS_LENGTH * 2,
            body.len()
        )));
    }
    // Short ids such as `0x2` are left-padded.
    let padded = format!("{:0>width$}", body, width = SUI_ADDRESS_LENGTH * 2);
    let bytes = hex::decode(padded).map_err(|e| fail(e.to_string()))?;
    let mut out = [0u8; SUI_ADDRESS_LENGTH];
    out.copy_from_slice(&bytes);
    Ok(out)
}

macro_rules! hex_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name([u8; SUI_ADDRESS_LENGTH]);

        impl $name {
            pub const LENGTH: usize = SUI_ADDRESS_LENGTH;

            pub const fn new(bytes: [u8; SUI_ADDRESS_LENGTH]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; SUI_ADDRESS_LENGTH] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hex_id(s).map(Self)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }
    };
}

hex_id!(
    /// A 20-byte account address, rendered as `0x` + 40 lowercase hex digits.
    SuiAddress
);

hex_id!(
    /// A 20-byte on-chain object id (packages, coins, shared objects).
    ObjectId
);

/// A transaction digest as returned by the node (base58 text, kept opaque).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionDigest(String);

impl TransactionDigest {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionDigest {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
