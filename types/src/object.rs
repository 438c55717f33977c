//! On-chain object model as reported by a Sui full node.

use serde::{Deserialize, Serialize};

use crate::address::{ObjectId, SuiAddress, TransactionDigest};

/// Fully-qualified type of a SUI gas coin.
pub const GAS_COIN_TYPE: &str = "0x2::coin::Coin<0x2::sui::SUI>";

/// Who owns an object.
///
/// The node renders `Immutable` (and, on older nodes, `Shared`) as a bare
/// string and every other variant as a single-key map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum Owner {
    Immutable,
    Shared {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        initial_shared_version: Option<u64>,
    },
    AddressOwner(SuiAddress),
    ObjectOwner(ObjectId),
}

impl Owner {
    pub fn is_shared(&self) -> bool {
        matches!(self, Owner::Shared { .. })
    }

    pub fn is_immutable(&self) -> bool {
        matches!(self, Owner::Immutable)
    }

    /// Short label for display ("Immutable", "Shared", or the owning id).
    pub fn kind(&self) -> String {
        match self {
            Owner::Immutable => "Immutable".to_string(),
            Owner::Shared { .. } => "Shared".to_string(),
            Owner::AddressOwner(addr) => addr.to_string(),
            Owner::ObjectOwner(id) => id.to_string(),
        }
    }
}

impl TryFrom<serde_json::Value> for Owner {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::String(s) => match s.as_str() {
                "Immutable" => Ok(Owner::Immutable),
                "Shared" => Ok(Owner::Shared {
                    initial_shared_version: None,
                }),
                other => Err(format!("unknown owner kind: {other}")),
            },
            Value::Object(map) => {
                let (key, inner) = map
                    .into_iter()
                    .next()
                    .ok_or_else(|| "empty owner object".to_string())?;
                let as_str = |v: &Value| {
                    v.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| format!("{key} owner must be a string"))
                };
                match key.as_str() {
                    "AddressOwner" => as_str(&inner)?
                        .parse()
                        .map(Owner::AddressOwner)
                        .map_err(|e| e.to_string()),
                    "ObjectOwner" => as_str(&inner)?
                        .parse()
                        .map(Owner::ObjectOwner)
                        .map_err(|e| e.to_string()),
                    "Shared" => Ok(Owner::Shared {
                        initial_shared_version: inner
                            .get("initial_shared_version")
                            .and_then(Value::as_u64),
                    }),
                    "Immutable" => Ok(Owner::Immutable),
                    other => Err(format!("unknown owner kind: {other}")),
                }
            }
            other => Err(format!("unexpected owner value: {other}")),
        }
    }
}

/// Reference to a specific version of an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    pub object_id: ObjectId,
    pub version: u64,
    pub digest: String,
}

/// An object reference together with its owner, as listed in transaction effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedObjectRef {
    pub owner: Owner,
    pub reference: ObjectRef,
}

/// A gas coin owned by an address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasObject {
    pub object_id: ObjectId,
    pub version: u64,
    pub digest: String,
    pub balance: u64,
}

/// Summary of an object fetched by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub object_id: ObjectId,
    pub version: u64,
    /// Move type, e.g. `0x..::nft::Nft<0x..::suimarines::SUIMARINES>`.
    pub object_type: String,
    pub owner: Owner,
}

impl ObjectInfo {
    pub fn is_gas_coin(&self) -> bool {
        self.object_type == GAS_COIN_TYPE
    }
}

/// Execution status reported in transaction effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// The effects of an executed transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    pub status: ExecutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_digest: Option<TransactionDigest>,
    #[serde(default)]
    pub created: Vec<OwnedObjectRef>,
    #[serde(default)]
    pub mutated: Vec<OwnedObjectRef>,
    #[serde(default)]
    pub deleted: Vec<ObjectRef>,
}
