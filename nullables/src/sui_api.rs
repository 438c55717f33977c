//! Nullable Sui node: seeded reads, recorded writes.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use souffl3_crypto::KeyPair;
use souffl3_rpc::{RpcError, SuiApi};
use souffl3_types::{
    ExecutionStatus, GasObject, MoveCall, ObjectId, ObjectInfo, ObjectRef, OwnedObjectRef, Owner,
    SuiAddress, TransactionDigest, TransactionEffects, TransactionResult,
};

/// A move call as received by the nullable node.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmittedCall {
    pub sender: SuiAddress,
    pub call: MoveCall,
}

/// An in-memory Sui node for testing.
/// Thread-safe for use with tokio's multi-threaded runtime.
pub struct NullSuiApi {
    objects: Mutex<HashMap<ObjectId, ObjectInfo>>,
    gas: Mutex<HashMap<SuiAddress, Vec<GasObject>>>,
    transactions: Mutex<HashMap<TransactionDigest, TransactionEffects>>,
    submitted: Mutex<Vec<SubmittedCall>>,
    /// Results handed out by `submit_call`, oldest first. Empty means success.
    outcomes: Mutex<VecDeque<TransactionResult>>,
}

impl NullSuiApi {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            gas: Mutex::new(HashMap::new()),
            transactions: Mutex::new(HashMap::new()),
            submitted: Mutex::new(Vec::new()),
            outcomes: Mutex::new(VecDeque::new()),
        }
    }

    /// Register an object with the given type and owner.
    pub fn add_object(&self, id: ObjectId, object_type: impl Into<String>, owner: Owner) {
        self.objects.lock().unwrap().insert(
            id,
            ObjectInfo {
                object_id: id,
                version: 1,
                object_type: object_type.into(),
                owner,
            },
        );
    }

    /// Give `owner` a gas coin with `balance` MIST.
    pub fn add_gas(&self, owner: SuiAddress, id: ObjectId, balance: u64) {
        self.gas.lock().unwrap().entry(owner).or_default().push(GasObject {
            object_id: id,
            version: 1,
            digest: format!("gas-{id}"),
            balance,
        });
    }

    /// Record a successful transaction that created `created`.
    pub fn add_transaction(&self, digest: TransactionDigest, created: Vec<(ObjectId, Owner)>) {
        let created = created
            .into_iter()
            .map(|(object_id, owner)| OwnedObjectRef {
                owner,
                reference: ObjectRef {
                    object_id,
                    version: 1,
                    digest: format!("obj-{object_id}"),
                },
            })
            .collect();
        self.transactions.lock().unwrap().insert(
            digest.clone(),
            TransactionEffects {
                status: ExecutionStatus {
                    status: "success".to_string(),
                    error: None,
                },
                transaction_digest: Some(digest),
                created,
                mutated: Vec::new(),
                deleted: Vec::new(),
            },
        );
    }

    /// Make the next `submit_call` return a failed execution.
    pub fn fail_next_call(&self, error: impl Into<String>) {
        let error = error.into();
        self.outcomes.lock().unwrap().push_back(TransactionResult {
            ok: false,
            digest: None,
            data: serde_json::json!({ "effects": { "status": { "status": "failure", "error": error } } }),
        });
    }

    /// All calls submitted so far.
    pub fn submitted(&self) -> Vec<SubmittedCall> {
        self.submitted.lock().unwrap().clone()
    }

    /// Clear recorded calls and queued outcomes.
    pub fn reset(&self) {
        self.submitted.lock().unwrap().clear();
        self.outcomes.lock().unwrap().clear();
    }
}

impl Default for NullSuiApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuiApi for NullSuiApi {
    async fn get_gas(&self, owner: &SuiAddress) -> Result<Vec<GasObject>, RpcError> {
        Ok(self
            .gas
            .lock()
            .unwrap()
            .get(owner)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_object(&self, id: &ObjectId) -> Result<ObjectInfo, RpcError> {
        self.objects
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| RpcError::ObjectNotFound(id.to_string()))
    }

    async fn get_transaction(
        &self,
        digest: &TransactionDigest,
    ) -> Result<TransactionEffects, RpcError> {
        self.transactions
            .lock()
            .unwrap()
            .get(digest)
            .cloned()
            .ok_or_else(|| RpcError::TransactionNotFound(digest.to_string()))
    }

    async fn submit_call(
        &self,
        signer: &KeyPair,
        call: &MoveCall,
    ) -> Result<TransactionResult, RpcError> {
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(SubmittedCall {
            sender: signer.address(),
            call: call.clone(),
        });
        let sequence = submitted.len();
        drop(submitted);

        let queued = self.outcomes.lock().unwrap().pop_front();
        Ok(queued.unwrap_or_else(|| TransactionResult {
            ok: true,
            digest: Some(TransactionDigest::new(format!("null-tx-{sequence}"))),
            data: serde_json::json!({ "effects": { "status": { "status": "success" } } }),
        }))
    }
}
