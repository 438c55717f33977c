//! The node capabilities the wallet depends on.

use async_trait::async_trait;
use souffl3_crypto::KeyPair;
use souffl3_types::{
    GasObject, MoveCall, ObjectId, ObjectInfo, SuiAddress, TransactionDigest, TransactionEffects,
    TransactionResult,
};

use crate::error::RpcError;

/// Read and submit operations against a Sui node.
#[async_trait]
pub trait SuiApi: Send + Sync {
    /// Gas coins owned by `owner`.
    async fn get_gas(&self, owner: &SuiAddress) -> Result<Vec<GasObject>, RpcError>;

    /// Fetch an object's type and owner.
    async fn get_object(&self, id: &ObjectId) -> Result<ObjectInfo, RpcError>;

    /// Fetch the effects of an executed transaction.
    async fn get_transaction(
        &self,
        digest: &TransactionDigest,
    ) -> Result<TransactionEffects, RpcError>;

    /// Build, sign with `signer`, and execute a move call.
    async fn submit_call(
        &self,
        signer: &KeyPair,
        call: &MoveCall,
    ) -> Result<TransactionResult, RpcError>;
}
