//! HTTP JSON-RPC client for a Sui full node.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use souffl3_crypto::KeyPair;
use souffl3_types::object::GAS_COIN_TYPE;
use souffl3_types::{
    GasObject, MoveCall, ObjectId, ObjectInfo, SuiAddress, TransactionDigest, TransactionEffects,
    TransactionResult,
};

use crate::api::SuiApi;
use crate::error::RpcError;
use crate::wire;

/// Execution mode requested when submitting a signed transaction.
const EXECUTE_REQUEST_TYPE: &str = "WaitForLocalExecution";

/// JSON-RPC 2.0 client bound to one node URL.
///
/// Wraps `reqwest::Client` with the node's base URL and provides typed
/// methods for each RPC method the wallet needs.
pub struct NodeClient {
    http: reqwest::Client,
    rpc_url: String,
    next_id: AtomicU64,
}

impl NodeClient {
    /// Create a client targeting `rpc_url` (e.g. `https://fullnode.devnet.sui.io:443`).
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| RpcError::Http(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            rpc_url: rpc_url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Send a JSON-RPC request and return its `result` field.
    async fn rpc_call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        tracing::debug!(method, id, "sending RPC request");

        let response = self.http.post(&self.rpc_url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(RpcError::Http(format!(
                "{method}: node returned HTTP {}",
                response.status()
            )));
        }

        let mut json: Value = response
            .json()
            .await
            .map_err(|e| RpcError::InvalidResponse(format!("{method}: {e}")))?;

        if let Some(err) = json.get("error") {
            return Err(RpcError::Node {
                code: err.get("code").and_then(Value::as_i64).unwrap_or(0),
                message: err
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        json.get_mut("result")
            .map(Value::take)
            .ok_or_else(|| RpcError::InvalidResponse(format!("{method}: missing result")))
    }

    async fn fetch_object(&self, id: &ObjectId) -> Result<wire::ParsedObject, RpcError> {
        let result = self
            .rpc_call("sui_getObject", json!([id.to_string()]))
            .await?;
        wire::parse_object(id, result)
    }
}

#[async_trait]
impl SuiApi for NodeClient {
    async fn get_gas(&self, owner: &SuiAddress) -> Result<Vec<GasObject>, RpcError> {
        let result = self
            .rpc_call("sui_getObjectsOwnedByAddress", json!([owner.to_string()]))
            .await?;
        let owned = wire::parse_owned_objects(result)?;

        let mut gas = Vec::new();
        for summary in owned.iter().filter(|o| o.object_type == GAS_COIN_TYPE) {
            let parsed = self.fetch_object(&summary.object_id).await?;
            gas.push(wire::gas_from_object(&parsed)?);
        }
        tracing::debug!(%owner, coins = gas.len(), "fetched gas coins");
        Ok(gas)
    }

    async fn get_object(&self, id: &ObjectId) -> Result<ObjectInfo, RpcError> {
        Ok(self.fetch_object(id).await?.info)
    }

    async fn get_transaction(
        &self,
        digest: &TransactionDigest,
    ) -> Result<TransactionEffects, RpcError> {
        let result = self
            .rpc_call("sui_getTransaction", json!([digest.as_str()]))
            .await
            .map_err(|e| match e {
                RpcError::Node { message, .. } if message.contains("not found") => {
                    RpcError::TransactionNotFound(digest.to_string())
                }
                other => other,
            })?;
        wire::parse_transaction(result)
    }

    async fn submit_call(
        &self,
        signer: &KeyPair,
        call: &MoveCall,
    ) -> Result<TransactionResult, RpcError> {
        let sender = signer.address();
        let result = self
            .rpc_call(
                "sui_moveCall",
                json!([
                    sender.to_string(),
                    call.package.to_string(),
                    call.module,
                    call.function,
                    call.type_arguments,
                    call.arguments,
                    call.gas.map(|g| g.to_string()),
                    call.gas_budget,
                ]),
            )
            .await?;
        let tx_bytes_b64 = wire::parse_tx_bytes(&result)?;
        let tx_bytes = STANDARD
            .decode(&tx_bytes_b64)
            .map_err(|e| RpcError::InvalidResponse(format!("txBytes: {e}")))?;

        let signature = signer.sign_serialized(&tx_bytes);
        let result = self
            .rpc_call(
                "sui_executeTransactionSerializedSig",
                json!([tx_bytes_b64, signature, EXECUTE_REQUEST_TYPE]),
            )
            .await?;

        let outcome = wire::parse_execute_result(result);
        tracing::info!(
            target_fn = %call.target(),
            %sender,
            ok = outcome.ok,
            digest = outcome.digest.as_ref().map(|d| d.as_str()).unwrap_or("-"),
            "move call executed"
        );
        Ok(outcome)
    }
}
