//! Conversion of raw node responses into the typed data model.
//!
//! Kept free of I/O so each response shape can be tested from fixtures.

use serde::Deserialize;
use serde_json::Value;
use souffl3_types::{
    GasObject, ObjectId, ObjectInfo, ObjectRef, Owner, TransactionDigest, TransactionEffects,
    TransactionResult,
};

use crate::error::RpcError;

fn invalid(what: &str, e: impl std::fmt::Display) -> RpcError {
    RpcError::InvalidResponse(format!("{what}: {e}"))
}

/// Entry of `sui_getObjectsOwnedByAddress`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObjectSummary {
    pub object_id: ObjectId,
    pub version: u64,
    pub digest: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

#[derive(Deserialize)]
struct ObjectDetails {
    data: ObjectData,
    owner: Owner,
    reference: ObjectRef,
}

#[derive(Deserialize)]
struct ObjectData {
    #[serde(rename = "type")]
    object_type: String,
    #[serde(default)]
    fields: Value,
}

/// Result of `sui_getObject`, with the coin balance when the object has one.
pub struct ParsedObject {
    pub info: ObjectInfo,
    pub reference: ObjectRef,
    pub balance: Option<u64>,
}

/// Parse a `sui_getObject` result.
///
/// `{"status": "Exists", "details": {"data": {"type": .., "fields": ..}, "owner": .., "reference": ..}}`
pub fn parse_object(id: &ObjectId, result: Value) -> Result<ParsedObject, RpcError> {
    let status = result
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("sui_getObject", "missing status"))?;
    if status != "Exists" {
        return Err(RpcError::ObjectNotFound(format!("{id} ({status})")));
    }

    let details = result
        .get("details")
        .cloned()
        .ok_or_else(|| invalid("sui_getObject", "missing details"))?;
    let details: ObjectDetails =
        serde_json::from_value(details).map_err(|e| invalid("sui_getObject details", e))?;

    let balance = details.data.fields.get("balance").and_then(|b| match b {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    });

    Ok(ParsedObject {
        info: ObjectInfo {
            object_id: details.reference.object_id,
            version: details.reference.version,
            object_type: details.data.object_type,
            owner: details.owner,
        },
        reference: details.reference,
        balance,
    })
}

/// Parse a `sui_getObjectsOwnedByAddress` result.
pub fn parse_owned_objects(result: Value) -> Result<Vec<OwnedObjectSummary>, RpcError> {
    serde_json::from_value(result).map_err(|e| invalid("sui_getObjectsOwnedByAddress", e))
}

/// Build a gas descriptor from a fetched coin object.
pub fn gas_from_object(parsed: &ParsedObject) -> Result<GasObject, RpcError> {
    let balance = parsed.balance.ok_or_else(|| {
        invalid(
            "gas coin",
            format!("{} has no balance field", parsed.info.object_id),
        )
    })?;
    Ok(GasObject {
        object_id: parsed.reference.object_id,
        version: parsed.reference.version,
        digest: parsed.reference.digest.clone(),
        balance,
    })
}

/// Parse a `sui_getTransaction` result: `{"certificate": .., "effects": {..}}`.
pub fn parse_transaction(result: Value) -> Result<TransactionEffects, RpcError> {
    let effects = result
        .get("effects")
        .cloned()
        .ok_or_else(|| invalid("sui_getTransaction", "missing effects"))?;
    serde_json::from_value(effects).map_err(|e| invalid("sui_getTransaction effects", e))
}

/// Extract `txBytes` from a `sui_moveCall` result.
pub fn parse_tx_bytes(result: &Value) -> Result<String, RpcError> {
    result
        .get("txBytes")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| invalid("sui_moveCall", "missing txBytes"))
}

/// Where different node versions nest the effects in an execute response.
const EFFECTS_POINTERS: [&str; 3] = ["/EffectsCert/effects/effects", "/effects/effects", "/effects"];

/// Interpret a `sui_executeTransactionSerializedSig` result.
pub fn parse_execute_result(result: Value) -> TransactionResult {
    let effects: Option<TransactionEffects> = EFFECTS_POINTERS
        .iter()
        .filter_map(|ptr| result.pointer(ptr))
        .find(|v| v.get("status").is_some())
        .and_then(|v| serde_json::from_value(v.clone()).ok());

    let digest = effects
        .as_ref()
        .and_then(|e| e.transaction_digest.clone())
        .or_else(|| {
            result
                .pointer("/EffectsCert/certificate/transactionDigest")
                .and_then(Value::as_str)
                .map(TransactionDigest::new)
        });

    TransactionResult {
        ok: effects.as_ref().is_some_and(|e| e.status.is_success()),
        digest,
        data: result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COIN_ID: &str = "0xe54f5d1a42e72fd8ac37bfea2c1641e6fd5a5131";

    fn coin_object() -> Value {
        json!({
            "status": "Exists",
            "details": {
                "data": {
                    "dataType": "moveObject",
                    "type": "0x2::coin::Coin<0x2::sui::SUI>",
                    "fields": {"balance": 50000, "id": {"id": COIN_ID}}
                },
                "owner": {"AddressOwner": "0x80cbaa216ad42f58afd3cad49c65e3512bfb87e4"},
                "previousTransaction": "3nQ1Ytc5",
                "reference": {"objectId": COIN_ID, "version": 4, "digest": "dGVzdA=="}
            }
        })
    }

    #[test]
    fn parses_existing_object() {
        let id: ObjectId = COIN_ID.parse().unwrap();
        let parsed = parse_object(&id, coin_object()).unwrap();
        assert!(parsed.info.is_gas_coin());
        assert_eq!(parsed.info.version, 4);
        assert_eq!(parsed.balance, Some(50000));

        let gas = gas_from_object(&parsed).unwrap();
        assert_eq!(gas.object_id, id);
        assert_eq!(gas.balance, 50000);
    }

    #[test]
    fn string_balance_accepted() {
        let mut obj = coin_object();
        obj["details"]["data"]["fields"]["balance"] = json!("123");
        let id: ObjectId = COIN_ID.parse().unwrap();
        assert_eq!(parse_object(&id, obj).unwrap().balance, Some(123));
    }

    #[test]
    fn deleted_object_is_not_found() {
        let id: ObjectId = COIN_ID.parse().unwrap();
        let err = parse_object(&id, json!({"status": "Deleted", "details": {}}))
            .err()
            .unwrap();
        assert!(matches!(err, RpcError::ObjectNotFound(_)));
    }

    #[test]
    fn parses_owned_objects() {
        let list = parse_owned_objects(json!([{
            "objectId": COIN_ID,
            "version": 4,
            "digest": "dGVzdA==",
            "type": "0x2::coin::Coin<0x2::sui::SUI>",
            "owner": {"AddressOwner": "0x80cbaa216ad42f58afd3cad49c65e3512bfb87e4"},
            "previousTransaction": "3nQ1Ytc5"
        }]))
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].object_type, "0x2::coin::Coin<0x2::sui::SUI>");
    }

    #[test]
    fn parses_transaction_effects() {
        let effects = parse_transaction(json!({
            "certificate": {"transactionDigest": "HjFGATwR"},
            "effects": {
                "status": {"status": "success"},
                "transactionDigest": "HjFGATwR",
                "created": [{
                    "owner": "Immutable",
                    "reference": {"objectId": "0xc3068e837c975ae949bffc00221c686785d09568", "version": 1, "digest": "x"}
                }]
            }
        }))
        .unwrap();
        assert_eq!(effects.created.len(), 1);
        assert_eq!(effects.transaction_digest, Some(TransactionDigest::new("HjFGATwR")));
    }

    #[test]
    fn execute_result_success_and_failure() {
        let ok = parse_execute_result(json!({
            "EffectsCert": {
                "certificate": {"transactionDigest": "AM8rD48r"},
                "effects": {"effects": {"status": {"status": "success"}}}
            }
        }));
        assert!(ok.is_ok());
        assert_eq!(ok.digest, Some(TransactionDigest::new("AM8rD48r")));

        let failed = parse_execute_result(json!({
            "effects": {"status": {"status": "failure", "error": "InsufficientGas"}}
        }));
        assert!(!failed.is_ok());

        let empty = parse_execute_result(json!({"TxCert": {}}));
        assert!(!empty.is_ok());
        assert!(empty.digest.is_none());
    }

    #[test]
    fn missing_tx_bytes_is_invalid() {
        assert!(parse_tx_bytes(&json!({"gas": {}})).is_err());
        assert_eq!(parse_tx_bytes(&json!({"txBytes": "AAEC"})).unwrap(), "AAEC");
    }
}
