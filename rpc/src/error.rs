//! RPC error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("node error {code}: {message}")]
    Node { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("object not found: {0}")]
    ObjectNotFound(String),

    #[error("transaction not found: {0}")]
    TransactionNotFound(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(e: reqwest::Error) -> Self {
        RpcError::Http(e.to_string())
    }
}
