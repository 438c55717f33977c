//! Move call descriptors and transaction results.

use serde::{Deserialize, Serialize};

use crate::address::{ObjectId, TransactionDigest};

/// A single argument to a Move entry function.
///
/// The node accepts pure values and object ids as JSON strings and vector
/// arguments as JSON arrays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallArg {
    Pure(String),
    Vec(Vec<String>),
}

impl CallArg {
    pub fn pure(value: impl ToString) -> Self {
        CallArg::Pure(value.to_string())
    }

    pub fn object(id: &ObjectId) -> Self {
        CallArg::Pure(id.to_string())
    }

    pub fn vec<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        CallArg::Vec(values.into_iter().map(|v| v.to_string()).collect())
    }
}

/// A call to a Move entry function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCall {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
    #[serde(default)]
    pub type_arguments: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<CallArg>,
    /// Gas coin to pay with; chosen by the wallet when `None`.
    #[serde(default)]
    pub gas: Option<ObjectId>,
    pub gas_budget: u64,
}

impl MoveCall {
    pub fn new(
        package: ObjectId,
        module: impl Into<String>,
        function: impl Into<String>,
        gas_budget: u64,
    ) -> Self {
        Self {
            package,
            module: module.into(),
            function: function.into(),
            type_arguments: Vec::new(),
            arguments: Vec::new(),
            gas: None,
            gas_budget,
        }
    }

    pub fn type_arg(mut self, type_tag: impl Into<String>) -> Self {
        self.type_arguments.push(type_tag.into());
        self
    }

    pub fn arg(mut self, arg: CallArg) -> Self {
        self.arguments.push(arg);
        self
    }

    pub fn with_gas(mut self, gas: ObjectId) -> Self {
        self.gas = Some(gas);
        self
    }

    /// Whether `id` is passed as an argument, alone or inside a vector.
    pub fn uses_object(&self, id: &ObjectId) -> bool {
        let id = id.to_string();
        self.arguments.iter().any(|arg| match arg {
            CallArg::Pure(value) => *value == id,
            CallArg::Vec(values) => values.contains(&id),
        })
    }

    /// `package::module::function`, for logs.
    pub fn target(&self) -> String {
        format!("{}::{}::{}", self.package, self.module, self.function)
    }
}

/// Outcome of a submitted transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub ok: bool,
    #[serde(default)]
    pub digest: Option<TransactionDigest>,
    /// Raw node response.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl TransactionResult {
    pub fn is_ok(&self) -> bool {
        self.ok
    }
}
