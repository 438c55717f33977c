//! The wallet: a client configuration, its keystore and a node handle.
//!
//! Nothing here is global. Every collaborator is passed in, so tests build a
//! wallet over an in-memory node and the CLI builds one over [`NodeClient`].

use std::path::Path;

use souffl3_crypto::KeyPair;
use souffl3_rpc::{NodeClient, SuiApi};
use souffl3_types::{GasObject, MoveCall, SuiAddress, TransactionResult};

use crate::config::ClientConfig;
use crate::error::WalletError;
use crate::gas::select_gas;
use crate::keystore::Keystore;

pub struct Wallet<A> {
    config: ClientConfig,
    keystore: Keystore,
    api: A,
    active_address: SuiAddress,
}

impl Wallet<NodeClient> {
    /// Load `client.yaml`, its keystore, and connect to the active env's RPC url.
    pub fn open(config_path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let config = ClientConfig::from_file(config_path)?;
        let keystore = Keystore::load(&config.keystore_path)?;
        let api = NodeClient::new(config.rpc_url.clone())?;
        tracing::info!(
            env = %config.active_env,
            rpc = %config.rpc_url,
            keys = keystore.len(),
            "wallet opened"
        );
        Self::new(config, keystore, api)
    }
}

impl<A: SuiApi> Wallet<A> {
    pub fn new(config: ClientConfig, keystore: Keystore, api: A) -> Result<Self, WalletError> {
        let active_address = config.active_address()?;
        Ok(Self {
            config,
            keystore,
            api,
            active_address,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn keystore(&self) -> &Keystore {
        &self.keystore
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn active_address(&self) -> SuiAddress {
        self.active_address
    }

    /// The key pair whose derived address is the active address.
    pub fn active_keypair(&self) -> Result<&KeyPair, WalletError> {
        self.keystore
            .find(&self.active_address)
            .ok_or(WalletError::ActiveKeyNotFound(self.active_address))
    }

    /// Gas coins owned by the active address.
    pub async fn gas(&self) -> Result<Vec<GasObject>, WalletError> {
        Ok(self.api.get_gas(&self.active_address).await?)
    }

    /// Sign with the active key and execute `call`.
    ///
    /// When the call names no gas coin, the first coin covering its budget is
    /// used. Coins the call already takes as arguments are never picked.
    pub async fn execute(&self, mut call: MoveCall) -> Result<TransactionResult, WalletError> {
        let signer = self.active_keypair()?;

        if call.gas.is_none() {
            let gases: Vec<GasObject> = self
                .gas()
                .await?
                .into_iter()
                .filter(|gas| !call.uses_object(&gas.object_id))
                .collect();
            let gas = select_gas(&gases, call.gas_budget)?;
            tracing::debug!(gas = %gas.object_id, balance = gas.balance, "selected gas coin");
            call.gas = Some(gas.object_id);
        }

        let result = self.api.submit_call(signer, &call).await?;
        if !result.is_ok() {
            let detail = result
                .data
                .pointer("/effects/status/error")
                .or_else(|| result.data.pointer("/effects/effects/status/error"))
                .and_then(|v| v.as_str())
                .unwrap_or("execution failed")
                .to_string();
            tracing::warn!(target_fn = %call.target(), %detail, "move call rejected");
            return Err(WalletError::CallRejected {
                target: call.target(),
                detail,
            });
        }
        Ok(result)
    }
}
