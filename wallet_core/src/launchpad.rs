//! Launchpad contract calls: stock a launchpad's warehouse and mint from a
//! sale plan.

use souffl3_rpc::SuiApi;
use souffl3_types::{CallArg, MoveCall, ObjectId, TransactionResult};

use crate::contracts::LaunchpadContract;
use crate::error::WalletError;
use crate::market::check_type_tag;
use crate::wallet::Wallet;

/// NFT metadata to load into a warehouse, one entry per NFT in
/// `names`, `urls` and `symbols`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseBatch {
    pub names: Vec<String>,
    pub urls: Vec<String>,
    pub symbols: Vec<String>,
    pub attr_keys: Vec<String>,
    pub attr_values: Vec<String>,
}

impl WarehouseBatch {
    fn validate(&self) -> Result<(), WalletError> {
        if self.names.is_empty() {
            return Err(WalletError::InvalidArgument("warehouse batch is empty".into()));
        }
        if self.urls.len() != self.names.len() || self.symbols.len() != self.names.len() {
            return Err(WalletError::InvalidArgument(format!(
                "warehouse batch lengths differ: {} names, {} urls, {} symbols",
                self.names.len(),
                self.urls.len(),
                self.symbols.len()
            )));
        }
        if self.attr_keys.len() != self.attr_values.len() {
            return Err(WalletError::InvalidArgument(format!(
                "{} attribute keys but {} values",
                self.attr_keys.len(),
                self.attr_values.len()
            )));
        }
        Ok(())
    }

    fn push_args(&self, call: MoveCall) -> MoveCall {
        call.arg(CallArg::vec(&self.names))
            .arg(CallArg::vec(&self.urls))
            .arg(CallArg::vec(&self.symbols))
            .arg(CallArg::vec(&self.attr_keys))
            .arg(CallArg::vec(&self.attr_values))
    }
}

/// Arguments of `port::sale_mint`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleMint {
    pub launchpad: ObjectId,
    pub sale_plan: ObjectId,
    pub plan_index: u64,
    pub mint_amount: u64,
    /// Whitelist signature bytes issued for this buyer; empty for public sales.
    pub signature: Vec<u8>,
    /// Coins paying for the mint.
    pub wallet: Vec<ObjectId>,
    /// The shared clock object.
    pub clock: ObjectId,
}

pub struct LaunchpadClient<'a, A> {
    wallet: &'a Wallet<A>,
    contract: &'a LaunchpadContract,
}

impl<'a, A: SuiApi> LaunchpadClient<'a, A> {
    pub fn new(wallet: &'a Wallet<A>, contract: &'a LaunchpadContract) -> Self {
        Self { wallet, contract }
    }

    fn call(&self, module: &str, function: &str) -> MoveCall {
        MoveCall::new(self.contract.package, module, function, self.contract.gas_budget)
    }

    pub fn filling_warehouse_by_creator_call(
        &self,
        admin_cap: &ObjectId,
        collection_type: &str,
        launchpad: &ObjectId,
        batch: &WarehouseBatch,
    ) -> Result<MoveCall, WalletError> {
        batch.validate()?;
        let call = self
            .call(&self.contract.admin_module, "filling_warehouse_by_creator")
            .type_arg(check_type_tag(collection_type)?)
            .arg(CallArg::object(admin_cap))
            .arg(CallArg::object(launchpad));
        Ok(batch.push_args(call))
    }

    pub fn filling_warehouse_by_admin_call(
        &self,
        permission: &ObjectId,
        collection_type: &str,
        launchpad: &ObjectId,
        batch: &WarehouseBatch,
    ) -> Result<MoveCall, WalletError> {
        batch.validate()?;
        let call = self
            .call(&self.contract.admin_module, "filling_warehouse_by_admin")
            .type_arg(check_type_tag(collection_type)?)
            .arg(CallArg::object(launchpad));
        Ok(batch.push_args(call).arg(CallArg::object(permission)))
    }

    pub fn sale_mint_call(
        &self,
        collection_type: &str,
        coin_type: &str,
        mint: &SaleMint,
    ) -> Result<MoveCall, WalletError> {
        if mint.mint_amount == 0 {
            return Err(WalletError::InvalidArgument("mint amount must be positive".into()));
        }
        if mint.wallet.is_empty() {
            return Err(WalletError::InvalidArgument("no payment coins given".into()));
        }
        Ok(self
            .call(&self.contract.port_module, "sale_mint")
            .type_arg(check_type_tag(collection_type)?)
            .type_arg(check_type_tag(coin_type)?)
            .arg(CallArg::object(&mint.launchpad))
            .arg(CallArg::object(&mint.sale_plan))
            .arg(CallArg::pure(mint.plan_index))
            .arg(CallArg::pure(mint.mint_amount))
            .arg(CallArg::vec(&mint.signature))
            .arg(CallArg::vec(&mint.wallet))
            .arg(CallArg::object(&mint.clock)))
    }

    /// Load a batch of NFTs into the launchpad warehouse as the collection creator.
    pub async fn filling_warehouse_by_creator(
        &self,
        admin_cap: &ObjectId,
        collection_type: &str,
        launchpad: &ObjectId,
        batch: &WarehouseBatch,
    ) -> Result<TransactionResult, WalletError> {
        let call =
            self.filling_warehouse_by_creator_call(admin_cap, collection_type, launchpad, batch)?;
        self.wallet.execute(call).await
    }

    /// Load a batch of NFTs using a permission granted by the launchpad admin.
    pub async fn filling_warehouse_by_admin(
        &self,
        permission: &ObjectId,
        collection_type: &str,
        launchpad: &ObjectId,
        batch: &WarehouseBatch,
    ) -> Result<TransactionResult, WalletError> {
        let call =
            self.filling_warehouse_by_admin_call(permission, collection_type, launchpad, batch)?;
        self.wallet.execute(call).await
    }

    pub async fn sale_mint(
        &self,
        collection_type: &str,
        coin_type: &str,
        mint: &SaleMint,
    ) -> Result<TransactionResult, WalletError> {
        let call = self.sale_mint_call(collection_type, coin_type, mint)?;
        self.wallet.execute(call).await
    }
}
