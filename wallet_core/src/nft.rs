//! NFT collection contract calls.

use souffl3_rpc::SuiApi;
use souffl3_types::{CallArg, MoveCall, ObjectId, TransactionResult};

use crate::contracts::NftContract;
use crate::error::WalletError;
use crate::wallet::Wallet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    /// `(key, value)` pairs, sent as two parallel vectors.
    pub attributes: Vec<(String, String)>,
}

pub struct NftClient<'a, A> {
    wallet: &'a Wallet<A>,
    contract: &'a NftContract,
}

impl<'a, A: SuiApi> NftClient<'a, A> {
    pub fn new(wallet: &'a Wallet<A>, contract: &'a NftContract) -> Self {
        Self { wallet, contract }
    }

    /// `mint_nft(name, description, url, keys, values, target)`.
    ///
    /// `target` is the collection object the mint is recorded against.
    pub fn mint_call(&self, metadata: &NftMetadata, target: &ObjectId) -> Result<MoveCall, WalletError> {
        if metadata.name.trim().is_empty() {
            return Err(WalletError::InvalidArgument("NFT name is empty".into()));
        }
        let (keys, values): (Vec<&str>, Vec<&str>) = metadata
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .unzip();

        Ok(MoveCall::new(
            self.contract.package,
            &self.contract.module,
            "mint_nft",
            self.contract.gas_budget,
        )
        .arg(CallArg::pure(&metadata.name))
        .arg(CallArg::pure(&metadata.description))
        .arg(CallArg::pure(&metadata.url))
        .arg(CallArg::vec(keys))
        .arg(CallArg::vec(values))
        .arg(CallArg::object(target)))
    }

    pub async fn mint_nft(
        &self,
        metadata: &NftMetadata,
        target: &ObjectId,
    ) -> Result<TransactionResult, WalletError> {
        let call = self.mint_call(metadata, target)?;
        self.wallet.execute(call).await
    }
}
