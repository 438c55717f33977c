//! Marketplace contract calls: create a marketplace, list, delist, buy and
//! reprice NFTs.
//!
//! Each operation has a `*_call` builder returning the [`MoveCall`] and an
//! async method that executes it through the wallet.

use souffl3_rpc::SuiApi;
use souffl3_types::{CallArg, MoveCall, ObjectId, SuiAddress, TransactionResult};

use crate::contracts::MarketContract;
use crate::error::WalletError;
use crate::wallet::Wallet;

/// Objects consumed by a `buy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub listing: ObjectId,
    pub safe: ObjectId,
    pub allowlist: ObjectId,
    pub marketplace: ObjectId,
    pub collection: ObjectId,
    /// Coin paying the listed price.
    pub coin: ObjectId,
}

pub struct MarketClient<'a, A> {
    wallet: &'a Wallet<A>,
    contract: &'a MarketContract,
}

/// Reject empty or unqualified Move type tags before they reach the node.
pub(crate) fn check_type_tag(tag: &str) -> Result<String, WalletError> {
    let tag = tag.trim();
    if tag.split("::").count() < 3 {
        return Err(WalletError::InvalidArgument(format!(
            "`{tag}` is not a fully qualified Move type (address::module::name)"
        )));
    }
    Ok(tag.to_string())
}

impl<'a, A: SuiApi> MarketClient<'a, A> {
    pub fn new(wallet: &'a Wallet<A>, contract: &'a MarketContract) -> Self {
        Self { wallet, contract }
    }

    fn market_call(&self, function: &str) -> MoveCall {
        MoveCall::new(
            self.contract.package,
            &self.contract.module,
            function,
            self.contract.gas_budget,
        )
    }

    pub fn create_market_call(&self, fee_receiver: &SuiAddress, fee: u64) -> MoveCall {
        MoveCall::new(
            self.contract.marketplace_package,
            &self.contract.marketplace_module,
            "create_market",
            self.contract.gas_budget,
        )
        .arg(CallArg::pure(fee_receiver))
        .arg(CallArg::pure(fee))
    }

    pub fn list_call(
        &self,
        collection_type: &str,
        coin_type: &str,
        nft: &ObjectId,
        price: u64,
        marketplace: &ObjectId,
    ) -> Result<MoveCall, WalletError> {
        Ok(self
            .market_call("list")
            .type_arg(check_type_tag(collection_type)?)
            .type_arg(check_type_tag(coin_type)?)
            .arg(CallArg::object(nft))
            .arg(CallArg::pure(price))
            .arg(CallArg::object(marketplace)))
    }

    pub fn delist_call(
        &self,
        collection_type: &str,
        coin_type: &str,
        listing: &ObjectId,
        safe: &ObjectId,
        allowlist: &ObjectId,
    ) -> Result<MoveCall, WalletError> {
        Ok(self
            .market_call("delist")
            .type_arg(check_type_tag(collection_type)?)
            .type_arg(check_type_tag(coin_type)?)
            .arg(CallArg::object(listing))
            .arg(CallArg::object(safe))
            .arg(CallArg::object(allowlist)))
    }

    pub fn buy_call(
        &self,
        collection_type: &str,
        coin_type: &str,
        purchase: &Purchase,
    ) -> Result<MoveCall, WalletError> {
        Ok(self
            .market_call("buy")
            .type_arg(check_type_tag(collection_type)?)
            .type_arg(check_type_tag(coin_type)?)
            .arg(CallArg::object(&purchase.listing))
            .arg(CallArg::object(&purchase.safe))
            .arg(CallArg::object(&purchase.allowlist))
            .arg(CallArg::object(&purchase.marketplace))
            .arg(CallArg::object(&purchase.collection))
            .arg(CallArg::object(&purchase.coin)))
    }

    pub fn change_price_call(
        &self,
        coin_type: &str,
        listing: &ObjectId,
        price: u64,
    ) -> Result<MoveCall, WalletError> {
        Ok(self
            .market_call("change_price")
            .type_arg(check_type_tag(coin_type)?)
            .arg(CallArg::object(listing))
            .arg(CallArg::pure(price)))
    }

    /// Create a marketplace charging `fee` to `fee_receiver`.
    pub async fn create_market(
        &self,
        fee_receiver: &SuiAddress,
        fee: u64,
    ) -> Result<TransactionResult, WalletError> {
        self.wallet
            .execute(self.create_market_call(fee_receiver, fee))
            .await
    }

    pub async fn list(
        &self,
        collection_type: &str,
        coin_type: &str,
        nft: &ObjectId,
        price: u64,
        marketplace: &ObjectId,
    ) -> Result<TransactionResult, WalletError> {
        let call = self.list_call(collection_type, coin_type, nft, price, marketplace)?;
        self.wallet.execute(call).await
    }

    pub async fn delist(
        &self,
        collection_type: &str,
        coin_type: &str,
        listing: &ObjectId,
        safe: &ObjectId,
        allowlist: &ObjectId,
    ) -> Result<TransactionResult, WalletError> {
        let call = self.delist_call(collection_type, coin_type, listing, safe, allowlist)?;
        self.wallet.execute(call).await
    }

    pub async fn buy(
        &self,
        collection_type: &str,
        coin_type: &str,
        purchase: &Purchase,
    ) -> Result<TransactionResult, WalletError> {
        let call = self.buy_call(collection_type, coin_type, purchase)?;
        self.wallet.execute(call).await
    }

    pub async fn change_price(
        &self,
        coin_type: &str,
        listing: &ObjectId,
        price: u64,
    ) -> Result<TransactionResult, WalletError> {
        let call = self.change_price_call(coin_type, listing, price)?;
        self.wallet.execute(call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{funded_wallet as wallet, id, GAS_COIN};

    const COLLECTION: &str = "0xbcae3b5adb19abf3cc3e0c693bf976ef86a87479::suimarines::SUIMARINES";
    const SUI: &str = "0x2::sui::SUI";

    #[test]
    fn list_call_shape() {
        let wallet = wallet();
        let contract = MarketContract::default();
        let market = MarketClient::new(&wallet, &contract);

        let call = market.list_call(COLLECTION, SUI, &id(1), 1000, &id(2)).unwrap();
        assert_eq!(call.package, contract.package);
        assert_eq!(call.module, "Market");
        assert_eq!(call.function, "list");
        assert_eq!(call.type_arguments, vec![COLLECTION.to_string(), SUI.to_string()]);
        assert_eq!(
            call.arguments,
            vec![CallArg::object(&id(1)), CallArg::pure("1000"), CallArg::object(&id(2))]
        );
        assert_eq!(call.gas_budget, 10_000);
    }

    #[test]
    fn create_market_uses_marketplace_package() {
        let wallet = wallet();
        let contract = MarketContract::default();
        let market = MarketClient::new(&wallet, &contract);
        let receiver = SuiAddress::new([0x8a; 20]);

        let call = market.create_market_call(&receiver, 1000);
        assert_eq!(call.package, contract.marketplace_package);
        assert_eq!(call.module, "marketplace");
        assert!(call.type_arguments.is_empty());
        assert_eq!(call.arguments[0], CallArg::pure(receiver));
    }

    #[test]
    fn change_price_takes_only_coin_type() {
        let wallet = wallet();
        let contract = MarketContract::default();
        let call = MarketClient::new(&wallet, &contract)
            .change_price_call(SUI, &id(7), 10_000)
            .unwrap();
        assert_eq!(call.type_arguments, vec![SUI.to_string()]);
        assert_eq!(call.arguments.len(), 2);
    }

    #[test]
    fn rejects_unqualified_type_tags() {
        let wallet = wallet();
        let contract = MarketContract::default();
        let market = MarketClient::new(&wallet, &contract);
        assert!(matches!(
            market.delist_call("SUIMARINES", SUI, &id(1), &id(2), &id(3)),
            Err(WalletError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn buy_submits_six_objects() {
        let wallet = wallet();
        let contract = MarketContract::default();
        let market = MarketClient::new(&wallet, &contract);
        let purchase = Purchase {
            listing: id(1),
            safe: id(2),
            allowlist: id(3),
            marketplace: id(4),
            collection: id(5),
            coin: id(6),
        };

        market.buy(COLLECTION, SUI, &purchase).await.unwrap();

        let submitted = wallet.api().submitted();
        assert_eq!(submitted.len(), 1);
        let call = &submitted[0].call;
        assert_eq!(call.function, "buy");
        assert_eq!(call.arguments.len(), 6);
        assert_eq!(call.arguments[5], CallArg::object(&id(6)));
        assert_eq!(call.gas, Some(GAS_COIN));
    }

    #[tokio::test]
    async fn payment_coin_is_not_spent_as_gas() {
        let wallet = wallet();
        let contract = MarketContract::default();
        let purchase = Purchase {
            listing: id(1),
            safe: id(2),
            allowlist: id(3),
            marketplace: id(4),
            collection: id(5),
            coin: GAS_COIN,
        };

        let err = MarketClient::new(&wallet, &contract)
            .buy(COLLECTION, SUI, &purchase)
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::InsufficientGas { .. }));
        assert!(wallet.api().submitted().is_empty());

        wallet.api().add_gas(wallet.active_address(), id(0xab), 1_000_000);
        MarketClient::new(&wallet, &contract)
            .buy(COLLECTION, SUI, &purchase)
            .await
            .unwrap();
        let call = &wallet.api().submitted()[0].call;
        assert_eq!(call.gas, Some(id(0xab)));
        assert_eq!(call.arguments[5], CallArg::object(&GAS_COIN));
    }
}
