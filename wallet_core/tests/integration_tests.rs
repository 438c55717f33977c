//! End-to-end wallet flows over files on disk and a nullable node:
//! client.yaml + sui.keystore → Wallet → marketplace calls → created objects.

use souffl3_crypto::{keypair_from_seed, KeyPair};
use souffl3_nullables::NullSuiApi;
use souffl3_types::{ObjectId, Owner, TransactionDigest};
use souffl3_wallet_core::market::Purchase;
use souffl3_wallet_core::objects::{listing_objects, marketplace_object};
use souffl3_wallet_core::{
    ClientConfig, ConfigError, ContractsConfig, Keystore, MarketClient, Wallet, WalletError,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const COLLECTION: &str = "0xbcae3b5adb19abf3cc3e0c693bf976ef86a87479::suimarines::SUIMARINES";
const SUI: &str = "0x2::sui::SUI";

fn id(n: u8) -> ObjectId {
    ObjectId::new([n; 20])
}

fn keypair(seed: u8) -> KeyPair {
    KeyPair::from(keypair_from_seed(&[seed; 32]))
}

/// Write a client.yaml whose active address is `keypair(active_seed)` and a
/// keystore holding seeds 1 and 2 plus one corrupt entry.
fn write_sui_config(dir: &std::path::Path, active_seed: u8) -> std::path::PathBuf {
    let keystore = serde_json::to_string(&[
        keypair(1).to_keystring(),
        "not-a-key".to_string(),
        keypair(2).to_keystring(),
    ])
    .unwrap();
    std::fs::write(dir.join("sui.keystore"), keystore).unwrap();

    let yaml = format!(
        r#"---
keystore:
  File: /home/someone-else/.sui/sui_config/sui.keystore
envs:
  - alias: devnet
    rpc: "https://fullnode.devnet.sui.io:443"
    ws: ~
active_env: devnet
active_address: "{}"
"#,
        keypair(active_seed).address()
    );
    let path = dir.join("client.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

fn open_wallet(config_path: &std::path::Path) -> Wallet<NullSuiApi> {
    let config = ClientConfig::from_file(config_path).unwrap();
    let keystore = Keystore::load(&config.keystore_path).unwrap();
    Wallet::new(config, keystore, NullSuiApi::new()).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Configuration and keystore on disk
// ---------------------------------------------------------------------------

#[test]
fn loads_config_and_keystore_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sui_config(dir.path(), 2);

    let config = ClientConfig::from_file(&path).unwrap();
    assert_eq!(config.keystore_path, dir.path().join("sui.keystore"));
    assert_eq!(config.rpc_url, "https://fullnode.devnet.sui.io:443");

    let keystore = Keystore::load(&config.keystore_path).unwrap();
    assert_eq!(keystore.len(), 2);
    assert_eq!(keystore.rejected().len(), 1);
    assert_eq!(keystore.rejected()[0].index, 1);

    let wallet = Wallet::new(config, keystore, NullSuiApi::new()).unwrap();
    assert_eq!(wallet.active_keypair().unwrap().address(), keypair(2).address());
}

#[test]
fn active_address_without_key_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sui_config(dir.path(), 42);
    let wallet = open_wallet(&path);
    assert!(matches!(
        wallet.active_keypair(),
        Err(WalletError::ActiveKeyNotFound(_))
    ));
}

#[test]
fn missing_keystore_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sui_config(dir.path(), 2);
    std::fs::remove_file(dir.path().join("sui.keystore")).unwrap();

    let config = ClientConfig::from_file(&path).unwrap();
    assert!(matches!(
        Keystore::load(&config.keystore_path),
        Err(WalletError::Keystore { .. })
    ));
}

#[test]
fn contracts_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("souffl3.toml");
    std::fs::write(&path, "[market]\ngas_budget = 30000\n").unwrap();

    let contracts = ContractsConfig::from_toml_file(&path).unwrap();
    assert_eq!(contracts.market.gas_budget, 30_000);
    assert_eq!(contracts.nft, ContractsConfig::default().nft);

    std::fs::write(&path, "[market\n").unwrap();
    assert!(matches!(
        ContractsConfig::from_toml_file(&path),
        Err(ConfigError::Toml { .. })
    ));
}

// ---------------------------------------------------------------------------
// 2. Marketplace flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_list_and_buy() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = open_wallet(&write_sui_config(dir.path(), 2));
    let contracts = ContractsConfig::default();
    let api = wallet.api();
    api.add_gas(wallet.active_address(), id(0xee), 200_000);

    let market = MarketClient::new(&wallet, &contracts.market);

    // create_market → marketplace id from the created objects
    let created = market
        .create_market(&keypair(1).address(), 1000)
        .await
        .unwrap();
    let digest = created.digest.clone().unwrap();
    api.add_transaction(digest.clone(), vec![(id(0x6d), Owner::Shared { initial_shared_version: Some(3) })]);
    let marketplace = marketplace_object(api, &digest).await.unwrap().unwrap();
    assert_eq!(marketplace, id(0x6d));

    // list → listing / safe / owner cap
    let listed = market
        .list(COLLECTION, SUI, &id(0x25), 1000, &marketplace)
        .await
        .unwrap();
    let digest = listed.digest.unwrap();
    api.add_object(id(0xa2), "0xc3::Market::Listing<0x2::sui::SUI>", Owner::Shared { initial_shared_version: Some(4) });
    api.add_object(id(0x44), "0x1::safe::Safe", Owner::Shared { initial_shared_version: Some(4) });
    api.add_object(id(0x8c), "0x1::safe::OwnerCap", Owner::AddressOwner(wallet.active_address()));
    api.add_transaction(digest.clone(), vec![(id(0xa2), Owner::Immutable), (id(0x44), Owner::Immutable), (id(0x8c), Owner::Immutable)]);
    let objs = listing_objects(api, &digest).await.unwrap();

    let purchase = Purchase {
        listing: objs.listing.unwrap(),
        safe: objs.safe.unwrap(),
        allowlist: id(0xff),
        marketplace,
        collection: id(0x30),
        coin: id(0xee),
    };
    market.buy(COLLECTION, SUI, &purchase).await.unwrap();

    let functions: Vec<_> = api.submitted().into_iter().map(|s| s.call.function).collect();
    assert_eq!(functions, ["create_market", "list", "buy"]);
    assert!(api
        .submitted()
        .iter()
        .all(|s| s.sender == wallet.active_address()));
}

#[tokio::test]
async fn failed_listing_does_not_hide_error() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = open_wallet(&write_sui_config(dir.path(), 2));
    wallet.api().add_gas(wallet.active_address(), id(0xee), 200_000);
    wallet.api().fail_next_call("InsufficientGas");

    let contracts = ContractsConfig::default();
    let err = MarketClient::new(&wallet, &contracts.market)
        .list(COLLECTION, SUI, &id(1), 1000, &id(2))
        .await
        .unwrap_err();
    assert!(matches!(err, WalletError::CallRejected { .. }));

    // the digest of a rejected call was never recorded
    assert!(listing_objects(wallet.api(), &TransactionDigest::new("null-tx-1"))
        .await
        .is_err());
}
