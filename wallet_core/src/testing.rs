//! Wallet fixtures shared by the unit tests.

use std::path::PathBuf;

use souffl3_crypto::{keypair_from_seed, KeyPair};
use souffl3_nullables::NullSuiApi;
use souffl3_types::ObjectId;

use crate::config::ClientConfig;
use crate::keystore::Keystore;
use crate::wallet::Wallet;

/// Gas coin given to the active address of [`funded_wallet`].
pub const GAS_COIN: ObjectId = ObjectId::new([0xee; 20]);

pub fn id(n: u8) -> ObjectId {
    ObjectId::new([n; 20])
}

/// A wallet over a nullable node whose active key holds one large gas coin.
pub fn funded_wallet() -> Wallet<NullSuiApi> {
    let mut keystore = Keystore::new();
    let active = keystore.add(KeyPair::from(keypair_from_seed(&[3u8; 32])));
    let config = ClientConfig {
        config_path: PathBuf::from("/tmp/client.yaml"),
        active_env: "devnet".to_string(),
        active_address: active.to_string(),
        keystore_path: PathBuf::from("/tmp/sui.keystore"),
        rpc_url: "https://x".to_string(),
    };
    let api = NullSuiApi::new();
    api.add_gas(active, GAS_COIN, 1_000_000);
    Wallet::new(config, keystore, api).expect("fixture address is valid")
}
