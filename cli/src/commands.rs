//! Subcommand handlers.

use std::path::Path;

use anyhow::{bail, Context};
use souffl3_crypto::{
    generate_keypair, generate_mnemonic, keypair_from_mnemonic, validate_mnemonic, KeyPair,
};
use souffl3_rpc::{NodeClient, SuiApi};
use souffl3_types::{TransactionDigest, TransactionResult};
use souffl3_utils::format_sui;
use souffl3_wallet_core::objects::{listing_objects, marketplace_object, nft_object, published_objects};
use souffl3_wallet_core::{
    ClientConfig, ContractsConfig, Keystore, LaunchpadClient, MarketClient, NftClient, NftMetadata,
    Purchase, SaleMint, Wallet,
};

use crate::{Command, CreatedKind, LaunchpadAction, MarketAction, NftAction};

pub async fn run(
    command: Command,
    config_path: &Path,
    contracts_path: Option<&Path>,
) -> anyhow::Result<()> {
    match command {
        Command::Config => show_config(config_path),
        Command::Keys => list_keys(config_path),
        Command::NewKey {
            mnemonic,
            phrase,
            account,
        } => new_key(config_path, mnemonic, phrase, account),
        Command::Sign { message, hex } => sign(config_path, &message, hex),
        Command::Gas => {
            let wallet = Wallet::open(config_path)?;
            let gases = wallet.gas().await?;
            if gases.is_empty() {
                println!("no gas coins for {}", wallet.active_address());
            }
            for gas in gases {
                println!("{}  {}  (v{})", gas.object_id, format_sui(gas.balance), gas.version);
            }
            Ok(())
        }
        Command::Object { id } => {
            let wallet = Wallet::open(config_path)?;
            let info = wallet.api().get_object(&id).await?;
            println!("id:      {}", info.object_id);
            println!("version: {}", info.version);
            println!("type:    {}", info.object_type);
            println!("owner:   {}", info.owner.kind());
            Ok(())
        }
        Command::Created { digest, kind } => {
            let wallet = Wallet::open(config_path)?;
            created(wallet.api(), &TransactionDigest::new(digest), kind).await
        }
        Command::Market { action } => {
            let wallet = Wallet::open(config_path)?;
            let contracts = load_contracts(contracts_path)?;
            let result = market(&wallet, &contracts, action).await?;
            report(&result);
            Ok(())
        }
        Command::Nft { action } => {
            let wallet = Wallet::open(config_path)?;
            let contracts = load_contracts(contracts_path)?;
            let NftAction::Mint {
                name,
                description,
                url,
                attributes,
                target,
            } = action;
            let metadata = NftMetadata {
                name,
                description,
                url,
                attributes,
            };
            let result = NftClient::new(&wallet, &contracts.nft)
                .mint_nft(&metadata, &target)
                .await?;
            report(&result);
            Ok(())
        }
        Command::Launchpad { action } => {
            let wallet = Wallet::open(config_path)?;
            let contracts = load_contracts(contracts_path)?;
            let LaunchpadAction::SaleMint {
                collection_type,
                coin_type,
                launchpad,
                sale_plan,
                plan_index,
                amount,
                signature,
                coins,
                clock,
            } = action;
            let mint = SaleMint {
                launchpad,
                sale_plan,
                plan_index,
                mint_amount: amount,
                signature: hex::decode(signature.trim_start_matches("0x"))
                    .context("--signature is not valid hex")?,
                wallet: coins,
                clock,
            };
            let result = LaunchpadClient::new(&wallet, &contracts.launchpad)
                .sale_mint(&collection_type, &coin_type, &mint)
                .await?;
            report(&result);
            Ok(())
        }
    }
}

fn load_contracts(path: Option<&Path>) -> anyhow::Result<ContractsConfig> {
    match path {
        Some(path) => {
            let contracts = ContractsConfig::from_toml_file(path)?;
            tracing::info!("Loaded contracts from {}", path.display());
            Ok(contracts)
        }
        None => Ok(ContractsConfig::default()),
    }
}

fn report(result: &TransactionResult) {
    match &result.digest {
        Some(digest) => println!("ok  {digest}"),
        None => println!("ok"),
    }
}

fn show_config(config_path: &Path) -> anyhow::Result<()> {
    let config = ClientConfig::from_file(config_path)?;
    let (path, env, address, keystore, rpc) = config.as_tuple();
    println!("config:         {}", path.display());
    println!("active_env:     {env}");
    println!("active_address: {address}");
    println!("keystore:       {}", keystore.display());
    println!("rpc:            {rpc}");
    Ok(())
}

fn list_keys(config_path: &Path) -> anyhow::Result<()> {
    let config = ClientConfig::from_file(config_path)?;
    let keystore = Keystore::load(&config.keystore_path)?;
    let active = config.active_address().ok();

    for kp in keystore.keys() {
        let address = kp.address();
        let marker = if Some(address) == active { "*" } else { " " };
        println!("{marker} {address}  {}", kp.scheme());
    }
    for rejected in keystore.rejected() {
        println!("! entry {}: {}", rejected.index, rejected.error);
    }
    Ok(())
}

fn new_key(
    config_path: &Path,
    mnemonic: bool,
    phrase: Option<String>,
    account: u32,
) -> anyhow::Result<()> {
    let config = ClientConfig::from_file(config_path)?;
    let mut keystore = if config.keystore_path.exists() {
        Keystore::load(&config.keystore_path)?
    } else {
        Keystore::new()
    };
    if !keystore.rejected().is_empty() {
        bail!(
            "{} has {} entries that cannot be decoded; refusing to rewrite it",
            config.keystore_path.display(),
            keystore.rejected().len()
        );
    }

    let keypair = if mnemonic {
        let phrase = match phrase {
            Some(phrase) if validate_mnemonic(&phrase) => phrase,
            Some(_) => bail!("--phrase is not a valid BIP-39 mnemonic"),
            None => {
                let phrase = generate_mnemonic()?;
                println!("mnemonic: {phrase}");
                phrase
            }
        };
        KeyPair::from(keypair_from_mnemonic(&phrase, account)?)
    } else {
        KeyPair::from(generate_keypair())
    };

    let before = keystore.len();
    let address = keystore.add(keypair);
    if keystore.len() == before {
        println!("{address} is already in the keystore");
        return Ok(());
    }
    keystore.save(&config.keystore_path)?;
    tracing::info!(%address, keystore = %config.keystore_path.display(), "added key");
    println!("{address}");
    Ok(())
}

fn sign(config_path: &Path, message: &str, is_hex: bool) -> anyhow::Result<()> {
    let config = ClientConfig::from_file(config_path)?;
    let keystore = Keystore::load(&config.keystore_path)?;
    let active = config.active_address()?;
    let Some(keypair) = keystore.find(&active) else {
        bail!("no key in {} for active address {active}", config.keystore_path.display());
    };

    let bytes = if is_hex {
        hex::decode(message.trim_start_matches("0x")).context("MESSAGE is not valid hex")?
    } else {
        message.as_bytes().to_vec()
    };
    println!("{}", keypair.sign_serialized(&bytes));
    Ok(())
}

async fn created(
    api: &NodeClient,
    digest: &TransactionDigest,
    kind: CreatedKind,
) -> anyhow::Result<()> {
    let print = |label: &str, id: Option<souffl3_types::ObjectId>| {
        if let Some(id) = id {
            println!("{label:<20}{id}");
        }
    };
    match kind {
        CreatedKind::Published => {
            let objs = published_objects(api, digest).await?;
            print("package_id", objs.package_id);
            print("mint_cap", objs.mint_cap);
            print("transfer_allowlist", objs.transfer_allowlist);
            print("collection", objs.collection);
        }
        CreatedKind::Marketplace => print("marketplace", marketplace_object(api, digest).await?),
        CreatedKind::Nft => print("nft", nft_object(api, digest).await?),
        CreatedKind::Listing => {
            let objs = listing_objects(api, digest).await?;
            print("listing", objs.listing);
            print("owner_cap", objs.owner_cap);
            print("safe", objs.safe);
        }
    }
    Ok(())
}

async fn market<A: SuiApi>(
    wallet: &Wallet<A>,
    contracts: &ContractsConfig,
    action: MarketAction,
) -> anyhow::Result<TransactionResult> {
    let market = MarketClient::new(wallet, &contracts.market);
    let result = match action {
        MarketAction::Create { fee_receiver, fee } => market.create_market(&fee_receiver, fee).await?,
        MarketAction::List {
            collection_type,
            coin_type,
            nft,
            price,
            marketplace,
        } => {
            market
                .list(&collection_type, &coin_type, &nft, price, &marketplace)
                .await?
        }
        MarketAction::Delist {
            collection_type,
            coin_type,
            listing,
            safe,
            allowlist,
        } => {
            market
                .delist(&collection_type, &coin_type, &listing, &safe, &allowlist)
                .await?
        }
        MarketAction::Buy {
            collection_type,
            coin_type,
            listing,
            safe,
            allowlist,
            marketplace,
            collection,
            coin,
        } => {
            let purchase = Purchase {
                listing,
                safe,
                allowlist,
                marketplace,
                collection,
                coin,
            };
            market.buy(&collection_type, &coin_type, &purchase).await?
        }
        MarketAction::ChangePrice {
            coin_type,
            listing,
            price,
        } => market.change_price(&coin_type, &listing, price).await?,
    };
    Ok(result)
}
