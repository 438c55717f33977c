//! souffl3: command-line wallet for the souffl3 marketplace, launchpad and
//! NFT collection contracts on Sui.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use souffl3_types::{ObjectId, SuiAddress};
use souffl3_utils::LogFormat;

const SUI_COIN: &str = "0x2::sui::SUI";

#[derive(Parser)]
#[command(name = "souffl3", version, about = "souffl3 wallet and contract tool")]
struct Cli {
    /// Sui client configuration. Defaults to `$HOME/.sui/sui_config/client.yaml`.
    #[arg(long, env = "SOUFFL3_CONFIG")]
    config: Option<PathBuf>,

    /// TOML file with contract package ids and gas budgets.
    /// Devnet deployments are used when omitted.
    #[arg(long, env = "SOUFFL3_CONTRACTS")]
    contracts: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error". `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info", env = "SOUFFL3_LOG_LEVEL")]
    log_level: String,

    /// Log output format: "human" or "json".
    #[arg(long, default_value = "human", env = "SOUFFL3_LOG_FORMAT")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show the resolved client configuration.
    Config,
    /// List keystore addresses.
    Keys,
    /// Create a key and add it to the keystore.
    NewKey {
        /// Derive the key from a BIP-39 mnemonic instead of OS randomness.
        #[arg(long)]
        mnemonic: bool,
        /// Existing phrase to recover from; a new one is generated when omitted.
        #[arg(long, requires = "mnemonic")]
        phrase: Option<String>,
        /// Account index in `m/44'/784'/0'/0'/{index}'`.
        #[arg(long, default_value_t = 0)]
        account: u32,
    },
    /// Sign a message with the active key and print the serialized signature.
    Sign {
        message: String,
        /// Treat MESSAGE as hex-encoded bytes.
        #[arg(long)]
        hex: bool,
    },
    /// List gas coins of the active address.
    Gas,
    /// Show an object's type and owner.
    Object { id: ObjectId },
    /// Find the objects created by a transaction.
    Created {
        digest: String,
        #[arg(long, value_enum)]
        kind: CreatedKind,
    },
    /// Marketplace calls.
    Market {
        #[command(subcommand)]
        action: MarketAction,
    },
    /// NFT collection calls.
    Nft {
        #[command(subcommand)]
        action: NftAction,
    },
    /// Launchpad calls.
    Launchpad {
        #[command(subcommand)]
        action: LaunchpadAction,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CreatedKind {
    /// Package, mint cap, transfer allowlist and collection of a publish.
    Published,
    /// Marketplace created by `market create`.
    Marketplace,
    /// NFT created by a mint.
    Nft,
    /// Listing, safe and owner cap created by `market list`.
    Listing,
}

#[derive(clap::Subcommand)]
enum MarketAction {
    /// Create a marketplace.
    Create {
        #[arg(long)]
        fee_receiver: SuiAddress,
        #[arg(long)]
        fee: u64,
    },
    /// List an NFT for sale.
    List {
        #[arg(long)]
        collection_type: String,
        #[arg(long, default_value = SUI_COIN)]
        coin_type: String,
        #[arg(long)]
        nft: ObjectId,
        #[arg(long)]
        price: u64,
        #[arg(long)]
        marketplace: ObjectId,
    },
    /// Withdraw a listing.
    Delist {
        #[arg(long)]
        collection_type: String,
        #[arg(long, default_value = SUI_COIN)]
        coin_type: String,
        #[arg(long)]
        listing: ObjectId,
        #[arg(long)]
        safe: ObjectId,
        #[arg(long)]
        allowlist: ObjectId,
    },
    /// Buy a listed NFT.
    Buy {
        #[arg(long)]
        collection_type: String,
        #[arg(long, default_value = SUI_COIN)]
        coin_type: String,
        #[arg(long)]
        listing: ObjectId,
        #[arg(long)]
        safe: ObjectId,
        #[arg(long)]
        allowlist: ObjectId,
        #[arg(long)]
        marketplace: ObjectId,
        #[arg(long)]
        collection: ObjectId,
        /// Coin paying the price.
        #[arg(long)]
        coin: ObjectId,
    },
    /// Change the price of a listing.
    ChangePrice {
        #[arg(long, default_value = SUI_COIN)]
        coin_type: String,
        #[arg(long)]
        listing: ObjectId,
        #[arg(long)]
        price: u64,
    },
}

#[derive(clap::Subcommand)]
enum NftAction {
    /// Mint an NFT.
    Mint {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        url: String,
        /// Attribute as `key=value`; repeatable.
        #[arg(long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,
        /// Collection object the mint is recorded against.
        #[arg(long)]
        target: ObjectId,
    },
}

#[derive(clap::Subcommand)]
enum LaunchpadAction {
    /// Mint from a launchpad sale plan.
    SaleMint {
        #[arg(long)]
        collection_type: String,
        #[arg(long, default_value = SUI_COIN)]
        coin_type: String,
        #[arg(long)]
        launchpad: ObjectId,
        #[arg(long)]
        sale_plan: ObjectId,
        #[arg(long, default_value_t = 0)]
        plan_index: u64,
        #[arg(long, default_value_t = 1)]
        amount: u64,
        /// Hex-encoded whitelist signature.
        #[arg(long, default_value = "")]
        signature: String,
        /// Payment coin; repeatable.
        #[arg(long = "coin", required = true)]
        coins: Vec<ObjectId>,
        #[arg(long, default_value = "0x6")]
        clock: ObjectId,
    },
}

fn parse_attribute(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {s:?}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    souffl3_utils::init_logging(cli.log_format, &cli.log_level);

    let config_path = match cli.config {
        Some(path) => path,
        None => souffl3_wallet_core::default_config_path()
            .context("HOME is not set; pass --config")?,
    };

    commands::run(cli.command, &config_path, cli.contracts.as_deref()).await
}
