//! `stickers`: browse and buy sticker packs from the command line.
use std::path::PathBuf;

use alloy::{
    primitives::{Address, U256},
    providers::ProviderBuilder,
};
use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use sticker_contracts::backend::RpcBackend;
use stickers::{
    api::Api,
    config::Config,
    fetch::HttpFetcher,
    store::{FileStore, MemoryStore, PackStore},
};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Browse and buy Status sticker packs")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "STICKERS_CONFIG")]
    config: Option<PathBuf>,

    /// Chain to use instead of the configured one
    #[arg(long)]
    chain_id: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the packs on sale
    Market,

    /// Show one pack
    Pack {
        /// Pack id
        id: U256,
        /// Keep contenthashes instead of gateway URLs
        #[arg(long)]
        raw: bool,
    },

    /// List the packs an account bought
    Purchased {
        /// Account to look up
        account: Address,
    },

    /// Print the unsigned transaction buying a pack, with its gas estimate
    BuyTx {
        /// Buying account
        account: Address,
        /// Pack id
        pack: U256,
    },

    /// Print sticker pack tokens transferred to the configured accounts as
    /// they are minted
    WatchTransfers,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(chain_id) = args.chain_id {
        config.chain_id = chain_id;
    }

    let url =
        config.rpc_url.parse().with_context(|| format!("invalid rpc url {}", config.rpc_url))?;
    let backend = RpcBackend::new(ProviderBuilder::new().connect_http(url));
    let fetcher = HttpFetcher::new(config.http_timeout())?;

    match config.store_path.clone() {
        Some(path) => {
            let store = FileStore::open(&path)
                .with_context(|| format!("opening store {}", path.display()))?;
            run(Api::new(backend, store, fetcher, config), args.command).await
        }
        None => run(Api::new(backend, MemoryStore::new(), fetcher, config), args.command).await,
    }
}

async fn run<B, S>(api: Api<B, S, HttpFetcher>, command: Command) -> Result<()>
where
    B: sticker_contracts::backend::Backend + Clone,
    S: PackStore,
{
    let chain_id = api.config().chain_id;
    match command {
        Command::Market => print(&api.market(chain_id).await?),
        Command::Pack { id, raw } => print(&api.pack_data(chain_id, id, !raw).await?),
        Command::Purchased { account } => {
            let ids: Vec<String> = api
                .purchased_pack_ids(chain_id, account)
                .await?
                .iter()
                .map(ToString::to_string)
                .collect();
            print(&ids)
        }
        Command::BuyTx { account, pack } => {
            let tx = api.buy_prepare_tx(chain_id, account, pack).await?;
            let gas = api.buy_estimate(chain_id, account, pack).await?;
            print(&serde_json::json!({ "tx": tx, "gas": gas }))
        }
        Command::WatchTransfers => {
            let accounts = api.config().accounts.clone();
            eyre::ensure!(!accounts.is_empty(), "no accounts configured");

            let (tx, mut rx) = mpsc::channel(16);
            let mut subscription = api.watch_transfers(chain_id, &accounts, tx).await?;
            info!(accounts = accounts.len(), "watching sticker pack transfers");

            let failed = subscription.err();
            let interrupted = tokio::signal::ctrl_c();
            tokio::pin!(failed, interrupted);
            loop {
                tokio::select! {
                    Some(transfer) = rx.recv() => {
                        let event = &transfer.inner.data;
                        print(&serde_json::json!({
                            "from": event.from,
                            "to": event.to,
                            "tokenID": event.token_id.to_string(),
                            "transactionHash": transfer.transaction_hash,
                        }))?;
                    }
                    err = &mut failed => {
                        return Err(err.map_or_else(
                            || eyre::eyre!("transfer watch ended"),
                            eyre::Report::from,
                        ));
                    }
                    _ = &mut interrupted => return Ok(()),
                }
            }
        }
    }
}

fn print<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
