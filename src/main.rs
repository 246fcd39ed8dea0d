//! Gymdesk main entry point

use clap::Parser;
use gymdesk_api::start_server;
use gymdesk_config::Config;
use gymdesk_core::TransactionBook;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "gymdesk")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight financial administration service for gym studios", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Start with an empty transaction book instead of the sample dataset
    #[arg(long)]
    empty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let rt = Runtime::new()?;

    rt.block_on(async {
        let config = if args.config.exists() {
            Config::load(args.config.clone())?
        } else {
            log::warn!(
                "Config file not found: {}, using defaults",
                args.config.display()
            );
            Config::default()
        };

        log::info!(
            "Config loaded: listening on {}:{}, dues category {}",
            config.server.host,
            config.server.port,
            config.billing.dues_category
        );

        let book = if args.empty {
            TransactionBook::new()
        } else {
            TransactionBook::seeded()
        };
        log::info!("Transaction book ready with {} entries", book.len());

        let book = Arc::new(RwLock::new(book));
        start_server(config, book).await
    })
}
