use anyhow::{bail, Result};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use chain_ingest::config::Config;
use chain_ingest::db::Database;
use chain_ingest::ingestion::{BlockRange, IngestionService};
use chain_ingest::rpc::BlockchainClient;

mod cli;

use cli::Cli;

const DEFAULT_NUM_THREADS: usize = 4;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    init_logging();

    let Ok(start_block) = args.start_block.parse::<u64>() else {
        bail!("Please provide valid start and end block numbers.");
    };
    let Ok(end_block) = args.end_block.parse::<u64>() else {
        bail!("Please provide valid start and end block numbers.");
    };

    let num_threads = args
        .num_threads
        .as_deref()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|&workers| workers > 0)
        .unwrap_or(DEFAULT_NUM_THREADS);

    let config = Arc::new(Config::from_env());

    // Migrations run once, before the workers open their own pools.
    let admin = Database::new(&config.database_url, 1).await?;
    admin.migrate().await?;
    admin.close().await;

    let service = IngestionService::new(BlockRange::new(start_block, end_block), num_threads);

    service
        .run(move |_worker| {
            let config = config.clone();
            async move {
                let provider = BlockchainClient::new(&config.rpc_http_url)?;
                let store = Database::new(&config.database_url, config.db_max_connections).await?;
                Ok((provider, store))
            }
        })
        .await
}
