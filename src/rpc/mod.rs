use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;
use std::sync::Arc;

use crate::models::BlockDocument;

pub mod client;

pub use client::ChainProvider;

/// JSON-RPC client for the chain node. Each worker owns its own instance.
#[derive(Debug, Clone)]
pub struct BlockchainClient {
    http_client: Arc<Provider<Http>>,
}

impl BlockchainClient {
    pub fn new(http_url: &str) -> Result<Self> {
        let http_provider = Provider::<Http>::try_from(http_url)?;

        Ok(Self {
            http_client: Arc::new(http_provider),
        })
    }
}

#[async_trait]
impl ChainProvider for BlockchainClient {
    async fn fetch_block_with_transactions(&self, number: u64) -> Result<Option<BlockDocument>> {
        let block = self
            .http_client
            .get_block_with_txs(BlockNumber::Number(number.into()))
            .await?;

        let Some(block) = block else {
            return Ok(None);
        };

        let transactions = block
            .transactions
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(BlockDocument {
            number: block.number.map(|n| n.as_u64()).unwrap_or(number),
            payload: serde_json::to_value(&block)?,
            transactions,
        }))
    }
}
