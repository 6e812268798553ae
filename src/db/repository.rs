use anyhow::Result;
use async_trait::async_trait;

use crate::models::{BlockDocument, TransactionDocument};

/// Write access to the persistence store. Inserts are append-only: nothing
/// here deduplicates, so re-ingesting a range inserts the same documents
/// again.
#[async_trait]
pub trait BlockStore {
    async fn insert_block(&self, block: &BlockDocument) -> Result<()>;

    async fn insert_transactions(&self, transactions: &[TransactionDocument]) -> Result<()>;

    /// Releases the underlying connection. Called by the worker on both its
    /// success and failure paths.
    async fn close(&self);
}
