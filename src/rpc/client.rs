use anyhow::Result;
use async_trait::async_trait;

use crate::models::BlockDocument;

/// Read access to the remote chain. `Ok(None)` means the height has no block
/// yet (for example, beyond the current tip) and is not an error.
#[async_trait]
pub trait ChainProvider {
    async fn fetch_block_with_transactions(&self, number: u64) -> Result<Option<BlockDocument>>;
}
