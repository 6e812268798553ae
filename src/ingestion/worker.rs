use anyhow::Result;
use tokio::sync::mpsc;

use crate::db::BlockStore;
use crate::models::TransactionDocument;
use crate::rpc::ChainProvider;

use super::partition::Partition;

/// Message from a worker to the supervisor. Workers never talk to each other;
/// this channel is their only output besides the store writes themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    Status { worker: usize, text: String },
    Error { worker: usize, text: String },
    Completed { worker: usize, code: i32 },
}

/// Processes one partition: fetches each height in ascending order and writes
/// the block and its transactions to the store. The first provider or store
/// error aborts the remaining range; a missing block does not.
pub struct IngestWorker<P, S> {
    partition: Partition,
    provider: P,
    store: S,
    events: mpsc::Sender<WorkerEvent>,
}

impl<P, S> IngestWorker<P, S>
where
    P: ChainProvider,
    S: BlockStore,
{
    pub fn new(partition: Partition, provider: P, store: S, events: mpsc::Sender<WorkerEvent>) -> Self {
        Self {
            partition,
            provider,
            store,
            events,
        }
    }

    /// Runs to completion. The store is closed and a completion code is sent
    /// on both the success and the failure path.
    pub async fn run(self) {
        let code = match self.ingest_range().await {
            Ok(()) => 0,
            Err(err) => {
                self.send(WorkerEvent::Error {
                    worker: self.partition.index,
                    text: format!("{err:#}"),
                })
                .await;
                1
            }
        };

        self.store.close().await;

        self.send(WorkerEvent::Completed {
            worker: self.partition.index,
            code,
        })
        .await;
    }

    async fn ingest_range(&self) -> Result<()> {
        for number in self.partition.start..=self.partition.end {
            let Some(block) = self.provider.fetch_block_with_transactions(number).await? else {
                self.status(format!("Block {number} not found.")).await;
                continue;
            };

            self.store.insert_block(&block).await?;

            if !block.transactions.is_empty() {
                let transactions: Vec<TransactionDocument> = block
                    .transactions
                    .iter()
                    .map(|payload| TransactionDocument {
                        block_number: block.number,
                        payload: payload.clone(),
                    })
                    .collect();

                self.store.insert_transactions(&transactions).await?;
            }

            self.status(format!("Block {number} and its transactions stored."))
                .await;
        }

        Ok(())
    }

    async fn status(&self, text: String) {
        self.send(WorkerEvent::Status {
            worker: self.partition.index,
            text,
        })
        .await;
    }

    async fn send(&self, event: WorkerEvent) {
        // The supervisor only drops its receiver once every worker is done,
        // so a failed send can only happen during teardown.
        let _ = self.events.send(event).await;
    }
}
