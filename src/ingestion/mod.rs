use anyhow::Result;
use std::future::Future;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::db::BlockStore;
use crate::rpc::ChainProvider;

pub mod partition;
pub mod worker;

pub use partition::{partition_range, BlockRange, Partition};
pub use worker::{IngestWorker, WorkerEvent};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Spawns one ingest worker per partition and logs the events they send back.
///
/// Workers are independent: each opens its own provider client and store
/// connection through the `connect` callback, and a failure in one never
/// cancels the others. The supervisor only observes; it does not aggregate
/// worker outcomes into its own result.
pub struct IngestionService {
    range: BlockRange,
    num_workers: usize,
}

impl IngestionService {
    pub fn new(range: BlockRange, num_workers: usize) -> Self {
        Self { range, num_workers }
    }

    pub async fn run<P, S, C, Fut>(&self, connect: C) -> Result<()>
    where
        P: ChainProvider + Send + Sync + 'static,
        S: BlockStore + Send + Sync + 'static,
        C: Fn(usize) -> Fut,
        Fut: Future<Output = Result<(P, S)>> + Send + 'static,
    {
        let partitions = partition_range(self.range, self.num_workers);

        info!(
            "Ingesting blocks {} to {} across {} workers",
            self.range.start,
            self.range.end,
            partitions.len()
        );

        let (events_tx, mut events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let mut handles = Vec::with_capacity(partitions.len());

        for partition in partitions {
            let events = events_tx.clone();
            let connection = connect(partition.index);

            handles.push(tokio::spawn(async move {
                let (provider, store) = match connection.await {
                    Ok(connection) => connection,
                    Err(err) => {
                        let _ = events
                            .send(WorkerEvent::Error {
                                worker: partition.index,
                                text: format!("{err:#}"),
                            })
                            .await;
                        let _ = events
                            .send(WorkerEvent::Completed {
                                worker: partition.index,
                                code: 1,
                            })
                            .await;
                        return;
                    }
                };

                IngestWorker::new(partition, provider, store, events)
                    .run()
                    .await;
            }));
        }

        // The workers hold the remaining senders; the receiver drains until
        // the last one finishes.
        drop(events_tx);

        while let Some(event) = events_rx.recv().await {
            match event {
                WorkerEvent::Status { worker, text } => {
                    info!("Thread {}: {}", worker, text);
                }
                WorkerEvent::Error { worker, text } => {
                    error!("Thread {} error: {}", worker, text);
                }
                WorkerEvent::Completed { worker, code } => {
                    if code != 0 {
                        warn!("Thread {} exited with code {}", worker, code);
                    }
                }
            }
        }

        for handle in handles {
            handle.await?;
        }

        Ok(())
    }
}
