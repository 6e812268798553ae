use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub mod repository;

pub use repository::BlockStore;

use crate::models::{BlockDocument, TransactionDocument};

pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Runs the embedded migrations. Invoked once at startup, before any
    /// worker opens its own pool.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl BlockStore for Database {
    async fn insert_block(&self, block: &BlockDocument) -> Result<()> {
        sqlx::query("INSERT INTO blocks (number, payload, created_at) VALUES ($1, $2, $3)")
            .bind(block.number as i64)
            .bind(Json(&block.payload))
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn insert_transactions(&self, transactions: &[TransactionDocument]) -> Result<()> {
        if transactions.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let mut query_builder =
            sqlx::QueryBuilder::new("INSERT INTO transactions (block_number, payload, created_at) ");

        query_builder.push_values(transactions, |mut b, tx| {
            b.push_bind(tx.block_number as i64)
                .push_bind(Json(&tx.payload))
                .push_bind(now);
        });

        query_builder.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
