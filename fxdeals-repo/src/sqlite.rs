//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use fxdeals_types::{Deal, DealId, DealRepository, NewDeal, RepoError};

use crate::types::{SqliteDealRow, map_sqlx_error, timestamp_text};

const MIGRATION: &str = include_str!("../migrations/0001_create_fx_deals.sql");

/// SQLite repository implementation.
///
/// Timestamps and amounts are stored as text; see `timestamp_text`.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::query(MIGRATION).execute(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DealRepository for SqliteRepo {
    async fn exists(&self, deal_id: &DealId) -> Result<bool, RepoError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM fx_deals WHERE deal_id = ?"#)
            .bind(deal_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        Ok(count > 0)
    }

    async fn persist(&self, deal: NewDeal) -> Result<Deal, RepoError> {
        let created_at = chrono::Utc::now();

        sqlx::query(
            r#"INSERT INTO fx_deals (deal_id, from_currency, to_currency, deal_timestamp, deal_amount, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(deal.deal_id.as_str())
        .bind(deal.from_currency.code())
        .bind(deal.to_currency.code())
        .bind(timestamp_text(deal.deal_timestamp))
        .bind(deal.deal_amount.to_string())
        .bind(timestamp_text(created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Some(&deal.deal_id)))?;

        Ok(deal.into_deal(created_at))
    }

    async fn list_all(&self) -> Result<Vec<Deal>, RepoError> {
        let rows: Vec<SqliteDealRow> = sqlx::query_as(
            r#"SELECT deal_id, from_currency, to_currency, deal_timestamp, deal_amount, created_at
               FROM fx_deals ORDER BY created_at, deal_id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, None))?;

        rows.into_iter().map(SqliteDealRow::into_domain).collect()
    }
}
