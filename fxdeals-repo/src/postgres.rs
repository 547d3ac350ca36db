//! PostgreSQL repository adapter.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use sqlx::PgPool;

use fxdeals_types::{Deal, DealId, DealRepository, NewDeal, RepoError};

use crate::types::{PgDealRow, map_sqlx_error};

/// PostgreSQL repository. Uniqueness rides on the `fx_deals` primary key.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_fx_deals_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DealRepository for PostgresRepo {
    async fn exists(&self, deal_id: &DealId) -> Result<bool, RepoError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM fx_deals WHERE deal_id = $1"#)
            .bind(deal_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        Ok(count > 0)
    }

    async fn persist(&self, mut deal: NewDeal) -> Result<Deal, RepoError> {
        // TIMESTAMPTZ keeps microseconds; echo what a later read returns.
        deal.deal_timestamp = deal.deal_timestamp.trunc_subsecs(6);
        let created_at = Utc::now().trunc_subsecs(6);

        sqlx::query(
            r#"INSERT INTO fx_deals (deal_id, from_currency, to_currency, deal_timestamp, deal_amount, created_at)
               VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(deal.deal_id.as_str())
        .bind(deal.from_currency.code())
        .bind(deal.to_currency.code())
        .bind(deal.deal_timestamp)
        .bind(deal.deal_amount)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Some(&deal.deal_id)))?;

        Ok(deal.into_deal(created_at))
    }

    async fn list_all(&self) -> Result<Vec<Deal>, RepoError> {
        let rows: Vec<PgDealRow> = sqlx::query_as(
            r#"SELECT deal_id, from_currency, to_currency, deal_timestamp, deal_amount, created_at
               FROM fx_deals ORDER BY created_at, deal_id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, None))?;

        rows.into_iter().map(PgDealRow::into_domain).collect()
    }
}
