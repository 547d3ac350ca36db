//! Database row types and error mapping shared by the SQL adapters.

use fxdeals_types::{CurrencyCode, Deal, DealId, RepoError};
use sqlx::FromRow;

#[cfg(feature = "postgres")]
use chrono::{DateTime, Utc};
#[cfg(feature = "postgres")]
use rust_decimal::Decimal;

// ─────────────────────────────────────────────────────────────────────────────
// Error mapping
// ─────────────────────────────────────────────────────────────────────────────

/// Classifies a driver error. A unique-key violation on insert becomes
/// `RepoError::Duplicate` for the deal being written.
pub fn map_sqlx_error(err: sqlx::Error, deal_id: Option<&DealId>) -> RepoError {
    if let (sqlx::Error::Database(db_err), Some(id)) = (&err, deal_id) {
        if db_err.is_unique_violation() {
            return RepoError::Duplicate(id.clone());
        }
    }

    match &err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepoError::Unavailable(err.to_string())
        }
        _ => RepoError::Database(err.to_string()),
    }
}

fn parse_currency(code: &str) -> Result<CurrencyCode, RepoError> {
    code.trim()
        .parse::<CurrencyCode>()
        .map_err(|e| RepoError::Database(e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Deal row as stored by PostgreSQL (native timestamp and numeric types).
#[cfg(feature = "postgres")]
#[derive(FromRow)]
pub struct PgDealRow {
    pub deal_id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_timestamp: DateTime<Utc>,
    pub deal_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "postgres")]
impl PgDealRow {
    pub fn into_domain(self) -> Result<Deal, RepoError> {
        Ok(Deal {
            deal_id: DealId::new(self.deal_id),
            from_currency: parse_currency(&self.from_currency)?,
            to_currency: parse_currency(&self.to_currency)?,
            deal_timestamp: self.deal_timestamp,
            deal_amount: self.deal_amount,
            created_at: self.created_at,
        })
    }
}

/// Deal row as stored by SQLite (RFC 3339 and decimal text).
#[cfg(feature = "sqlite")]
#[derive(FromRow)]
pub struct SqliteDealRow {
    pub deal_id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_timestamp: String,
    pub deal_amount: String,
    pub created_at: String,
}

#[cfg(feature = "sqlite")]
impl SqliteDealRow {
    pub fn into_domain(self) -> Result<Deal, RepoError> {
        let deal_amount = self
            .deal_amount
            .parse::<rust_decimal::Decimal>()
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(Deal {
            deal_id: DealId::new(self.deal_id),
            from_currency: parse_currency(&self.from_currency)?,
            to_currency: parse_currency(&self.to_currency)?,
            deal_timestamp: parse_timestamp(&self.deal_timestamp)?,
            deal_amount,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

#[cfg(feature = "sqlite")]
fn parse_timestamp(s: &str) -> Result<chrono::DateTime<chrono::Utc>, RepoError> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| RepoError::Database(e.to_string()))
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
#[cfg(feature = "sqlite")]
pub fn timestamp_text(ts: chrono::DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
}
