//! FX deal domain model.

use chrono::{DateTime, Utc};
use iso_currencies::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller-supplied deal identifier. This is the uniqueness key of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealId(String);

impl DealId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DealId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DealId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DealId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DealId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Which leg of the currency pair a code was submitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencySide {
    From,
    To,
}

impl std::fmt::Display for CurrencySide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrencySide::From => write!(f, "from"),
            CurrencySide::To => write!(f, "to"),
        }
    }
}

/// A deal submission that satisfied the structural preconditions.
///
/// The only way to obtain one is `DealSubmission::try_from(DealRequest)`,
/// so the import pipeline can never see a blank identifier, a malformed
/// currency code, or an amount below 0.01. Currency codes are still raw
/// strings here: resolving them against ISO 4217 is the validator's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealSubmission {
    pub(crate) deal_id: DealId,
    pub(crate) from_currency: String,
    pub(crate) to_currency: String,
    pub(crate) deal_timestamp: DateTime<Utc>,
    pub(crate) deal_amount: Decimal,
}

impl DealSubmission {
    pub fn deal_id(&self) -> &DealId {
        &self.deal_id
    }

    pub fn from_currency(&self) -> &str {
        &self.from_currency
    }

    pub fn to_currency(&self) -> &str {
        &self.to_currency
    }

    pub fn deal_timestamp(&self) -> DateTime<Utc> {
        self.deal_timestamp
    }

    pub fn deal_amount(&self) -> Decimal {
        self.deal_amount
    }
}

/// A validated deal waiting to be persisted.
///
/// Carries everything except `created_at`, which the store assigns inside
/// `DealRepository::persist`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeal {
    pub deal_id: DealId,
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    pub deal_timestamp: DateTime<Utc>,
    pub deal_amount: Decimal,
}

impl NewDeal {
    /// Stamps the deal with its creation time.
    pub fn into_deal(self, created_at: DateTime<Utc>) -> Deal {
        Deal {
            deal_id: self.deal_id,
            from_currency: self.from_currency,
            to_currency: self.to_currency,
            deal_timestamp: self.deal_timestamp,
            deal_amount: self.deal_amount,
            created_at,
        }
    }
}

/// A deal recorded in the ledger. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    #[schema(value_type = String, example = "DEAL001")]
    pub deal_id: DealId,
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    pub deal_timestamp: DateTime<Utc>,
    #[schema(value_type = String, example = "1000.50")]
    pub deal_amount: Decimal,
    /// Server time at which the deal was persisted
    pub created_at: DateTime<Utc>,
}
