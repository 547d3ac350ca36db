//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CurrencyCode, Deal, DealId};

/// Confirmation text attached to every successfully imported deal.
pub const IMPORT_SUCCESS_MESSAGE: &str = "Deal imported successfully";

// ─────────────────────────────────────────────────────────────────────────────
// Request DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to import a single deal.
///
/// Every field is optional on the wire so that missing values are reported
/// per field by the precondition checks instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealRequest {
    /// Unique deal identifier supplied by the caller
    #[schema(example = "DEAL001")]
    pub deal_id: Option<String>,
    /// ISO 4217 code of the currency being sold
    #[schema(example = "USD")]
    pub from_currency: Option<String>,
    /// ISO 4217 code of the currency being bought
    #[schema(example = "MAD")]
    pub to_currency: Option<String>,
    /// When the deal was struck (RFC 3339, or a local date-time taken as UTC)
    #[schema(value_type = Option<String>, example = "2024-01-15T10:30:00Z")]
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub deal_timestamp: Option<DateTime<Utc>>,
    /// Deal amount in the from-currency, at least 0.01
    #[schema(value_type = Option<String>, example = "1000.50")]
    pub deal_amount: Option<Decimal>,
}

impl DealRequest {
    /// Builds a fully populated request.
    pub fn new(
        deal_id: impl Into<String>,
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        deal_timestamp: DateTime<Utc>,
        deal_amount: Decimal,
    ) -> Self {
        Self {
            deal_id: Some(deal_id.into()),
            from_currency: Some(from_currency.into()),
            to_currency: Some(to_currency.into()),
            deal_timestamp: Some(deal_timestamp),
            deal_amount: Some(deal_amount),
        }
    }
}

/// Request to import several deals in one call.
///
/// Rows stay as raw JSON until the batch is processed, so a row with a
/// badly typed field fails on its own instead of failing the envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BatchRequest {
    #[serde(default)]
    #[schema(value_type = Vec<DealRequest>)]
    pub deals: Vec<serde_json::Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of a successful import: the persisted deal plus a confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealResponse {
    #[schema(value_type = String, example = "DEAL001")]
    pub deal_id: DealId,
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    pub deal_timestamp: DateTime<Utc>,
    #[schema(value_type = String, example = "1000.50")]
    pub deal_amount: Decimal,
    pub created_at: DateTime<Utc>,
    #[schema(example = "Deal imported successfully")]
    pub message: String,
}

impl DealResponse {
    /// Success outcome for a freshly persisted deal.
    pub fn imported(deal: Deal) -> Self {
        Self {
            deal_id: deal.deal_id,
            from_currency: deal.from_currency,
            to_currency: deal.to_currency,
            deal_timestamp: deal.deal_timestamp,
            deal_amount: deal.deal_amount,
            created_at: deal.created_at,
            message: IMPORT_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// A batch row that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealError {
    /// Identifier as submitted (absent if the row had none)
    #[schema(example = "DEAL002")]
    pub deal_id: Option<String>,
    #[schema(example = "From and To currency cannot be same")]
    pub error_message: String,
    /// 1-based position of the row within the submitted batch
    #[schema(example = 2)]
    pub row_number: usize,
}

/// Aggregated outcome of a batch import.
///
/// Successes and failures each keep submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub total_requested: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub successful_deals: Vec<DealResponse>,
    pub failed_deals: Vec<DealError>,
}

impl BatchResult {
    /// Creates an empty result for a batch of `total_requested` rows.
    pub fn new(total_requested: usize) -> Self {
        Self {
            total_requested,
            success_count: 0,
            failure_count: 0,
            successful_deals: Vec::with_capacity(total_requested),
            failed_deals: Vec::new(),
        }
    }

    pub fn record_success(&mut self, response: DealResponse) {
        self.successful_deals.push(response);
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, error: DealError) {
        self.failed_deals.push(error);
        self.failure_count += 1;
    }

    /// Classifies the batch for the response status.
    pub fn status(&self) -> BatchStatus {
        if self.failure_count > 0 && self.success_count > 0 {
            BatchStatus::PartialSuccess
        } else if self.failure_count == 0 {
            BatchStatus::FullyAccepted
        } else {
            BatchStatus::Rejected
        }
    }
}

/// Overall classification of a batch import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// Every row was imported
    FullyAccepted,
    /// Some rows were imported, some failed
    PartialSuccess,
    /// No row was imported
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn response(id: &str) -> DealResponse {
        DealResponse::imported(Deal {
            deal_id: DealId::new(id),
            from_currency: CurrencyCode::USD,
            to_currency: CurrencyCode::EUR,
            deal_timestamp: Utc::now(),
            deal_amount: dec!(1.00),
            created_at: Utc::now(),
        })
    }

    fn failure(id: &str, row_number: usize) -> DealError {
        DealError {
            deal_id: Some(id.to_string()),
            error_message: "boom".to_string(),
            row_number,
        }
    }

    #[test]
    fn test_imported_uses_fixed_message() {
        assert_eq!(response("A").message, "Deal imported successfully");
    }

    #[test]
    fn test_record_keeps_counts_in_step() {
        let mut result = BatchResult::new(3);
        result.record_success(response("A"));
        result.record_failure(failure("B", 2));
        result.record_success(response("C"));

        assert_eq!(result.success_count, result.successful_deals.len());
        assert_eq!(result.failure_count, result.failed_deals.len());
        assert_eq!(
            result.success_count + result.failure_count,
            result.total_requested
        );
    }

    #[test]
    fn test_status_partial_success() {
        let mut result = BatchResult::new(2);
        result.record_success(response("A"));
        result.record_failure(failure("B", 2));
        assert_eq!(result.status(), BatchStatus::PartialSuccess);
    }

    #[test]
    fn test_status_fully_accepted() {
        let mut result = BatchResult::new(1);
        result.record_success(response("A"));
        assert_eq!(result.status(), BatchStatus::FullyAccepted);
    }

    #[test]
    fn test_status_rejected() {
        let mut result = BatchResult::new(2);
        result.record_failure(failure("A", 1));
        result.record_failure(failure("B", 2));
        assert_eq!(result.status(), BatchStatus::Rejected);
    }

    #[test]
    fn test_empty_batch_counts_as_fully_accepted() {
        assert_eq!(BatchResult::new(0).status(), BatchStatus::FullyAccepted);
    }

    #[test]
    fn test_request_accepts_numeric_and_string_amounts() {
        let from_number: DealRequest =
            serde_json::from_str(r#"{"dealId":"D1","dealAmount":1000.50}"#).unwrap();
        let from_string: DealRequest =
            serde_json::from_str(r#"{"dealId":"D1","dealAmount":"1000.50"}"#).unwrap();

        assert_eq!(from_number.deal_amount, Some(dec!(1000.50)));
        assert_eq!(from_string.deal_amount, Some(dec!(1000.50)));
        assert_eq!(from_string.from_currency, None);
    }

    #[test]
    fn test_request_accepts_offset_free_timestamp() {
        let local: DealRequest =
            serde_json::from_str(r#"{"dealTimestamp":"2024-01-15T10:30:00"}"#).unwrap();
        let zoned: DealRequest =
            serde_json::from_str(r#"{"dealTimestamp":"2024-01-15T10:30:00Z"}"#).unwrap();
        let absent: DealRequest = serde_json::from_str("{}").unwrap();

        assert!(local.deal_timestamp.is_some());
        assert_eq!(local.deal_timestamp, zoned.deal_timestamp);
        assert_eq!(absent.deal_timestamp, None);
    }

    #[test]
    fn test_batch_result_wire_names() {
        let mut result = BatchResult::new(1);
        result.record_failure(failure("X", 1));

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["totalRequested"], 1);
        assert_eq!(json["failureCount"], 1);
        assert_eq!(json["failedDeals"][0]["rowNumber"], 1);
        assert_eq!(json["failedDeals"][0]["errorMessage"], "boom");
    }
}
