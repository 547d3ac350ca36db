//! Structural precondition checks.
//!
//! These run at the boundary, before a request reaches the import pipeline:
//! presence of every field, the shape of currency codes, and the minimum
//! amount. Domain rules (ISO membership, distinct currencies, uniqueness)
//! are not checked here.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{DealId, DealSubmission};
use crate::dto::{BatchRequest, DealRequest};
use crate::timestamp::parse_deal_timestamp;

/// Field name → message for every failed precondition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure; the first message for a field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Folds in another set of failures without overwriting existing ones.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Smallest accepted deal amount.
pub fn minimum_amount() -> Decimal {
    Decimal::new(1, 2)
}

fn is_iso_shaped(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

fn check_currency(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(code) if !code.trim().is_empty() => {
            if is_iso_shaped(&code) {
                Some(code)
            } else {
                errors.add(
                    field,
                    format!("{label} currency must be a valid 3-letter ISO code"),
                );
                None
            }
        }
        _ => {
            errors.add(field, format!("{label} currency is required"));
            None
        }
    }
}

impl TryFrom<DealRequest> for DealSubmission {
    type Error = FieldErrors;

    fn try_from(req: DealRequest) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::new();

        let deal_id = match req.deal_id {
            Some(id) if !id.trim().is_empty() => Some(DealId::new(id)),
            _ => {
                errors.add("dealId", "Deal ID is required");
                None
            }
        };
        let from_currency = check_currency(&mut errors, "fromCurrency", "From", req.from_currency);
        let to_currency = check_currency(&mut errors, "toCurrency", "To", req.to_currency);

        if req.deal_timestamp.is_none() {
            errors.add("dealTimestamp", "Deal timestamp is required");
        }

        let deal_amount = match req.deal_amount {
            Some(amount) if amount >= minimum_amount() => Some(amount),
            Some(_) => {
                errors.add("dealAmount", "Deal amount must be positive");
                None
            }
            None => {
                errors.add("dealAmount", "Deal amount is required");
                None
            }
        };

        match (
            deal_id,
            from_currency,
            to_currency,
            req.deal_timestamp,
            deal_amount,
        ) {
            (Some(deal_id), Some(from_currency), Some(to_currency), Some(deal_timestamp), Some(deal_amount))
                if errors.is_empty() =>
            {
                Ok(DealSubmission {
                    deal_id,
                    from_currency,
                    to_currency,
                    deal_timestamp,
                    deal_amount,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Deal id as submitted in a raw row: a string, or a number taken as text.
pub fn submitted_deal_id(row: &Value) -> Option<String> {
    row.get("dealId").and_then(id_text)
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn take(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|value| !value.is_null())
}

fn take_text(
    fields: &mut Map<String, Value>,
    errors: &mut FieldErrors,
    field: &'static str,
    message: &str,
) -> Option<String> {
    match take(fields, field)? {
        Value::String(text) => Some(text),
        _ => {
            errors.add(field, message);
            None
        }
    }
}

/// Reads a raw JSON row field by field.
///
/// A badly typed field is reported against that field and the remaining
/// preconditions still run, so one row yields every failure it has.
impl TryFrom<Value> for DealSubmission {
    type Error = FieldErrors;

    fn try_from(row: Value) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::new();
        let Value::Object(mut fields) = row else {
            errors.add("deal", "Deal must be a JSON object");
            return Err(errors);
        };

        let deal_id = take(&mut fields, "dealId").and_then(|value| {
            let id = id_text(&value);
            if id.is_none() {
                errors.add("dealId", "Deal ID must be a string");
            }
            id
        });
        let from_currency = take_text(
            &mut fields,
            &mut errors,
            "fromCurrency",
            "From currency must be a valid 3-letter ISO code",
        );
        let to_currency = take_text(
            &mut fields,
            &mut errors,
            "toCurrency",
            "To currency must be a valid 3-letter ISO code",
        );
        let deal_timestamp = take(&mut fields, "dealTimestamp").and_then(|value| {
            let parsed = value.as_str().and_then(parse_deal_timestamp);
            if parsed.is_none() {
                errors.add("dealTimestamp", "Deal timestamp must be an ISO-8601 date-time");
            }
            parsed
        });
        let deal_amount = take(&mut fields, "dealAmount").and_then(|value| {
            match serde_json::from_value::<Decimal>(value) {
                Ok(amount) => Some(amount),
                Err(_) => {
                    errors.add("dealAmount", "Deal amount must be a number");
                    None
                }
            }
        });

        let req = DealRequest {
            deal_id,
            from_currency,
            to_currency,
            deal_timestamp,
            deal_amount,
        };
        match DealSubmission::try_from(req) {
            Ok(submission) if errors.is_empty() => Ok(submission),
            Ok(_) => Err(errors),
            Err(preconditions) => {
                errors.merge(preconditions);
                Err(errors)
            }
        }
    }
}

impl BatchRequest {
    /// Checks the batch envelope and hands back its rows.
    ///
    /// Rows themselves are not checked here; a malformed row becomes a
    /// failure record for that row only.
    pub fn into_rows(self, max_batch_size: usize) -> Result<Vec<Value>, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.deals.is_empty() {
            errors.add("deals", "Deals list cannot be empty");
        } else if self.deals.len() > max_batch_size {
            errors.add(
                "deals",
                format!("Deals list cannot contain more than {max_batch_size} deals"),
            );
        }

        if errors.is_empty() {
            Ok(self.deals)
        } else {
            Err(errors)
        }
    }
}
