//! Error types for the FX deals warehouse.

use crate::domain::{CurrencySide, DealId};
use crate::validation::FieldErrors;

/// Domain-level errors (a deal the business rules refuse).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Deal {0} already exists")]
    DuplicateDeal(DealId),

    #[error("Invalid currency: {code} ({side} currency)")]
    InvalidCurrency { side: CurrencySide, code: String },

    #[error("From and To currency cannot be same")]
    SameCurrency,

    #[error("Validation failed: {0}")]
    MalformedInput(FieldErrors),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The identifier collided with an existing deal at persist time.
    #[error("Deal {0} already exists")]
    Duplicate(DealId),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Why a single deal import did not produce a persisted deal.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// A classified rejection.
    #[error(transparent)]
    Rejected(#[from] DomainError),

    /// Anything the pipeline could not classify, usually a store failure.
    #[error("{0}")]
    Unexpected(String),
}

impl ImportError {
    /// Message recorded against a failed batch row.
    pub fn row_message(&self) -> String {
        match self {
            ImportError::Rejected(e) => e.to_string(),
            ImportError::Unexpected(msg) => format!("Unexpected error: {}", msg),
        }
    }
}

impl From<RepoError> for ImportError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(id) => ImportError::Rejected(DomainError::DuplicateDeal(id)),
            other => ImportError::Unexpected(other.to_string()),
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid deal: {0}")]
    InvalidDeal(String),

    #[error("Duplicate deal: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Rejected(DomainError::DuplicateDeal(id)) => {
                AppError::Conflict(DomainError::DuplicateDeal(id).to_string())
            }
            ImportError::Rejected(DomainError::MalformedInput(errors)) => {
                AppError::Validation(errors)
            }
            ImportError::Rejected(e) => AppError::InvalidDeal(e.to_string()),
            ImportError::Unexpected(msg) => AppError::Internal(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        ImportError::from(err).into()
    }
}
