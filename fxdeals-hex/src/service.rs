//! Deal Import Service
//!
//! Orchestrates validation and persistence through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use fxdeals_types::validation::submitted_deal_id;
use fxdeals_types::{
    AppError, BatchResult, Deal, DealError, DealRepository, DealResponse, DealSubmission,
    DomainError, ImportError,
};
use serde_json::Value;

use crate::validator::DealValidator;

/// Application service for deal imports.
///
/// Generic over `R: DealRepository` - the adapter is injected at compile time,
/// so tests can run against a mock or the in-memory store.
pub struct DealService<R: DealRepository> {
    repo: R,
}

impl<R: DealRepository> DealService<R> {
    /// Creates a new import service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Imports a single deal.
    ///
    /// Checks run before anything is written; a rejected deal leaves the
    /// store untouched. No retries.
    #[tracing::instrument(skip(self, submission), fields(deal_id = %submission.deal_id()))]
    pub async fn import_one(&self, submission: DealSubmission) -> Result<DealResponse, ImportError> {
        let new_deal = DealValidator::new(&self.repo).validate(&submission).await?;

        let deal = self.repo.persist(new_deal).await.map_err(|e| {
            let err = ImportError::from(e);
            if let ImportError::Unexpected(msg) = &err {
                tracing::error!(error = %msg, "Failed to persist deal");
            }
            err
        })?;

        tracing::info!(
            from = %deal.from_currency,
            to = %deal.to_currency,
            amount = %deal.deal_amount,
            "Deal imported"
        );
        Ok(DealResponse::imported(deal))
    }

    /// Imports each row independently, in submission order.
    ///
    /// A failed row is recorded with its 1-based position and never stops
    /// the rows after it. Rows already imported are not rolled back. Rows
    /// arrive as raw JSON so a badly typed field only fails its own row.
    #[tracing::instrument(skip(self, rows), fields(total = rows.len()))]
    pub async fn import_batch(&self, rows: Vec<Value>) -> BatchResult {
        let mut result = BatchResult::new(rows.len());

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            let submitted_id = submitted_deal_id(&row);

            let outcome = match DealSubmission::try_from(row) {
                Ok(submission) => self.import_one(submission).await,
                Err(errors) => Err(DomainError::MalformedInput(errors).into()),
            };

            match outcome {
                Ok(response) => result.record_success(response),
                Err(err) => {
                    let error_message = err.row_message();
                    tracing::warn!(row_number, deal_id = ?submitted_id, %error_message, "Batch row rejected");
                    result.record_failure(DealError {
                        deal_id: submitted_id,
                        error_message,
                        row_number,
                    });
                }
            }
        }

        tracing::info!(
            success = result.success_count,
            failed = result.failure_count,
            "Batch import finished"
        );
        result
    }

    /// Lists every stored deal, oldest first.
    pub async fn list_all(&self) -> Result<Vec<Deal>, AppError> {
        self.repo.list_all().await.map_err(Into::into)
    }
}
