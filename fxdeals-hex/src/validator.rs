//! Business checks run before a deal is persisted.

use fxdeals_types::{
    CurrencyCode, CurrencySide, DealRepository, DealSubmission, DomainError, ImportError, NewDeal,
};

/// Runs the import checks against a submission, in order, stopping at the
/// first violation:
///
/// 1. the identifier is not already stored
/// 2. the from-currency is a known ISO 4217 code
/// 3. the to-currency is a known ISO 4217 code
/// 4. the two currencies differ
///
/// Read-only against the store.
pub struct DealValidator<'a, R: DealRepository> {
    repo: &'a R,
}

impl<'a, R: DealRepository> DealValidator<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Returns the deal ready for `persist`, or the first rule it breaks.
    ///
    /// A store failure during the existence check is reported as
    /// `ImportError::Unexpected`.
    pub async fn validate(&self, submission: &DealSubmission) -> Result<NewDeal, ImportError> {
        let deal_id = submission.deal_id();
        if self.repo.exists(deal_id).await? {
            return Err(DomainError::DuplicateDeal(deal_id.clone()).into());
        }

        let from_currency = parse_side(submission.from_currency(), CurrencySide::From)?;
        let to_currency = parse_side(submission.to_currency(), CurrencySide::To)?;

        if from_currency == to_currency {
            return Err(DomainError::SameCurrency.into());
        }

        Ok(NewDeal {
            deal_id: deal_id.clone(),
            from_currency,
            to_currency,
            deal_timestamp: submission.deal_timestamp(),
            deal_amount: submission.deal_amount(),
        })
    }
}

fn parse_side(code: &str, side: CurrencySide) -> Result<CurrencyCode, DomainError> {
    code.parse().map_err(|_| DomainError::InvalidCurrency {
        side,
        code: code.to_string(),
    })
}
