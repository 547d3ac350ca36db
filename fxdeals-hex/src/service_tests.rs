//! DealService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};

    use fxdeals_types::{
        AppError, BatchStatus, Deal, DealId, DealRepository, DealRequest, DealSubmission,
        DomainError, IMPORT_SUCCESS_MESSAGE, ImportError, NewDeal, RepoError,
    };

    use crate::DealService;

    /// Simple in-memory repository for testing the service layer.
    pub struct MockRepo {
        deals: Mutex<Vec<Deal>>,
        /// Pretends nothing exists, so uniqueness is only caught at persist.
        blind_exists: bool,
        /// Fails every persist with `RepoError::Unavailable`.
        offline: bool,
        /// Fails every `exists` and `list_all` with `RepoError::Database`.
        broken_reads: bool,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                deals: Mutex::new(Vec::new()),
                blind_exists: false,
                offline: false,
                broken_reads: false,
            }
        }

        fn blind() -> Self {
            Self {
                blind_exists: true,
                ..Self::new()
            }
        }

        fn offline() -> Self {
            Self {
                offline: true,
                ..Self::new()
            }
        }

        fn broken_reads() -> Self {
            Self {
                broken_reads: true,
                ..Self::new()
            }
        }

        fn count(&self) -> usize {
            self.deals.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl DealRepository for MockRepo {
        async fn exists(&self, deal_id: &DealId) -> Result<bool, RepoError> {
            if self.broken_reads {
                return Err(RepoError::Database("lookup timed out".into()));
            }
            if self.blind_exists {
                return Ok(false);
            }
            Ok(self
                .deals
                .lock()
                .unwrap()
                .iter()
                .any(|d| &d.deal_id == deal_id))
        }

        async fn persist(&self, deal: NewDeal) -> Result<Deal, RepoError> {
            if self.offline {
                return Err(RepoError::Unavailable("connection refused".into()));
            }
            let mut deals = self.deals.lock().unwrap();
            if deals.iter().any(|d| d.deal_id == deal.deal_id) {
                return Err(RepoError::Duplicate(deal.deal_id));
            }
            let deal = deal.into_deal(Utc::now());
            deals.push(deal.clone());
            Ok(deal)
        }

        async fn list_all(&self) -> Result<Vec<Deal>, RepoError> {
            if self.broken_reads {
                return Err(RepoError::Database("lookup timed out".into()));
            }
            Ok(self.deals.lock().unwrap().clone())
        }
    }

    fn request(id: &str, from: &str, to: &str) -> DealRequest {
        DealRequest::new(id, from, to, Utc::now(), dec!(1000.50))
    }

    fn submission(id: &str, from: &str, to: &str) -> DealSubmission {
        DealSubmission::try_from(request(id, from, to)).unwrap()
    }

    fn row(id: &str, from: &str, to: &str) -> Value {
        json!({
            "dealId": id,
            "fromCurrency": from,
            "toCurrency": to,
            "dealTimestamp": "2024-01-15T10:30:00Z",
            "dealAmount": "1000.50"
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Single import
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_import_one_success() {
        let service = DealService::new(MockRepo::new());
        let before = Utc::now();

        let response = service
            .import_one(submission("DEAL001", "USD", "MAD"))
            .await
            .unwrap();

        assert_eq!(response.deal_id.as_str(), "DEAL001");
        assert_eq!(response.from_currency.code(), "USD");
        assert_eq!(response.to_currency.code(), "MAD");
        assert_eq!(response.deal_amount, dec!(1000.50));
        assert_eq!(response.message, IMPORT_SUCCESS_MESSAGE);
        assert!(response.created_at >= before);
        assert_eq!(service.repo().count(), 1);
    }

    #[tokio::test]
    async fn test_import_one_twice_is_duplicate() {
        let service = DealService::new(MockRepo::new());
        service
            .import_one(submission("DEAL001", "USD", "MAD"))
            .await
            .unwrap();

        let err = service
            .import_one(submission("DEAL001", "USD", "MAD"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ImportError::Rejected(DomainError::DuplicateDeal(ref id)) if id.as_str() == "DEAL001"
        ));
        assert_eq!(err.to_string(), "Deal DEAL001 already exists");
        assert_eq!(service.repo().count(), 1);
    }

    #[tokio::test]
    async fn test_same_currency_never_persisted() {
        let service = DealService::new(MockRepo::new());

        for code in ["USD", "EUR", "MAD", "JPY"] {
            let err = service
                .import_one(submission("X", code, code))
                .await
                .unwrap_err();
            assert!(matches!(err, ImportError::Rejected(DomainError::SameCurrency)));
        }

        assert_eq!(service.repo().count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_currency_names_side() {
        let service = DealService::new(MockRepo::new());

        let err = service
            .import_one(submission("DEAL001", "QQQ", "USD"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid currency: QQQ (from currency)");
    }

    #[tokio::test]
    async fn test_persist_time_collision_classified_as_duplicate() {
        let service = DealService::new(MockRepo::blind());
        service
            .import_one(submission("DEAL001", "USD", "MAD"))
            .await
            .unwrap();

        let err = service
            .import_one(submission("DEAL001", "USD", "MAD"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ImportError::Rejected(DomainError::DuplicateDeal(_))
        ));
    }

    #[tokio::test]
    async fn test_store_outage_is_unexpected() {
        let service = DealService::new(MockRepo::offline());

        let err = service
            .import_one(submission("DEAL001", "USD", "MAD"))
            .await
            .unwrap_err();

        assert!(matches!(err, ImportError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_existence_check_failure_is_unexpected() {
        let service = DealService::new(MockRepo::broken_reads());

        let err = service
            .import_one(submission("DEAL001", "USD", "MAD"))
            .await
            .unwrap_err();

        match err {
            ImportError::Unexpected(msg) => assert!(msg.contains("lookup timed out")),
            other => panic!("expected Unexpected, got {other:?}"),
        }
        assert_eq!(service.repo().count(), 0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Batch import
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_batch_mixed_outcome() {
        let service = DealService::new(MockRepo::new());

        let result = service
            .import_batch(vec![
                row("D1", "USD", "EUR"),
                row("D2", "USD", "USD"),
                row("D3", "GBP", "JPY"),
            ])
            .await;

        assert_eq!(result.total_requested, 3);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.failure_count, 1);
        assert_eq!(result.failed_deals[0].row_number, 2);
        assert_eq!(result.failed_deals[0].deal_id.as_deref(), Some("D2"));
        assert_eq!(
            result.failed_deals[0].error_message,
            "From and To currency cannot be same"
        );
        let ids: Vec<&str> = result
            .successful_deals
            .iter()
            .map(|d| d.deal_id.as_str())
            .collect();
        assert_eq!(ids, vec!["D1", "D3"]);
        assert_eq!(result.status(), BatchStatus::PartialSuccess);
    }

    #[tokio::test]
    async fn test_batch_intra_batch_duplicate() {
        let service = DealService::new(MockRepo::new());

        let result = service
            .import_batch(vec![row("D1", "USD", "EUR"), row("D1", "GBP", "JPY")])
            .await;

        assert_eq!(result.success_count, 1);
        assert_eq!(result.failure_count, 1);
        assert_eq!(result.failed_deals[0].row_number, 2);
        assert_eq!(result.failed_deals[0].error_message, "Deal D1 already exists");
    }

    #[tokio::test]
    async fn test_batch_all_succeed() {
        let service = DealService::new(MockRepo::new());

        let result = service
            .import_batch(vec![row("D1", "USD", "EUR"), row("D2", "EUR", "USD")])
            .await;

        assert_eq!(result.success_count, 2);
        assert!(result.failed_deals.is_empty());
        assert_eq!(result.status(), BatchStatus::FullyAccepted);
    }

    #[tokio::test]
    async fn test_batch_all_fail_is_rejected() {
        let service = DealService::new(MockRepo::new());

        let result = service
            .import_batch(vec![row("D1", "USD", "USD"), row("D2", "AAA", "EUR")])
            .await;

        assert_eq!(result.success_count, 0);
        assert_eq!(result.failure_count, 2);
        assert_eq!(result.status(), BatchStatus::Rejected);
        assert_eq!(service.repo().count(), 0);
    }

    #[tokio::test]
    async fn test_batch_malformed_row_isolated() {
        let service = DealService::new(MockRepo::new());
        let mut bad = row("D2", "USD", "EUR");
        bad["dealAmount"] = json!("0.00");

        let result = service
            .import_batch(vec![row("D1", "USD", "EUR"), bad, row("D3", "EUR", "GBP")])
            .await;

        assert_eq!(result.success_count, 2);
        assert_eq!(result.failed_deals[0].row_number, 2);
        assert_eq!(
            result.failed_deals[0].error_message,
            "Validation failed: dealAmount: Deal amount must be positive"
        );
    }

    #[tokio::test]
    async fn test_batch_missing_id_recorded_without_id() {
        let service = DealService::new(MockRepo::new());
        let mut nameless = row("ignored", "USD", "EUR");
        nameless["dealId"] = Value::Null;

        let result = service.import_batch(vec![nameless]).await;

        assert_eq!(result.failed_deals[0].deal_id, None);
        assert!(
            result.failed_deals[0]
                .error_message
                .contains("Deal ID is required")
        );
    }

    #[tokio::test]
    async fn test_batch_badly_typed_field_isolated() {
        let service = DealService::new(MockRepo::new());
        let mut bad = row("D2", "USD", "EUR");
        bad["dealAmount"] = json!("abc");

        let result = service
            .import_batch(vec![row("D1", "USD", "EUR"), bad])
            .await;

        assert_eq!(result.success_count, 1);
        assert_eq!(result.failure_count, 1);
        assert_eq!(result.failed_deals[0].row_number, 2);
        assert_eq!(result.failed_deals[0].deal_id.as_deref(), Some("D2"));
        assert_eq!(
            result.failed_deals[0].error_message,
            "Validation failed: dealAmount: Deal amount must be a number"
        );
        assert_eq!(result.status(), BatchStatus::PartialSuccess);
    }

    #[tokio::test]
    async fn test_batch_non_object_row_isolated() {
        let service = DealService::new(MockRepo::new());

        let result = service
            .import_batch(vec![json!("D1"), row("D2", "USD", "EUR")])
            .await;

        assert_eq!(result.success_count, 1);
        assert_eq!(result.failed_deals[0].row_number, 1);
        assert_eq!(result.failed_deals[0].deal_id, None);
        assert_eq!(
            result.failed_deals[0].error_message,
            "Validation failed: deal: Deal must be a JSON object"
        );
    }

    #[tokio::test]
    async fn test_batch_existence_check_failure_prefixed() {
        let service = DealService::new(MockRepo::broken_reads());

        let result = service.import_batch(vec![row("D1", "USD", "EUR")]).await;

        assert_eq!(result.failure_count, 1);
        assert_eq!(
            result.failed_deals[0].error_message,
            "Unexpected error: Database error: lookup timed out"
        );
        assert_eq!(result.status(), BatchStatus::Rejected);
    }

    #[tokio::test]
    async fn test_batch_store_outage_prefixed() {
        let service = DealService::new(MockRepo::offline());

        let result = service.import_batch(vec![row("D1", "USD", "EUR")]).await;

        assert_eq!(result.failure_count, 1);
        assert!(
            result.failed_deals[0]
                .error_message
                .starts_with("Unexpected error: ")
        );
    }

    #[tokio::test]
    async fn test_batch_counts_and_positions_hold() {
        let service = DealService::new(MockRepo::new());
        // Ids repeat every 7 rows and every third row is a same-currency pair.
        let rows: Vec<Value> = (0..20)
            .map(|i| {
                let to = if i % 3 == 0 { "USD" } else { "EUR" };
                row(&format!("D{}", i % 7), "USD", to)
            })
            .collect();

        let result = service.import_batch(rows).await;

        assert_eq!(result.total_requested, 20);
        assert_eq!(result.success_count, 7);
        assert_eq!(result.failure_count, 13);
        assert_eq!(result.success_count, result.successful_deals.len());
        assert_eq!(result.failure_count, result.failed_deals.len());

        let imported: Vec<&str> = result
            .successful_deals
            .iter()
            .map(|d| d.deal_id.as_str())
            .collect();
        assert_eq!(imported, vec!["D1", "D2", "D4", "D5", "D0", "D3", "D6"]);

        let failed_rows: Vec<usize> = result.failed_deals.iter().map(|f| f.row_number).collect();
        assert_eq!(
            failed_rows,
            vec![1, 4, 7, 9, 10, 12, 13, 15, 16, 17, 18, 19, 20]
        );

        assert_eq!(
            result.failed_deals[0].error_message,
            "From and To currency cannot be same"
        );
        // Row 10 is both a repeat and a same-currency pair; the repeat wins.
        assert_eq!(result.failed_deals[4].row_number, 10);
        assert_eq!(result.failed_deals[4].error_message, "Deal D2 already exists");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_all_empty() {
        let service = DealService::new(MockRepo::new());

        let deals = service.list_all().await.unwrap();

        assert!(deals.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_returns_imported() {
        let service = DealService::new(MockRepo::new());
        service
            .import_batch(vec![row("D1", "USD", "EUR"), row("D2", "EUR", "USD")])
            .await;

        let deals = service.list_all().await.unwrap();

        assert_eq!(deals.len(), 2);
        assert_eq!(deals[0].deal_id.as_str(), "D1");
    }

    #[tokio::test]
    async fn test_list_all_store_failure_is_internal() {
        let service = DealService::new(MockRepo::broken_reads());

        let err = service.list_all().await.unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }
}
