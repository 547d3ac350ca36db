//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use fxdeals_types::{CurrencyCode, DealId, DealRepository, NewDeal, RepoError};
    use rust_decimal_macros::dec;

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn new_deal(id: &str) -> NewDeal {
        NewDeal {
            deal_id: DealId::new(id),
            from_currency: CurrencyCode::USD,
            to_currency: CurrencyCode::MAD,
            deal_timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            deal_amount: dec!(1000.50),
        }
    }

    #[tokio::test]
    async fn test_persist_and_exists() {
        let repo = setup_repo().await;

        assert!(!repo.exists(&DealId::new("DEAL001")).await.unwrap());

        let deal = repo.persist(new_deal("DEAL001")).await.unwrap();

        assert_eq!(deal.deal_id.as_str(), "DEAL001");
        assert!(repo.exists(&DealId::new("DEAL001")).await.unwrap());
    }

    #[tokio::test]
    async fn test_persist_duplicate_rejected_by_store() {
        let repo = setup_repo().await;
        repo.persist(new_deal("DEAL001")).await.unwrap();

        let result = repo.persist(new_deal("DEAL001")).await;

        assert!(matches!(result, Err(RepoError::Duplicate(id)) if id.as_str() == "DEAL001"));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let repo = setup_repo().await;

        let deals = repo.list_all().await.unwrap();

        assert!(deals.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_oldest_first() {
        let repo = setup_repo().await;
        for id in ["DEAL003", "DEAL001", "DEAL002"] {
            repo.persist(new_deal(id)).await.unwrap();
        }

        let deals = repo.list_all().await.unwrap();
        let ids: Vec<&str> = deals.iter().map(|d| d.deal_id.as_str()).collect();

        assert_eq!(ids, vec!["DEAL003", "DEAL001", "DEAL002"]);
        assert!(deals.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn test_fields_survive_storage() {
        let repo = setup_repo().await;
        let mut deal = new_deal("DEAL009");
        deal.from_currency = CurrencyCode::EUR;
        deal.to_currency = CurrencyCode::JPY;
        deal.deal_amount = dec!(0.01);

        let persisted = repo.persist(deal.clone()).await.unwrap();
        let listed = repo.list_all().await.unwrap().remove(0);

        assert_eq!(listed, persisted);
        assert_eq!(listed.from_currency, CurrencyCode::EUR);
        assert_eq!(listed.to_currency, CurrencyCode::JPY);
        assert_eq!(listed.deal_amount, dec!(0.01));
        assert_eq!(listed.deal_timestamp, deal.deal_timestamp);
    }

    #[tokio::test]
    async fn test_created_at_assigned_by_store() {
        let repo = setup_repo().await;
        let before = Utc::now();

        let deal = repo.persist(new_deal("DEAL001")).await.unwrap();

        assert!(deal.created_at >= before);
        assert!(deal.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_file_backed_store_persists_across_reopen() {
        let dir = std::env::temp_dir().join(format!("fxdeals-repo-{}", std::process::id()));
        let url = format!("sqlite://{}/deals.db", dir.display());

        {
            let repo = SqliteRepo::new(&url).await.unwrap();
            repo.persist(new_deal("DEAL001")).await.unwrap();
            repo.pool().close().await;
        }

        let reopened = SqliteRepo::new(&url).await.unwrap();
        assert!(reopened.exists(&DealId::new("DEAL001")).await.unwrap());

        reopened.pool().close().await;
        let _ = std::fs::remove_dir_all(dir);
    }
}
