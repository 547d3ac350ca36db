//! Process-local repository adapter backed by `DashMap`.
//!
//! Nothing survives a restart. Useful for tests and for running the service
//! without a database (`DATABASE_URL=memory://`).

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

use fxdeals_types::{Deal, DealId, DealRepository, NewDeal, RepoError};

/// In-memory deal store.
///
/// Each deal is tagged with an insertion sequence so `list_all` can return
/// creation order even when two deals share a `created_at`.
#[derive(Default)]
pub struct InMemoryRepo {
    deals: DashMap<DealId, (u64, Deal)>,
    seq: AtomicU64,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

#[async_trait]
impl DealRepository for InMemoryRepo {
    async fn exists(&self, deal_id: &DealId) -> Result<bool, RepoError> {
        Ok(self.deals.contains_key(deal_id))
    }

    async fn persist(&self, deal: NewDeal) -> Result<Deal, RepoError> {
        // The entry guard holds the shard lock, so check-and-insert is atomic.
        match self.deals.entry(deal.deal_id.clone()) {
            Entry::Occupied(_) => Err(RepoError::Duplicate(deal.deal_id)),
            Entry::Vacant(slot) => {
                let seq = self.seq.fetch_add(1, Ordering::Relaxed);
                let stored = deal.into_deal(chrono::Utc::now());
                slot.insert((seq, stored.clone()));
                Ok(stored)
            }
        }
    }

    async fn list_all(&self) -> Result<Vec<Deal>, RepoError> {
        let mut rows: Vec<(u64, Deal)> = self
            .deals
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);

        Ok(rows.into_iter().map(|(_, deal)| deal).collect())
    }
}
