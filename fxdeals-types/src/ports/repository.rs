//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, InMemory) implement this trait.

use crate::domain::{Deal, DealId, NewDeal};
use crate::error::RepoError;

/// The deal store.
///
/// Deals are append-only: there is no update or delete. Every implementation
/// MUST enforce identifier uniqueness inside `persist` itself and report a
/// collision as `RepoError::Duplicate`, because callers check `exists` and
/// `persist` as two separate steps.
#[async_trait::async_trait]
pub trait DealRepository: Send + Sync + 'static {
    /// Returns true if a deal with this identifier is already stored.
    async fn exists(&self, deal_id: &DealId) -> Result<bool, RepoError>;

    /// Stores a new deal, assigning `created_at` from the server clock.
    async fn persist(&self, deal: NewDeal) -> Result<Deal, RepoError>;

    /// Lists every stored deal, oldest first.
    async fn list_all(&self) -> Result<Vec<Deal>, RepoError>;
}
