mod inmemory;
mod postgres;

use eventhub_domain::ID;
pub use inmemory::InMemorySavedEventRepo;
pub use postgres::PostgresSavedEventRepo;

/// Store of the (user, event) associations.
///
/// Batches are applied all or nothing and both writes are idempotent:
/// inserting an existing association or deleting a missing one changes nothing.
#[async_trait::async_trait]
pub trait ISavedEventRepo: Send + Sync {
    async fn insert_many(&self, user_id: &str, event_ids: &[ID]) -> anyhow::Result<()>;
    async fn delete_many(&self, user_id: &str, event_ids: &[ID]) -> anyhow::Result<()>;
    /// Saved event ids of the user in the order they were first saved
    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<ID>>;
}
