mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::FindEventsResult;
use eventhub_domain::{Event, EventQuery, ID};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<Event>>;
    /// Matching `Event`s ordered by date and then id
    async fn find_by_query(&self, query: &EventQuery) -> anyhow::Result<FindEventsResult>;
    /// Distinct cities, ignoring case, sorted alphabetically
    async fn find_cities(&self) -> anyhow::Result<Vec<String>>;
    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<Event>>;
}
