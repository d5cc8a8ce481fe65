use super::IEventRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::FindEventsResult};
use eventhub_domain::{Event, EventQuery, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        insert(e, &self.events)
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        find(event_id, &self.events)
    }

    async fn find_by_query(&self, query: &EventQuery) -> anyhow::Result<FindEventsResult> {
        let mut events = find_by(&self.events, |event| query.matches(event))?;
        events.sort_by(|e1, e2| e1.date.cmp(&e2.date).then_with(|| e1.id.cmp(&e2.id)));

        let total_events = events.len() as i64;
        let events = events
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.limit() as usize)
            .collect();

        Ok(FindEventsResult {
            events,
            total_events,
        })
    }

    async fn find_cities(&self) -> anyhow::Result<Vec<String>> {
        let mut cities = lock(&self.events)?
            .iter()
            .map(|e| e.city.clone())
            .collect::<Vec<_>>();
        cities.sort_by(|c1, c2| {
            c1.to_lowercase()
                .cmp(&c2.to_lowercase())
                .then_with(|| c1.cmp(c2))
        });
        cities.dedup_by(|c1, c2| c1.to_lowercase() == c2.to_lowercase());
        Ok(cities)
    }

    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        delete(event_id, &self.events)
    }
}
