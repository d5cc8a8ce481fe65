use super::ISavedEventRepo;
use crate::repos::shared::inmemory_repo::lock;
use eventhub_domain::{SavedEvent, ID};

pub struct InMemorySavedEventRepo {
    saved_events: std::sync::Mutex<Vec<SavedEvent>>,
}

impl InMemorySavedEventRepo {
    pub fn new() -> Self {
        Self {
            saved_events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISavedEventRepo for InMemorySavedEventRepo {
    async fn insert_many(&self, user_id: &str, event_ids: &[ID]) -> anyhow::Result<()> {
        let mut saved_events = lock(&self.saved_events)?;
        for event_id in event_ids {
            let exists = saved_events
                .iter()
                .any(|s| s.user_id == user_id && s.event_id == *event_id);
            if !exists {
                saved_events.push(SavedEvent {
                    user_id: user_id.to_string(),
                    event_id: *event_id,
                });
            }
        }
        Ok(())
    }

    async fn delete_many(&self, user_id: &str, event_ids: &[ID]) -> anyhow::Result<()> {
        let mut saved_events = lock(&self.saved_events)?;
        saved_events.retain(|s| !(s.user_id == user_id && event_ids.contains(&s.event_id)));
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<ID>> {
        let saved_events = lock(&self.saved_events)?;
        Ok(saved_events
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.event_id)
            .collect())
    }
}
