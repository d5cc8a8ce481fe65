use chrono::{DateTime, Utc};
use eventhub_domain::{Event, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub city: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub image_url: String,
    pub venue: String,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            id: event.id,
            city: event.city,
            title: event.title,
            date: event.date,
            image_url: event.image_url,
            venue: event.venue,
        }
    }
}
