use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// A public event in the catalog
///
/// Every attribute is required and non-empty, which is checked when the
/// `Event` is constructed through `Event::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: ID,
    pub city: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub image_url: String,
    pub venue: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidEventError {
    #[error("Event attribute `{0}` must not be empty")]
    EmptyAttribute(&'static str),
}

impl Event {
    pub fn new(
        city: String,
        title: String,
        date: DateTime<Utc>,
        image_url: String,
        venue: String,
    ) -> Result<Self, InvalidEventError> {
        let attributes = [
            ("city", &city),
            ("title", &title),
            ("imageUrl", &image_url),
            ("venue", &venue),
        ];
        for (name, value) in attributes.iter() {
            if value.trim().is_empty() {
                return Err(InvalidEventError::EmptyAttribute(*name));
            }
        }

        Ok(Self {
            id: Default::default(),
            city,
            title,
            date,
            image_url,
            venue,
        })
    }

    /// Case insensitive substring match against the title
    pub fn title_contains(&self, search: &str) -> bool {
        self.title.to_lowercase().contains(&search.to_lowercase())
    }

    /// Case insensitive equality against the city
    pub fn is_in_city(&self, city: &str) -> bool {
        self.city.to_lowercase() == city.to_lowercase()
    }
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}
