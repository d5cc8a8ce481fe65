use crate::dtos::EventDTO;
use eventhub_domain::{Event, Pagination, ID};
use serde::{Deserialize, Serialize};

pub mod get_events {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub search: Option<String>,
        pub city: Option<String>,
        pub page: Option<i64>,
        pub limit: Option<i64>,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<EventDTO>,
        pub pagination: Pagination,
    }

    impl APIResponse {
        pub fn new(events: Vec<Event>, pagination: Pagination) -> Self {
            Self {
                events: events.into_iter().map(EventDTO::new).collect(),
                pagination,
            }
        }
    }
}

pub mod get_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventDTO;
}

pub mod get_event_cities {
    pub type APIResponse = Vec<String>;
}
