use crate::dtos::EventDTO;
use eventhub_domain::{Event, ID};
use serde::{Deserialize, Serialize};

/// Saved event ids of the user after a write
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SavedEventsResponse {
    pub event_ids: Vec<ID>,
}

impl SavedEventsResponse {
    pub fn new(event_ids: Vec<ID>) -> Self {
        Self { event_ids }
    }
}

pub fn event_details_response(events: Vec<Event>) -> Vec<EventDTO> {
    events.into_iter().map(EventDTO::new).collect()
}

pub mod get_saved_event_ids {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: String,
    }

    pub type APIResponse = Vec<ID>;
}

pub mod get_saved_event_details {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: String,
    }

    pub type APIResponse = Vec<EventDTO>;
}

pub mod save_events {
    use super::*;

    /// Body for the routes where the user is given by the identity token
    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub event_ids: Vec<String>,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct AdminRequestBody {
        pub user_id: String,
        pub event_ids: Vec<String>,
    }

    pub type APIResponse = SavedEventsResponse;
}

pub mod remove_events {
    use super::*;

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub event_ids: Vec<String>,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct AdminRequestBody {
        pub user_id: String,
        pub event_ids: Vec<String>,
    }

    pub type APIResponse = SavedEventsResponse;
}
