mod base;
mod event;
mod saved_event;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use event::EventClient;
pub use event::GetEventsInput;
pub use eventhub_api_structs::dtos::*;
pub use eventhub_domain::{Pagination, ID};
use saved_event::SavedEventClient;
pub use saved_event::{RemoveEventsInput, SaveEventsInput};
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use eventhub_api_structs::dtos::EventDTO as Event;
pub use eventhub_api_structs::SavedEventsResponse as SavedEvents;

/// Eventhub Server SDK
///
/// The SDK contains methods for interacting with the Eventhub server
/// API.
#[derive(Clone)]
pub struct EventhubSDK {
    pub event: EventClient,
    pub saved_event: SavedEventClient,
    pub status: StatusClient,
}

impl EventhubSDK {
    /// Client authenticated with the admin api key, for the `/user` routes
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        Self::from_base(base)
    }

    /// Client acting as the user owning the identity token, for the `/me` routes
    pub fn with_identity_token<T: Into<String>>(address: String, identity_token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_identity_token(identity_token.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let event = EventClient::new(base.clone());
        let saved_event = SavedEventClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            event,
            saved_event,
            status,
        }
    }
}
