use crate::{APIResponse, BaseClient, ID};
use eventhub_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SavedEventClient {
    base: Arc<BaseClient>,
}

pub struct SaveEventsInput {
    pub user_id: String,
    pub event_ids: Vec<ID>,
}

pub struct RemoveEventsInput {
    pub user_id: String,
    pub event_ids: Vec<ID>,
}

/// Percent encodes an opaque user id for use as a single path segment
fn user_path(user_id: &str, rest: &str) -> String {
    let user_id = url::form_urlencoded::byte_serialize(user_id.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("user/{}/{}", user_id, rest)
}

fn as_strings(event_ids: &[ID]) -> Vec<String> {
    event_ids.iter().map(|id| id.as_string()).collect()
}

impl SavedEventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_ids(&self, user_id: &str) -> APIResponse<get_saved_event_ids::APIResponse> {
        self.base
            .get(user_path(user_id, "events"), StatusCode::OK)
            .await
    }

    pub async fn get_details(
        &self,
        user_id: &str,
    ) -> APIResponse<get_saved_event_details::APIResponse> {
        self.base
            .get(user_path(user_id, "events/details"), StatusCode::OK)
            .await
    }

    pub async fn save(&self, input: SaveEventsInput) -> APIResponse<save_events::APIResponse> {
        let body = save_events::AdminRequestBody {
            user_id: input.user_id,
            event_ids: as_strings(&input.event_ids),
        };
        self.base
            .post(body, "user/events".into(), StatusCode::OK)
            .await
    }

    pub async fn remove(
        &self,
        input: RemoveEventsInput,
    ) -> APIResponse<remove_events::APIResponse> {
        let body = remove_events::AdminRequestBody {
            user_id: input.user_id,
            event_ids: as_strings(&input.event_ids),
        };
        self.base
            .delete(body, "user/events".into(), StatusCode::OK)
            .await
    }

    /// Saved event ids of the user owning the identity token
    pub async fn get_my_ids(&self) -> APIResponse<get_saved_event_ids::APIResponse> {
        self.base.get("me/events".into(), StatusCode::OK).await
    }

    pub async fn get_my_details(&self) -> APIResponse<get_saved_event_details::APIResponse> {
        self.base
            .get("me/events/details".into(), StatusCode::OK)
            .await
    }

    pub async fn save_mine(&self, event_ids: &[ID]) -> APIResponse<save_events::APIResponse> {
        let body = save_events::RequestBody {
            event_ids: as_strings(event_ids),
        };
        self.base.post(body, "me/events".into(), StatusCode::OK).await
    }

    pub async fn remove_mine(&self, event_ids: &[ID]) -> APIResponse<remove_events::APIResponse> {
        let body = remove_events::RequestBody {
            event_ids: as_strings(event_ids),
        };
        self.base
            .delete(body, "me/events".into(), StatusCode::OK)
            .await
    }
}
