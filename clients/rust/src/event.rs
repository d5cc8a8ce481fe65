use crate::{APIResponse, BaseClient, ID};
use eventhub_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Default)]
pub struct GetEventsInput {
    pub search: Option<String>,
    pub city: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self, input: GetEventsInput) -> APIResponse<get_events::APIResponse> {
        let query = get_events::QueryParams {
            search: input.search,
            city: input.city,
            page: input.page,
            limit: input.limit,
        };
        self.base
            .get_with_query(&query, "events".into(), StatusCode::OK)
            .await
    }

    pub async fn get(&self, event_id: &ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn cities(&self) -> APIResponse<get_event_cities::APIResponse> {
        self.base.get("events/cities".into(), StatusCode::OK).await
    }
}
