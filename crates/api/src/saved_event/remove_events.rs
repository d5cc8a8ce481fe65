use crate::{
    error::EventhubError,
    shared::{
        auth::{protect_admin_route, protect_route},
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use eventhub_api_structs::remove_events::*;
use eventhub_domain::ID;
use eventhub_infra::EventhubContext;

fn handle_error(e: UseCaseErrors) -> EventhubError {
    match e {
        UseCaseErrors::StoreUnavailable(e) => EventhubError::StoreUnavailable(e),
    }
}

pub async fn remove_events_admin_controller(
    http_req: HttpRequest,
    body: web::Json<AdminRequestBody>,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    protect_admin_route(&http_req, &ctx).await?;
    let user_id = Guard::against_empty_user_id(&body.user_id)?;
    let event_ids = Guard::against_invalid_event_ids(&body.event_ids)?;

    let usecase = RemoveEventsUseCase { user_id, event_ids };

    execute(usecase, &ctx)
        .await
        .map(|event_ids| HttpResponse::Ok().json(APIResponse::new(event_ids)))
        .map_err(handle_error)
}

pub async fn remove_events_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    let user = protect_route(&http_req, &ctx).await?;
    let event_ids = Guard::against_invalid_event_ids(&body.event_ids)?;

    let usecase = RemoveEventsUseCase {
        user_id: user.user_id,
        event_ids,
    };

    execute(usecase, &ctx)
        .await
        .map(|event_ids| HttpResponse::Ok().json(APIResponse::new(event_ids)))
        .map_err(handle_error)
}

/// Removes the `Event`s from the saved events of the user. `Event`s that
/// were never saved are ignored.
#[derive(Debug)]
pub struct RemoveEventsUseCase {
    pub user_id: String,
    pub event_ids: Vec<ID>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StoreUnavailable(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for RemoveEventsUseCase {
    /// All the saved event ids of the user after removing
    type Response = Vec<ID>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &EventhubContext) -> Result<Self::Response, Self::Errors> {
        ctx.store(
            ctx.repos
                .saved_events
                .delete_many(&self.user_id, &self.event_ids),
        )
        .await
        .map_err(|e| UseCaseErrors::StoreUnavailable(e.to_string()))?;

        ctx.store(ctx.repos.saved_events.find_by_user(&self.user_id))
            .await
            .map_err(|e| UseCaseErrors::StoreUnavailable(e.to_string()))
    }
}
