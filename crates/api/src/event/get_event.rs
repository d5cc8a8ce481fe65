use crate::{
    error::EventhubError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use eventhub_api_structs::get_event::*;
use eventhub_domain::{Event, ID};
use eventhub_infra::EventhubContext;

fn handle_error(e: UseCaseErrors) -> EventhubError {
    match e {
        UseCaseErrors::NotFound(event_id) => EventhubError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
        UseCaseErrors::StoreUnavailable(e) => EventhubError::StoreUnavailable(e),
    }
}

pub async fn get_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    let usecase = GetEventUseCase {
        event_id: path_params.event_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StoreUnavailable(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &EventhubContext) -> Result<Self::Response, Self::Errors> {
        let event = ctx
            .store(ctx.repos.events.find(&self.event_id))
            .await
            .map_err(|e| UseCaseErrors::StoreUnavailable(e.to_string()))?;

        event.ok_or(UseCaseErrors::NotFound(self.event_id))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{insert_event, setup_ctx, setup_stalled_ctx};
    use actix_web::{http::StatusCode, ResponseError};

    #[actix_web::test]
    async fn it_finds_existing_event() {
        let ctx = setup_ctx();
        let event = insert_event(&ctx, "Sydney", "Jazz", 0).await;

        let res = execute(GetEventUseCase { event_id: event.id }, &ctx).await;
        assert_eq!(res.expect("To find event"), event);
    }

    #[actix_web::test]
    async fn it_reports_missing_event() {
        let ctx = setup_ctx();
        let event_id = ID::new();

        let res = execute(GetEventUseCase { event_id }, &ctx).await;
        match res {
            Err(UseCaseErrors::NotFound(id)) => assert_eq!(id, event_id),
            _ => panic!("Expected the event to not be found"),
        }
    }

    #[actix_web::test]
    async fn stalled_store_is_reported_unavailable() {
        let ctx = setup_stalled_ctx();
        let err = execute(GetEventUseCase { event_id: ID::new() }, &ctx)
            .await
            .expect_err("Expected the store to time out");

        let err = handle_error(err);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(matches!(err, EventhubError::StoreUnavailable(_)));
    }
}
