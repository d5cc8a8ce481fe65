use crate::{
    error::EventhubError,
    shared::{
        auth::{protect_admin_route, protect_route},
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use eventhub_api_structs::save_events::*;
use eventhub_domain::ID;
use eventhub_infra::EventhubContext;

fn handle_error(e: UseCaseErrors) -> EventhubError {
    match e {
        UseCaseErrors::StoreUnavailable(e) => EventhubError::StoreUnavailable(e),
    }
}

pub async fn save_events_admin_controller(
    http_req: HttpRequest,
    body: web::Json<AdminRequestBody>,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    protect_admin_route(&http_req, &ctx).await?;
    let user_id = Guard::against_empty_user_id(&body.user_id)?;
    let event_ids = Guard::against_invalid_event_ids(&body.event_ids)?;

    let usecase = SaveEventsUseCase { user_id, event_ids };

    execute(usecase, &ctx)
        .await
        .map(|event_ids| HttpResponse::Ok().json(APIResponse::new(event_ids)))
        .map_err(handle_error)
}

pub async fn save_events_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    let user = protect_route(&http_req, &ctx).await?;
    let event_ids = Guard::against_invalid_event_ids(&body.event_ids)?;

    let usecase = SaveEventsUseCase {
        user_id: user.user_id,
        event_ids,
    };

    execute(usecase, &ctx)
        .await
        .map(|event_ids| HttpResponse::Ok().json(APIResponse::new(event_ids)))
        .map_err(handle_error)
}

/// Saves the `Event`s for the user. Already saved `Event`s stay as they are
/// and the `Event`s are not required to exist.
#[derive(Debug)]
pub struct SaveEventsUseCase {
    pub user_id: String,
    pub event_ids: Vec<ID>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StoreUnavailable(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SaveEventsUseCase {
    /// All the saved event ids of the user after saving
    type Response = Vec<ID>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &EventhubContext) -> Result<Self::Response, Self::Errors> {
        ctx.store(
            ctx.repos
                .saved_events
                .insert_many(&self.user_id, &self.event_ids),
        )
        .await
        .map_err(|e| UseCaseErrors::StoreUnavailable(e.to_string()))?;

        ctx.store(ctx.repos.saved_events.find_by_user(&self.user_id))
            .await
            .map_err(|e| UseCaseErrors::StoreUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{setup_ctx, setup_stalled_ctx};
    use actix_web::{http::StatusCode, ResponseError};

    async fn save(ctx: &EventhubContext, user_id: &str, event_ids: Vec<ID>) -> Vec<ID> {
        let usecase = SaveEventsUseCase {
            user_id: user_id.into(),
            event_ids,
        };
        execute(usecase, ctx).await.expect("To save events")
    }

    #[actix_web::test]
    async fn saving_twice_keeps_one_association() {
        let ctx = setup_ctx();
        let event_id = ID::new();

        let first = save(&ctx, "user_1", vec![event_id]).await;
        let second = save(&ctx, "user_1", vec![event_id]).await;
        assert_eq!(first, vec![event_id]);
        assert_eq!(second, first);
    }

    #[actix_web::test]
    async fn it_saves_events_that_do_not_exist() {
        let ctx = setup_ctx();
        let dangling = ID::new();

        let saved = save(&ctx, "user_1", vec![dangling]).await;
        assert_eq!(saved, vec![dangling]);
    }

    #[actix_web::test]
    async fn it_adds_to_existing_saved_events() {
        let ctx = setup_ctx();
        let event_1 = ID::new();
        let event_2 = ID::new();

        save(&ctx, "user_1", vec![event_1]).await;
        let saved = save(&ctx, "user_1", vec![event_2, event_1]).await;
        assert_eq!(saved, vec![event_1, event_2]);
    }

    #[actix_web::test]
    async fn stalled_store_is_reported_unavailable() {
        let ctx = setup_stalled_ctx();
        let err = execute(SaveEventsUseCase {
                user_id: "user_1".into(),
                event_ids: vec![ID::new()],
            }, &ctx)
            .await
            .expect_err("Expected the store to time out");

        let err = handle_error(err);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(matches!(err, EventhubError::StoreUnavailable(_)));
    }
}
