use crate::{
    error::EventhubError,
    shared::{
        auth::{protect_admin_route, protect_route},
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use eventhub_api_structs::get_saved_event_ids::*;
use eventhub_domain::ID;
use eventhub_infra::EventhubContext;

fn handle_error(e: UseCaseErrors) -> EventhubError {
    match e {
        UseCaseErrors::StoreUnavailable(e) => EventhubError::StoreUnavailable(e),
    }
}

pub async fn get_saved_event_ids_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    protect_admin_route(&http_req, &ctx).await?;
    let user_id = Guard::against_empty_user_id(&path_params.user_id)?;

    let usecase = GetSavedEventIdsUseCase { user_id };

    execute(usecase, &ctx)
        .await
        .map(|event_ids| {
            let res: APIResponse = event_ids;
            HttpResponse::Ok().json(res)
        })
        .map_err(handle_error)
}

pub async fn get_saved_event_ids_controller(
    http_req: HttpRequest,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetSavedEventIdsUseCase {
        user_id: user.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|event_ids| {
            let res: APIResponse = event_ids;
            HttpResponse::Ok().json(res)
        })
        .map_err(handle_error)
}

/// The ids of the `Event`s the user has saved. A user that has not saved
/// anything, or is not known at all, simply has none.
#[derive(Debug)]
pub struct GetSavedEventIdsUseCase {
    pub user_id: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StoreUnavailable(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSavedEventIdsUseCase {
    type Response = Vec<ID>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &EventhubContext) -> Result<Self::Response, Self::Errors> {
        ctx.store(ctx.repos.saved_events.find_by_user(&self.user_id))
            .await
            .map_err(|e| UseCaseErrors::StoreUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::setup_ctx;

    #[actix_web::test]
    async fn unknown_user_has_no_saved_events() {
        let ctx = setup_ctx();
        let usecase = GetSavedEventIdsUseCase {
            user_id: "user_never_seen".into(),
        };
        let res = execute(usecase, &ctx).await.expect("To list saved events");
        assert!(res.is_empty());
    }
}
