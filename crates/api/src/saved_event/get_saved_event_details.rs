use super::get_saved_event_ids::{self, GetSavedEventIdsUseCase};
use crate::{
    error::EventhubError,
    event::{GetEventUseCase, GetEventUseCaseErrors},
    shared::{
        auth::{protect_admin_route, protect_route},
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use eventhub_api_structs::{event_details_response, get_saved_event_details::*};
use eventhub_domain::Event;
use eventhub_infra::EventhubContext;
use futures::{stream, StreamExt};

// Stays below the store connection pool size
const MAX_CONCURRENT_LOOKUPS: usize = 4;

fn handle_error(e: UseCaseErrors) -> EventhubError {
    match e {
        UseCaseErrors::StoreUnavailable(e) => EventhubError::StoreUnavailable(e),
    }
}

pub async fn get_saved_event_details_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    protect_admin_route(&http_req, &ctx).await?;
    let user_id = Guard::against_empty_user_id(&path_params.user_id)?;

    let usecase = GetSavedEventDetailsUseCase { user_id };

    execute(usecase, &ctx)
        .await
        .map(|events| {
            let res: APIResponse = event_details_response(events);
            HttpResponse::Ok().json(res)
        })
        .map_err(handle_error)
}

pub async fn get_saved_event_details_controller(
    http_req: HttpRequest,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetSavedEventDetailsUseCase {
        user_id: user.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| {
            let res: APIResponse = event_details_response(events);
            HttpResponse::Ok().json(res)
        })
        .map_err(handle_error)
}

/// The saved `Event`s of the user, looked up one by one in the catalog.
///
/// Saved events that no longer exist in the catalog are left out, also
/// when they disappear between listing the ids and looking them up.
#[derive(Debug)]
pub struct GetSavedEventDetailsUseCase {
    pub user_id: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StoreUnavailable(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSavedEventDetailsUseCase {
    type Response = Vec<Event>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &EventhubContext) -> Result<Self::Response, Self::Errors> {
        let mut saved_ids_usecase = GetSavedEventIdsUseCase {
            user_id: self.user_id.clone(),
        };
        let event_ids = saved_ids_usecase.execute(ctx).await.map_err(|e| match e {
            get_saved_event_ids::UseCaseErrors::StoreUnavailable(e) => {
                UseCaseErrors::StoreUnavailable(e)
            }
        })?;

        let results = stream::iter(event_ids)
            .map(|event_id| async move {
                let mut lookup = GetEventUseCase { event_id };
                lookup.execute(ctx).await
            })
            .buffered(MAX_CONCURRENT_LOOKUPS)
            .collect::<Vec<_>>()
            .await;

        let mut events = Vec::with_capacity(results.len());
        for res in results {
            match res {
                Ok(event) => events.push(event),
                Err(GetEventUseCaseErrors::NotFound(_)) => continue,
                Err(GetEventUseCaseErrors::StoreUnavailable(e)) => {
                    return Err(UseCaseErrors::StoreUnavailable(e))
                }
            }
        }

        Ok(events)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::saved_event::save_events::SaveEventsUseCase;
    use crate::test_utils::{insert_event, setup_ctx, setup_stalled_ctx};
    use actix_web::{http::StatusCode, ResponseError};
    use eventhub_domain::ID;

    #[actix_web::test]
    async fn it_skips_saved_events_missing_from_the_catalog() {
        let ctx = setup_ctx();
        let jazz = insert_event(&ctx, "Sydney", "Jazz", 0).await;
        let rock = insert_event(&ctx, "Sydney", "Rock", 1).await;
        let removed = insert_event(&ctx, "Sydney", "Cancelled", 2).await;

        execute(
            SaveEventsUseCase {
                user_id: "user_1".into(),
                event_ids: vec![jazz.id, removed.id, ID::new(), rock.id],
            },
            &ctx,
        )
        .await
        .expect("To save events");
        ctx.repos
            .events
            .delete(&removed.id)
            .await
            .expect("To delete event");

        let events = execute(
            GetSavedEventDetailsUseCase {
                user_id: "user_1".into(),
            },
            &ctx,
        )
        .await
        .expect("To get saved event details");
        assert_eq!(events, vec![jazz, rock]);
    }

    #[actix_web::test]
    async fn it_keeps_save_order_for_long_saved_lists() {
        let ctx = setup_ctx();
        let mut saved = Vec::new();
        for day in 0..(MAX_CONCURRENT_LOOKUPS as i64 * 3 + 1) {
            // Saved in reverse date order
            saved.insert(0, insert_event(&ctx, "Perth", "Gig", day).await);
        }

        execute(
            SaveEventsUseCase {
                user_id: "user_1".into(),
                event_ids: saved.iter().map(|e| e.id).collect(),
            },
            &ctx,
        )
        .await
        .expect("To save events");

        let events = execute(
            GetSavedEventDetailsUseCase {
                user_id: "user_1".into(),
            },
            &ctx,
        )
        .await
        .expect("To get saved event details");
        assert_eq!(events, saved);
    }

    #[actix_web::test]
    async fn user_without_saved_events_gets_empty_list() {
        let ctx = setup_ctx();
        let events = execute(
            GetSavedEventDetailsUseCase {
                user_id: "user_1".into(),
            },
            &ctx,
        )
        .await
        .expect("To get saved event details");
        assert!(events.is_empty());
    }

    #[actix_web::test]
    async fn stalled_store_is_reported_unavailable() {
        let ctx = setup_stalled_ctx();
        let err = execute(GetSavedEventDetailsUseCase {
                user_id: "user_1".into(),
            }, &ctx)
            .await
            .expect_err("Expected the store to time out");

        let err = handle_error(err);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(matches!(err, EventhubError::StoreUnavailable(_)));
    }
}
