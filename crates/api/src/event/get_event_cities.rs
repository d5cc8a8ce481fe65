use crate::{
    error::EventhubError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use eventhub_api_structs::get_event_cities::*;
use eventhub_infra::EventhubContext;

fn handle_error(e: UseCaseErrors) -> EventhubError {
    match e {
        UseCaseErrors::StoreUnavailable(e) => EventhubError::StoreUnavailable(e),
    }
}

pub async fn get_event_cities_controller(
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    execute(GetEventCitiesUseCase {}, &ctx)
        .await
        .map(|cities| {
            let res: APIResponse = cities;
            HttpResponse::Ok().json(res)
        })
        .map_err(handle_error)
}

/// Cities that have at least one `Event`, for clients to build a city filter from
#[derive(Debug)]
pub struct GetEventCitiesUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StoreUnavailable(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventCitiesUseCase {
    type Response = Vec<String>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &EventhubContext) -> Result<Self::Response, Self::Errors> {
        ctx.store(ctx.repos.events.find_cities())
            .await
            .map_err(|e| UseCaseErrors::StoreUnavailable(e.to_string()))
    }
}
