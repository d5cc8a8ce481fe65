use crate::{
    error::EventhubError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use eventhub_api_structs::get_events::*;
use eventhub_domain::{Event, EventQuery, PageRequest, Pagination};
use eventhub_infra::EventhubContext;

fn handle_error(e: UseCaseErrors) -> EventhubError {
    match e {
        UseCaseErrors::StoreUnavailable(e) => EventhubError::StoreUnavailable(e),
    }
}

pub async fn get_events_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<EventhubContext>,
) -> Result<HttpResponse, EventhubError> {
    let query_params = query_params.into_inner();
    let page = PageRequest::new(
        query_params.page,
        query_params.limit,
        ctx.config.default_page_size,
        ctx.config.max_page_size,
    );
    let usecase = GetEventsUseCase {
        query: EventQuery::new(query_params.search, query_params.city, page),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.events, res.pagination)))
        .map_err(handle_error)
}

/// Lists one page of the `Event`s matching the search and city filters.
/// No matches is not an error, just an empty page.
#[derive(Debug)]
pub struct GetEventsUseCase {
    pub query: EventQuery,
}

#[derive(Debug, PartialEq)]
pub struct UseCaseResponse {
    pub events: Vec<Event>,
    pub pagination: Pagination,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StoreUnavailable(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &EventhubContext) -> Result<Self::Response, Self::Errors> {
        let res = ctx
            .store(ctx.repos.events.find_by_query(&self.query))
            .await
            .map_err(|e| UseCaseErrors::StoreUnavailable(e.to_string()))?;

        Ok(UseCaseResponse {
            pagination: Pagination::new(&self.query.page, res.total_events),
            events: res.events,
        })
    }
}
