mod get_event;
mod get_event_cities;
mod get_events;

use actix_web::web;
use get_event::get_event_controller;
use get_event_cities::get_event_cities_controller;
use get_events::get_events_controller;

pub use get_event::{GetEventUseCase, UseCaseErrors as GetEventUseCaseErrors};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(get_events_controller));
    // Needs to be registered before `/events/{event_id}`
    cfg.route(
        "/events/cities",
        web::get().to(get_event_cities_controller),
    );
    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
}
