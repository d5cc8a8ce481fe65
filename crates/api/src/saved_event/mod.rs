mod get_saved_event_details;
mod get_saved_event_ids;
mod remove_events;
mod save_events;

use actix_web::web;
use get_saved_event_details::{
    get_saved_event_details_admin_controller, get_saved_event_details_controller,
};
use get_saved_event_ids::{get_saved_event_ids_admin_controller, get_saved_event_ids_controller};
use remove_events::{remove_events_admin_controller, remove_events_controller};
use save_events::{save_events_admin_controller, save_events_controller};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // The user is the one given by the identity token
    cfg.route("/me/events", web::get().to(get_saved_event_ids_controller));
    cfg.route(
        "/me/events/details",
        web::get().to(get_saved_event_details_controller),
    );
    cfg.route("/me/events", web::post().to(save_events_controller));
    cfg.route("/me/events", web::delete().to(remove_events_controller));

    // Back office routes where the client names the user
    cfg.route(
        "/user/{user_id}/events",
        web::get().to(get_saved_event_ids_admin_controller),
    );
    cfg.route(
        "/user/{user_id}/events/details",
        web::get().to(get_saved_event_details_admin_controller),
    );
    cfg.route("/user/events", web::post().to(save_events_admin_controller));
    cfg.route(
        "/user/events",
        web::delete().to(remove_events_admin_controller),
    );
}
