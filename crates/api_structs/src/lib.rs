mod event;
mod saved_event;
mod status;

pub mod dtos {
    pub use crate::event::dtos::*;
}

pub use crate::event::api::*;
pub use crate::saved_event::api::*;
pub use crate::status::api::*;
