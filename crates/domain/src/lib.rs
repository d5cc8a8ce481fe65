mod event;
mod event_query;
mod pagination;
mod saved_event;
mod shared;

pub use event::{Event, InvalidEventError};
pub use event_query::EventQuery;
pub use pagination::{PageRequest, Pagination};
pub use saved_event::SavedEvent;
pub use shared::entity::{Entity, InvalidIDError, ID};
