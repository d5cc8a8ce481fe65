use crate::shared::entity::ID;

/// Records that the user with `user_id` has saved the `Event` with `event_id`.
///
/// `user_id` comes from the identity provider and is opaque to this service.
/// The association is not removed when the referenced `Event` is, so
/// `event_id` might not resolve to anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedEvent {
    pub user_id: String,
    pub event_id: ID,
}
