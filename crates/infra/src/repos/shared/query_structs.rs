use eventhub_domain::Event;

/// One page of `Event`s together with the number of `Event`s
/// matching the query across all pages
#[derive(Debug, Clone)]
pub struct FindEventsResult {
    pub events: Vec<Event>,
    pub total_events: i64,
}
