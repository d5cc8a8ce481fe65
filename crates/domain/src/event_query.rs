use crate::{event::Event, pagination::PageRequest};

/// Filter and page to list `Event`s with
///
/// `search` and `city` are `None` when they were absent or blank, so
/// repositories never need to deal with empty strings.
#[derive(Debug, Clone)]
pub struct EventQuery {
    pub search: Option<String>,
    pub city: Option<String>,
    pub page: PageRequest,
}

fn non_blank(val: Option<String>) -> Option<String> {
    val.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl EventQuery {
    pub fn new(search: Option<String>, city: Option<String>, page: PageRequest) -> Self {
        Self {
            search: non_blank(search),
            city: non_blank(city),
            page,
        }
    }

    /// Both filters have to match when both are given
    pub fn matches(&self, event: &Event) -> bool {
        let search_matches = match &self.search {
            Some(search) => event.title_contains(search),
            None => true,
        };
        let city_matches = match &self.city {
            Some(city) => event.is_in_city(city),
            None => true,
        };
        search_matches && city_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event(city: &str, title: &str) -> Event {
        Event::new(
            city.into(),
            title.into(),
            Utc::now(),
            "https://img.example.com/1.png".into(),
            "Town Hall".into(),
        )
        .expect("To create event")
    }

    fn page() -> PageRequest {
        PageRequest::new(None, None, 20, 100)
    }

    #[test]
    fn blank_filters_are_dropped() {
        let query = EventQuery::new(Some("   ".into()), Some("".into()), page());
        assert!(query.search.is_none());
        assert!(query.city.is_none());

        let query = EventQuery::new(Some(" jazz ".into()), Some(" Sydney".into()), page());
        assert_eq!(query.search, Some("jazz".into()));
        assert_eq!(query.city, Some("Sydney".into()));
    }

    #[test]
    fn filters_compose_with_and() {
        let query = EventQuery::new(Some("jazz".into()), Some("sydney".into()), page());
        assert!(query.matches(&event("Sydney", "Jazz in the park")));
        assert!(!query.matches(&event("Melbourne", "Jazz in the park")));
        assert!(!query.matches(&event("Sydney", "Rock in the park")));
    }

    #[test]
    fn no_filters_match_everything() {
        let query = EventQuery::new(None, None, page());
        assert!(query.matches(&event("Perth", "Anything")));
    }
}
