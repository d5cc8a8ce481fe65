use serde::{Deserialize, Serialize};

/// A requested page, clamped into valid bounds.
///
/// `page` is 1-based and at least 1, `limit` is within `1..=max_limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>, default_limit: i64, max_limit: i64) -> Self {
        let max_limit = max_limit.max(1);
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(default_limit).max(1).min(max_limit),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of matching records to skip before this page starts
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_events: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn new(request: &PageRequest, total_events: i64) -> Self {
        let total_events = total_events.max(0);
        let limit = request.limit();
        let total_pages = (total_events + limit - 1) / limit;
        Self {
            current_page: request.page(),
            total_pages,
            total_events,
            has_next_page: request.page() < total_pages,
            has_prev_page: request.page() > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_uses_defaults_when_nothing_is_requested() {
        let req = PageRequest::new(None, None, 20, 100);
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 20);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn it_clamps_page_and_limit() {
        let req = PageRequest::new(Some(0), Some(0), 20, 100);
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 1);

        let req = PageRequest::new(Some(-4), Some(5000), 20, 100);
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 100);

        let req = PageRequest::new(Some(3), Some(25), 20, 100);
        assert_eq!(req.offset(), 50);
    }

    #[test]
    fn it_calculates_pages_for_partial_last_page() {
        let req = PageRequest::new(Some(1), Some(20), 20, 100);
        let pagination = Pagination::new(&req, 41);
        assert_eq!(pagination.total_pages, 3);
        assert!(pagination.has_next_page);
        assert!(!pagination.has_prev_page);

        let req = PageRequest::new(Some(3), Some(20), 20, 100);
        let pagination = Pagination::new(&req, 41);
        assert!(!pagination.has_next_page);
        assert!(pagination.has_prev_page);
    }

    #[test]
    fn it_calculates_pages_for_exact_multiple() {
        let req = PageRequest::new(Some(2), Some(10), 20, 100);
        let pagination = Pagination::new(&req, 20);
        assert_eq!(pagination.total_pages, 2);
        assert!(!pagination.has_next_page);
        assert!(pagination.has_prev_page);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let req = PageRequest::new(None, None, 20, 100);
        let pagination = Pagination::new(&req, 0);
        assert_eq!(
            pagination,
            Pagination {
                current_page: 1,
                total_pages: 0,
                total_events: 0,
                has_next_page: false,
                has_prev_page: false,
            }
        );
    }

    #[test]
    fn page_beyond_the_end_has_no_next_page() {
        let req = PageRequest::new(Some(9), Some(10), 20, 100);
        let pagination = Pagination::new(&req, 15);
        assert_eq!(pagination.total_pages, 2);
        assert!(!pagination.has_next_page);
        assert!(pagination.has_prev_page);
    }
}
