//! 1-based page requests and paginated results.

use crate::model::api::PaginationDto;

pub const DEFAULT_PAGE_LIMIT: u64 = 20;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// A validated page request.
///
/// `page` starts at 1 and `limit` is clamped to `1..=MAX_PAGE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
        }
    }

    /// Zero-based page index as used by SeaORM paginators.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results together with the total item count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.request.limit)
    }

    pub fn pagination_dto(&self) -> PaginationDto {
        PaginationDto {
            page: self.request.page,
            limit: self.request.limit,
            total: self.total,
            total_pages: self.total_pages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let request = PageRequest::new(None, None);

        assert_eq!(request.page, 1);
        assert_eq!(request.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(request.index(), 0);
    }

    #[test]
    fn clamps_page_and_limit() {
        let request = PageRequest::new(Some(0), Some(10_000));

        assert_eq!(request.page, 1);
        assert_eq!(request.limit, MAX_PAGE_LIMIT);
        assert_eq!(PageRequest::new(Some(3), Some(0)).limit, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<()> = Page {
            items: vec![],
            total: 41,
            request: PageRequest::new(Some(1), Some(20)),
        };

        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.pagination_dto().total, 41);
    }
}
