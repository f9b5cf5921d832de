//! Page request clamping and page metadata.

/// A normalized page request.
///
/// Page numbers are one-based on the wire and clamped to a minimum of 1;
/// page sizes are clamped to `[1, 100]` regardless of what was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

/// Largest page size a caller can request.
pub const MAX_PAGE_SIZE: i64 = 100;

impl PageRequest {
    #[must_use]
    pub fn clamped(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: u32::try_from(page_number.max(1)).unwrap_or(u32::MAX),
            page_size: u32::try_from(page_size.clamp(1, MAX_PAGE_SIZE)).unwrap_or(1),
        }
    }

    #[must_use]
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Row limit for the backing query.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Row offset for the backing query (page numbers are zero-indexed
    /// internally).
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page_number - 1) * i64::from(self.page_size)
    }
}

/// One page of records plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub page_number: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, total_elements: u64, request: PageRequest) -> Self {
        let page_size = u64::from(request.page_size());
        let total_pages = total_elements.div_ceil(page_size);

        Self {
            items,
            total_elements,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
            page_number: request.page_number(),
            page_size: request.page_size(),
        }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_is_clamped_to_minimum_one() {
        assert_eq!(PageRequest::clamped(0, 10).page_number(), 1);
        assert_eq!(PageRequest::clamped(-5, 10).page_number(), 1);
        assert_eq!(PageRequest::clamped(3, 10).page_number(), 3);
    }

    #[test]
    fn page_size_is_clamped_to_one_hundred() {
        assert_eq!(PageRequest::clamped(1, 500).page_size(), 100);
        assert_eq!(PageRequest::clamped(1, 0).page_size(), 1);
        assert_eq!(PageRequest::clamped(1, -1).page_size(), 1);
        assert_eq!(PageRequest::clamped(1, 25).page_size(), 25);
    }

    #[test]
    fn offset_is_zero_indexed() {
        assert_eq!(PageRequest::clamped(1, 10).offset(), 0);
        assert_eq!(PageRequest::clamped(3, 10).offset(), 20);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<i32> = Page::new(vec![], 11, PageRequest::clamped(1, 10));

        assert_eq!(page.total_pages, 2);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let page: Page<i32> = Page::new(vec![], 0, PageRequest::clamped(1, 10));

        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }
}
