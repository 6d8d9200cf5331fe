//! Offset pagination request/response types.

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_index: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Builds a request from a zero-based page index.
    pub fn of(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Builds a request from a 1-based page number.
    ///
    /// Page number `0` is treated as the first page.
    pub fn from_page_number(page_number: u32, page_size: u32) -> Self {
        Self::of(page_number.saturating_sub(1), page_size)
    }

    /// Number of rows skipped before this page starts.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_index) * u64::from(self.page_size)
    }
}

/// One page of an ordered listing plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_index: u32,
    pub page_size: u32,
    /// Size of the whole unpaged listing.
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_index: request.page_index,
            page_size: request.page_size,
            total_elements,
        }
    }

    /// Drops the metadata and keeps only the rows.
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Number of pages needed for the whole listing; `0` for a zero page size.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.page_size))
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.page_index) + 1 >= self.total_pages()
    }
}
