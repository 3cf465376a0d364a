//! Paging envelope shared by list endpoints.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// True when there is no further page after this one.
    pub fn is_last(&self) -> bool {
        self.page.saturating_add(1) >= self.total_pages
    }
}

/// Page/size query parameters. Absent values are left to backend defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }
}

/// Sort plus paging for listings that accept an ordering (e.g. `"latest"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ListParams {
    pub fn sorted(sort: impl Into<String>) -> Self {
        Self {
            sort: Some(sort.into()),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }
}
