use std::fmt;

use super::types::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascend,
    Descend,
}

impl SortOrder {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Ascend => "asc",
            Self::Descend => "desc",
        }
    }
}

/// Column sort requested by the table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Wire name of the sorted field, e.g. `tenantNum`.
    pub field: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.order.as_wire())
    }
}

/// Paging requested by a table interaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageChange {
    /// First page with the default size: modal open and search button.
    #[default]
    FirstPage,
    /// Page, size or sort changed in the table.
    Goto {
        /// One-based page index.
        current: u32,
        page_size: u32,
        sort: Option<SortSpec>,
    },
}

/// Pagination descriptor of the assignment table.
///
/// `page_size` may temporarily exceed `base_page_size` while draft rows are
/// prepended to a full page, so every visible row stays on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// One-based page index.
    pub current: u32,
    pub page_size: u32,
    pub base_page_size: u32,
    pub total: u64,
    pub sort: Option<SortSpec>,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        let page_size = page_size.max(1);
        Self {
            current: 1,
            page_size,
            base_page_size: page_size,
            total: 0,
            sort: None,
        }
    }

    /// Builds the descriptor from a server page.
    pub fn from_page<T>(page: &Page<T>, fallback_size: u32, sort: Option<SortSpec>) -> Self {
        let page_size = if page.size == 0 {
            fallback_size.max(1)
        } else {
            page.size
        };
        Self {
            current: page.number.saturating_add(1),
            page_size,
            base_page_size: page_size,
            total: page.total_elements,
            sort,
        }
    }

    /// Accounts for one row prepended to a page that held `previous_len` rows.
    pub fn add_item(&self, previous_len: usize) -> Self {
        let mut next = self.clone();
        next.total = next.total.saturating_add(1);
        if previous_len >= next.page_size as usize {
            next.page_size = next.page_size.saturating_add(1);
        }
        next
    }

    /// Accounts for `removed` rows taken off a page that held `previous_len` rows.
    pub fn remove_items(&self, removed: usize, previous_len: usize) -> Self {
        let mut next = self.clone();
        let removed_u64 = u64::try_from(removed).unwrap_or(u64::MAX);
        next.total = next.total.saturating_sub(removed_u64);
        if previous_len > next.base_page_size as usize {
            let removed_u32 = u32::try_from(removed).unwrap_or(u32::MAX);
            next.page_size = next
                .page_size
                .saturating_sub(removed_u32)
                .max(next.base_page_size);
        }
        next
    }

    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Zero-based page index for the wire.
    pub fn page_index(&self) -> u32 {
        self.current.saturating_sub(1)
    }
}
