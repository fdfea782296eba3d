use serde::{Deserialize, Serialize};

/// Page size used by the driver listing unless configuration overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// One-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Build a request, coercing page `0` to the first page and page size `0` to one.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Interpret a raw `page` query value the way the listing links produce it.
    ///
    /// Missing, blank, non-numeric, zero and negative values all resolve to page 1.
    pub fn from_query(raw: Option<&str>, page_size: usize) -> Self {
        let page = raw
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(1);
        Self::new(page, page_size)
    }

    /// Items to skip; a page `0` built by hand or deserialized reads as the first page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Slice of a filtered collection plus the totals needed to render page links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn empty(request: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page: request.page,
            page_size: request.page_size,
        }
    }

    /// Cut the requested page out of an already filtered and ordered collection.
    pub fn slice(matching: Vec<T>, request: PageRequest) -> Self {
        let total_count = matching.len();
        let items = matching
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .collect();

        Self {
            items,
            total_count,
            page: request.page,
            page_size: request.page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
