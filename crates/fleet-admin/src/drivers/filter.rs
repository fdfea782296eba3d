//! Turns listing query parameters into a driver predicate.

use serde::{Deserialize, Serialize};

use super::domain::{DriverRecord, DriverStatus};

/// Raw listing parameters exactly as the admin form submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl DriverListParams {
    pub fn new(status: Option<&str>, search: Option<&str>) -> Self {
        Self {
            status: status.map(str::to_string),
            search: search.map(str::to_string),
            page: None,
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page.to_string());
        self
    }
}

/// Parse a status filter value. Anything outside the three known values means "all".
pub fn parse_status_filter(raw: &str) -> Option<DriverStatus> {
    match raw {
        "approved" => Some(DriverStatus::Approved),
        "pending" => Some(DriverStatus::Pending),
        "rejected" => Some(DriverStatus::Rejected),
        _ => None,
    }
}

/// Case-insensitive free-text term matched against name, email and phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// `None` for an empty term, which contributes no predicate.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            folded: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, record: &DriverRecord) -> bool {
        let hit = |field: &str| field.to_lowercase().contains(&self.folded);
        hit(&record.name) || hit(&record.email) || record.phone.as_deref().is_some_and(hit)
    }

    /// `%term%` pattern for SQL `LIKE`, with `\`, `%` and `_` escaped using `\`.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.raw.len() + 2);
        pattern.push('%');
        for ch in self.raw.chars() {
            if matches!(ch, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

/// Composable predicate over the driver collection: status AND search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverFilter {
    status: Option<DriverStatus>,
    search: Option<SearchTerm>,
}

impl DriverFilter {
    /// Build the predicate from request parameters. Pure; no error for unknown statuses.
    pub fn resolve(params: &DriverListParams) -> Self {
        Self {
            status: params.status.as_deref().and_then(parse_status_filter),
            search: params.search.as_deref().and_then(SearchTerm::new),
        }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: DriverStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn status(&self) -> Option<DriverStatus> {
        self.status
    }

    pub fn search(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.status.is_none() && self.search.is_none()
    }

    pub fn matches(&self, record: &DriverRecord) -> bool {
        self.matches_status(record)
            && self
                .search
                .as_ref()
                .map_or(true, |term| term.matches(record))
    }

    /// Status predicates read the stored columns, not the projected status.
    fn matches_status(&self, record: &DriverRecord) -> bool {
        match self.status {
            None => true,
            Some(DriverStatus::Approved) => record.is_approved,
            Some(DriverStatus::Pending) => {
                !record.is_approved && record.active_rejection_reason().is_none()
            }
            Some(DriverStatus::Rejected) => record.active_rejection_reason().is_some(),
        }
    }

    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(SearchTerm::like_pattern)
    }

    /// Active filters echoed back to the listing form.
    pub fn params(&self) -> DriverListParams {
        DriverListParams {
            status: self.status.map(|status| status.label().to_string()),
            search: self.search.as_ref().map(|term| term.as_str().to_string()),
            page: None,
        }
    }
}
