//! Pagination cursor and list query parameters shared by every list page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default number of rows per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum number of rows per list page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Clamp a requested page size to `1..=MAX_PAGE_SIZE`.
pub fn clamp_limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Clamp a requested page number to at least 1.
pub fn clamp_page(page: Option<u32>) -> u32 {
    page.unwrap_or(1).max(1)
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// Pagination block of a list envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            total: 0,
            total_pages: 0,
        }
    }
}

impl Pagination {
    /// Build a cursor from a total count, computing `total_pages`.
    pub fn from_total(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(u64::from(limit)) as u32;
        Self {
            page: page.max(1),
            limit,
            total,
            total_pages,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first row on this page, 0 when empty.
    pub fn first_row(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            u64::from(self.page - 1) * u64::from(self.limit) + 1
        }
    }

    /// 1-based index of the last row on this page.
    pub fn last_row(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.limit)).min(self.total)
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Pagination, search, sort and filter parameters of a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub status: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
            sort_by: None,
            sort_order: SortOrder::default(),
            status: None,
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = clamp_page(Some(page));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = clamp_limit(Some(limit));
        self
    }

    /// Set the search text; blank text clears it.
    pub fn search(mut self, text: &str) -> Self {
        let text = text.trim();
        self.search = (!text.is_empty()).then(|| text.to_string());
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = order;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Flatten into query-string pairs. Empty optional values are omitted.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".into(), search.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".into(), sort_by.clone()));
            pairs.push(("sortOrder".into(), self.sort_order.as_str().into()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status".into(), status.clone()));
        }
        for (key, value) in &self.filters {
            if !value.is_empty() {
                pairs.push((key.clone(), value.clone()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(1000)), MAX_PAGE_SIZE);
        assert_eq!(clamp_page(Some(0)), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let p = Pagination::from_total(1, 10, 21);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next());
        assert!(!p.has_prev());
    }

    #[test]
    fn row_bounds() {
        let p = Pagination::from_total(3, 10, 21);
        assert_eq!(p.first_row(), 21);
        assert_eq!(p.last_row(), 21);
        assert!(!p.has_next());
        assert_eq!(Pagination::default().first_row(), 0);
    }

    #[test]
    fn query_pairs_omit_unset_values() {
        let pairs = ListQuery::default().page(2).search("  ").to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_include_sort_status_and_filters() {
        let pairs = ListQuery::default()
            .search("rust")
            .sort("createdAt", SortOrder::Asc)
            .status("published")
            .filter("category", "programming")
            .to_pairs();
        assert!(pairs.contains(&("search".into(), "rust".into())));
        assert!(pairs.contains(&("sortBy".into(), "createdAt".into())));
        assert!(pairs.contains(&("sortOrder".into(), "asc".into())));
        assert!(pairs.contains(&("status".into(), "published".into())));
        assert!(pairs.contains(&("category".into(), "programming".into())));
    }

    #[test]
    fn pagination_deserializes_camel_case() {
        let p: Pagination = serde_json::from_str(
            r#"{"page":2,"limit":20,"total":45,"totalPages":3}"#,
        )
        .unwrap();
        assert_eq!(p, Pagination::from_total(2, 20, 45));
    }
}
