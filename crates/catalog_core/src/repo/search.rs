//! Query parameters and paginated result envelope.
//!
//! # Responsibility
//! - Normalize caller input into a well-formed [`SearchParams`].
//! - Carry one page of results plus the counts needed to page further.
//!
//! # Invariants
//! - `page >= 1` and `1 <= per_page <= max_per_page` after construction;
//!   invalid or non-numeric input falls back to defaults instead of failing.
//! - `sort_dir` is present exactly when `sort` is present.
//! - `SearchResult::last_page = max(1, ceil(total / per_page))`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 15;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses a direction, treating anything but `desc` as ascending.
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default and upper bound for `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationLimits {
    default_per_page: u32,
    max_per_page: u32,
}

impl PaginationLimits {
    /// Builds limits, clamping the default into `[1, max]`.
    pub fn new(default_per_page: u32, max_per_page: u32) -> Self {
        let max_per_page = max_per_page.max(1);
        Self {
            default_per_page: default_per_page.clamp(1, max_per_page),
            max_per_page,
        }
    }

    pub fn default_per_page(&self) -> u32 {
        self.default_per_page
    }

    pub fn max_per_page(&self) -> u32 {
        self.max_per_page
    }

    /// Normalizes a requested page size according to these limits.
    pub fn normalize_per_page(&self, per_page: Option<i64>) -> u32 {
        match per_page {
            Some(value) if value >= 1 => u32::try_from(value)
                .map_or(self.max_per_page, |value| value.min(self.max_per_page)),
            _ => self.default_per_page,
        }
    }
}

impl Default for PaginationLimits {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE, MAX_PER_PAGE)
    }
}

/// Normalizes a requested 1-indexed page number.
pub fn normalize_page(page: Option<i64>) -> u32 {
    match page {
        Some(value) if value >= 1 => u32::try_from(value).unwrap_or(u32::MAX),
        _ => DEFAULT_PAGE,
    }
}

/// Filter criteria that may be "empty", meaning no filtering at all.
pub trait FilterCriteria {
    fn is_blank(&self) -> bool;
}

impl FilterCriteria for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

/// Unvalidated, string-typed query input (e.g. decoded from a query string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawSearchParams {
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Normalized query: optional filter, optional sort key, one page window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams<F = String> {
    filter: Option<F>,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    page: u32,
    per_page: u32,
    limits: PaginationLimits,
}

impl<F: FilterCriteria> SearchParams<F> {
    pub fn new() -> Self {
        Self::with_limits(PaginationLimits::default())
    }

    /// Starts from defaults derived from custom pagination limits.
    pub fn with_limits(limits: PaginationLimits) -> Self {
        Self {
            filter: None,
            sort: None,
            sort_dir: None,
            page: DEFAULT_PAGE,
            per_page: limits.default_per_page(),
            limits,
        }
    }

    /// Sets the filter; blank criteria clear it.
    pub fn filter(mut self, filter: F) -> Self {
        self.filter = Some(filter).filter(|criteria| !criteria.is_blank());
        self
    }

    /// Sets the sort field; blank names clear it.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        let sort = sort.into();
        self.sort = if sort.trim().is_empty() {
            None
        } else {
            Some(sort)
        };
        self
    }

    pub fn sort_dir(mut self, sort_dir: SortDirection) -> Self {
        self.sort_dir = Some(sort_dir);
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = normalize_page(Some(page));
        self
    }

    pub fn per_page(mut self, per_page: i64) -> Self {
        self.per_page = self.limits.normalize_per_page(Some(per_page));
        self
    }
}

impl<F> SearchParams<F> {
    pub fn filter_criteria(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Requested direction; `None` whenever no sort field is set.
    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .map(|_| self.sort_dir.unwrap_or_default())
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.per_page
    }

    pub fn limits(&self) -> PaginationLimits {
        self.limits
    }
}

impl SearchParams<String> {
    /// Normalizes string-typed input. Never fails.
    pub fn from_raw(raw: &RawSearchParams, limits: PaginationLimits) -> Self {
        let mut params = Self::with_limits(limits);
        if let Some(filter) = raw.filter.clone() {
            params = params.filter(filter);
        }
        if let Some(sort) = raw.sort.clone() {
            params = params.sort(sort);
        }
        if let Some(sort_dir) = raw.sort_dir.as_deref() {
            params = params.sort_dir(SortDirection::parse_lenient(sort_dir));
        }
        params.page = normalize_page(raw.page.as_deref().and_then(parse_integer));
        params.per_page =
            limits.normalize_per_page(raw.per_page.as_deref().and_then(parse_integer));
        params
    }
}

impl<F: FilterCriteria> Default for SearchParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: usize,
    current_page: u32,
    per_page: u32,
    last_page: u32,
}

impl<E> SearchResult<E> {
    /// Builds a result envelope, deriving `last_page` from `total`.
    ///
    /// `total` is the number of matches before pagination.
    pub fn new(items: Vec<E>, total: usize, current_page: u32, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let last_page = total.div_ceil(per_page as usize).max(1);
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: u32::try_from(last_page).unwrap_or(u32::MAX),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    /// Converts every item while keeping the page metadata.
    pub fn map_items<T>(self, convert: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(convert).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let params = SearchParams::<String>::new();
        assert_eq!(params.current_page(), 1);
        assert_eq!(params.page_size(), DEFAULT_PER_PAGE);
        assert_eq!(params.filter_criteria(), None);
        assert_eq!(params.sort_field(), None);
        assert_eq!(params.sort_direction(), None);
    }

    #[test]
    fn page_below_one_normalizes_to_one() {
        for page in [0, -1, i64::MIN] {
            assert_eq!(SearchParams::<String>::new().page(page).current_page(), 1);
        }
        assert_eq!(SearchParams::<String>::new().page(3).current_page(), 3);
    }

    #[test]
    fn per_page_falls_back_to_default_and_clamps_to_cap() {
        assert_eq!(SearchParams::<String>::new().per_page(0).page_size(), 15);
        assert_eq!(SearchParams::<String>::new().per_page(-4).page_size(), 15);
        assert_eq!(SearchParams::<String>::new().per_page(7).page_size(), 7);
        assert_eq!(SearchParams::<String>::new().per_page(500).page_size(), 100);
        assert_eq!(
            SearchParams::<String>::new().per_page(i64::MAX).page_size(),
            100
        );
    }

    #[test]
    fn sort_dir_only_exists_with_sort() {
        let without_sort = SearchParams::<String>::new().sort_dir(SortDirection::Desc);
        assert_eq!(without_sort.sort_direction(), None);

        let with_sort = SearchParams::<String>::new().sort("name");
        assert_eq!(with_sort.sort_direction(), Some(SortDirection::Asc));

        let blank_sort = SearchParams::<String>::new().sort("  ");
        assert_eq!(blank_sort.sort_field(), None);
    }

    #[test]
    fn blank_filter_is_cleared() {
        let params = SearchParams::<String>::new().filter("   ".to_string());
        assert_eq!(params.filter_criteria(), None);

        let params = SearchParams::<String>::new().filter("movie".to_string());
        assert_eq!(params.filter_criteria().map(String::as_str), Some("movie"));
    }

    #[test]
    fn raw_input_normalizes_instead_of_failing() {
        let raw = RawSearchParams {
            filter: Some(String::new()),
            sort: Some("name".to_string()),
            sort_dir: Some("DESC".to_string()),
            page: Some("abc".to_string()),
            per_page: Some("2.5".to_string()),
        };
        let params = SearchParams::from_raw(&raw, PaginationLimits::default());
        assert_eq!(params.filter_criteria(), None);
        assert_eq!(params.sort_field(), Some("name"));
        assert_eq!(params.sort_direction(), Some(SortDirection::Desc));
        assert_eq!(params.current_page(), 1);
        assert_eq!(params.page_size(), 15);

        let raw = RawSearchParams {
            sort: Some("name".to_string()),
            sort_dir: Some("sideways".to_string()),
            page: Some(" 4 ".to_string()),
            per_page: Some("20".to_string()),
            ..RawSearchParams::default()
        };
        let params = SearchParams::from_raw(&raw, PaginationLimits::new(10, 50));
        assert_eq!(params.sort_direction(), Some(SortDirection::Asc));
        assert_eq!(params.current_page(), 4);
        assert_eq!(params.page_size(), 20);
    }

    #[test]
    fn limits_clamp_default_into_range() {
        let limits = PaginationLimits::new(500, 50);
        assert_eq!(limits.default_per_page(), 50);
        let limits = PaginationLimits::new(0, 0);
        assert_eq!(limits.default_per_page(), 1);
        assert_eq!(limits.max_per_page(), 1);
    }

    #[test]
    fn last_page_is_ceiling_with_floor_of_one() {
        assert_eq!(SearchResult::<u8>::new(vec![], 0, 1, 15).last_page(), 1);
        assert_eq!(SearchResult::new(vec![1, 2], 2, 1, 2).last_page(), 1);
        assert_eq!(SearchResult::new(vec![1], 2, 1, 1).last_page(), 2);
        assert_eq!(SearchResult::new(vec![1, 2], 31, 1, 15).last_page(), 3);
    }

    #[test]
    fn map_items_keeps_metadata() {
        let result = SearchResult::new(vec![1, 2], 12, 2, 2).map_items(|n| n * 10);
        assert_eq!(result.items(), [10, 20]);
        assert_eq!(result.total(), 12);
        assert_eq!(result.current_page(), 2);
        assert_eq!(result.last_page(), 6);
    }
}
