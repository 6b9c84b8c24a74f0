use crate::models::{ListParams, PostFilter};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// A listing request after clamping and lenient parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    pub filter: PostFilter,
}

impl ListQuery {
    pub fn from_params(params: &ListParams, default_limit: usize, max_limit: usize) -> Self {
        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        Self {
            page: parse_page(params.page.as_deref()),
            limit: parse_limit(params.limit.as_deref(), default_limit, max_limit),
            filter: PostFilter {
                published: Some(params.published.as_deref().and_then(parse_bool).unwrap_or(true)),
                featured: params.featured.as_deref().and_then(parse_bool),
                search,
            },
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::from_params(&ListParams::default(), DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}

/// Page number; anything below 1 or non-numeric becomes 1.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|&page| page >= 1)
        .and_then(|page| usize::try_from(page).ok())
        .unwrap_or(1)
}

/// Page size; anything outside `1..=max` or non-numeric becomes `default`.
pub fn parse_limit(raw: Option<&str>, default: usize, max: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|limit| usize::try_from(limit).ok())
        .filter(|&limit| (1..=max).contains(&limit))
        .unwrap_or(default)
}

/// Accepts the usual spellings: `1 t T TRUE true True 0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(total: i64, page: usize, limit: usize) -> Self {
        let total = usize::try_from(total).unwrap_or(0);
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
