//! Page/limit/skip arithmetic
//!
//! Pages are 1-indexed. A request never carries a zero page or limit: absent,
//! non-numeric, and non-positive values fall back to the defaults.

/// Page used when the caller does not supply a usable one
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not supply a usable one
pub const DEFAULT_LIMIT: u32 = 10;

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a request, replacing zero values with the defaults
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Build a request from raw query-string values
    ///
    /// Accepts a leading integer prefix (`"2abc"` is page 2); anything that
    /// does not yield a positive integer falls back to the default.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of records to skip before this page
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1).saturating_mul(u64::from(self.limit))
    }

    /// Total number of pages for `total_items` at this page size
    pub fn total_pages(&self, total_items: u64) -> u64 {
        total_pages(total_items, self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// `ceil(total_items / limit)`, zero for an empty collection
pub fn total_pages(total_items: u64, limit: u32) -> u64 {
    let limit = u64::from(limit.max(1));
    total_items.div_ceil(limit)
}

/// Page to display after a list response
///
/// A page past the end is pulled back to the last page; an empty collection
/// still shows page 1.
pub fn clamp_page(page: u32, total_pages: u64) -> u32 {
    if u64::from(page) > total_pages {
        u32::try_from(total_pages.max(1)).unwrap_or(u32::MAX)
    } else {
        page.max(1)
    }
}

/// Parse a positive integer from the start of `raw`
///
/// Leading whitespace and a `+` sign are accepted, trailing garbage is
/// ignored, values past `u32::MAX` saturate. Returns `None` for missing,
/// non-numeric, negative, or zero input.
pub fn parse_positive(raw: Option<&str>) -> Option<u32> {
    let trimmed = raw?.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(u64::from(d));
    }

    if !seen_digit || value == 0 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_values() {
        let req = PageRequest::from_query(None, None);
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 10);
        assert_eq!(req.skip(), 0);
    }

    #[test]
    fn test_defaults_for_non_numeric_and_non_positive() {
        let req = PageRequest::from_query(Some("abc"), Some("0"));
        assert_eq!(req, PageRequest::default());

        let req = PageRequest::from_query(Some("-2"), Some(""));
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn test_leading_integer_prefix() {
        let req = PageRequest::from_query(Some(" 2abc"), Some("+5"));
        assert_eq!(req.page(), 2);
        assert_eq!(req.limit(), 5);
    }

    #[test]
    fn test_huge_values_saturate() {
        assert_eq!(parse_positive(Some("99999999999999")), Some(u32::MAX));
        let req = PageRequest::new(u32::MAX, u32::MAX);
        assert!(req.skip() > 0);
    }

    #[test]
    fn test_skip_and_total_pages() {
        let req = PageRequest::new(2, 10);
        assert_eq!(req.skip(), 10);
        assert_eq!(req.total_pages(15), 2);
        assert_eq!(req.total_pages(0), 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(2, 2), 2);
        assert_eq!(clamp_page(1, 0), 1);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
