//! Request-side API models

use serde::Deserialize;
use todo_core::PageRequest;

/// Query string of `GET /api/gettodos`
///
/// Values are kept as raw strings so malformed input falls back to the
/// defaults instead of rejecting the request. Handlers read the query as raw
/// pairs and go through [`TodoListQuery::from_pairs`], so repeated keys are
/// not a rejection either.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl TodoListQuery {
    /// Build from raw query pairs; the first occurrence of a key wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if query.page.is_none() => query.page = Some(value),
                "limit" if query.limit.is_none() => query.limit = Some(value),
                _ => {}
            }
        }
        query
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        let request = TodoListQuery::default().page_request();
        assert_eq!(request.page(), todo_core::DEFAULT_PAGE);
        assert_eq!(request.limit(), todo_core::DEFAULT_LIMIT);
    }

    #[test]
    fn test_garbage_query_uses_defaults() {
        let query = TodoListQuery {
            page: Some("abc".to_string()),
            limit: Some("-4".to_string()),
        };
        let request = query.page_request();
        assert_eq!(request.page(), todo_core::DEFAULT_PAGE);
        assert_eq!(request.limit(), todo_core::DEFAULT_LIMIT);
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let pairs = vec![
            ("page".to_string(), "3".to_string()),
            ("limit".to_string(), "5".to_string()),
            ("page".to_string(), "9".to_string()),
            ("sort".to_string(), "title".to_string()),
        ];
        let request = TodoListQuery::from_pairs(pairs).page_request();
        assert_eq!(request.page(), 3);
        assert_eq!(request.limit(), 5);
    }

    #[test]
    fn test_explicit_query() {
        let query = TodoListQuery {
            page: Some("2".to_string()),
            limit: Some("5".to_string()),
        };
        let request = query.page_request();
        assert_eq!(request.page(), 2);
        assert_eq!(request.limit(), 5);
        assert_eq!(request.skip(), 5);
    }
}
