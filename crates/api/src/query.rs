//! Shared query parameter types for API handlers.

use campaign_core::audit::leading_integer;
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Kept as raw strings so that unparseable values fall back to the defaults
/// instead of rejecting the request. The resolved values go through
/// [`campaign_core::audit::page_window`].
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationParams {
    pub fn limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(leading_integer)
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset.as_deref().and_then(leading_integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<&str>, offset: Option<&str>) -> PaginationParams {
        PaginationParams {
            limit: limit.map(str::to_string),
            offset: offset.map(str::to_string),
        }
    }

    #[test]
    fn numeric_prefixes_are_read() {
        let p = params(Some("2.5"), Some("10abc"));
        assert_eq!(p.limit(), Some(2));
        assert_eq!(p.offset(), Some(10));
    }

    #[test]
    fn garbage_reads_as_absent() {
        let p = params(Some("abc"), Some("x"));
        assert_eq!(p.limit(), None);
        assert_eq!(p.offset(), None);
        assert_eq!(params(None, None).limit(), None);
    }
}
