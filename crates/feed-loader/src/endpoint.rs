//! Request URLs
//!
//! Turns the cursor read from the last card into the next-page request.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use crate::error::{FeedError, FeedResult};

/// Characters left as-is in a query value (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// How the cursor becomes a query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorParam {
    /// Numeric id; requests `start_id={cursor - 1}`
    #[default]
    StartId,
    /// Opaque value such as a date; requests `before={cursor}`
    Before,
}

impl CursorParam {
    pub fn name(&self) -> &'static str {
        match self {
            CursorParam::StartId => "start_id",
            CursorParam::Before => "before",
        }
    }

    /// Query value for a cursor
    pub fn value(&self, cursor: &str) -> FeedResult<String> {
        match self {
            CursorParam::StartId => {
                let id: i64 = cursor.trim().parse().map_err(|_| FeedError::InvalidCursor {
                    cursor: cursor.to_string(),
                    reason: "start_id cursors must be integers".to_string(),
                })?;
                let start = id.checked_sub(1).ok_or_else(|| FeedError::InvalidCursor {
                    cursor: cursor.to_string(),
                    reason: "cursor underflows".to_string(),
                })?;
                Ok(start.to_string())
            }
            CursorParam::Before => Ok(cursor.to_string()),
        }
    }
}

/// Build `{endpoint}?{param}={value}`, appending with `&` when the
/// endpoint already has a query string
pub fn request_url(endpoint: &str, param: CursorParam, cursor: &str) -> FeedResult<String> {
    let value = param.value(cursor)?;
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{}{}{}={}",
        endpoint,
        separator,
        param.name(),
        utf8_percent_encode(&value, QUERY_VALUE)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_id_decrements() {
        let url = |cursor| request_url("/trend", CursorParam::StartId, cursor).unwrap();
        assert_eq!(url("42"), "/trend?start_id=41");
        assert_eq!(url(" 1 "), "/trend?start_id=0");
    }

    #[test]
    fn test_start_id_rejects_non_numeric() {
        let err = request_url("/trend", CursorParam::StartId, "abc").unwrap_err();
        assert!(matches!(err, FeedError::InvalidCursor { .. }));
        assert!(request_url("/trend", CursorParam::StartId, &i64::MIN.to_string()).is_err());
    }

    #[test]
    fn test_before_is_encoded() {
        assert_eq!(
            request_url("/trend", CursorParam::Before, "2023-05-01").unwrap(),
            "/trend?before=2023-05-01"
        );
        assert_eq!(
            request_url("/trend", CursorParam::Before, "2023-05-01 12:30").unwrap(),
            "/trend?before=2023-05-01%2012%3A30"
        );
    }

    #[test]
    fn test_existing_query_string() {
        assert_eq!(
            request_url("/trend?lang=zh", CursorParam::Before, "x").unwrap(),
            "/trend?lang=zh&before=x"
        );
    }
}
