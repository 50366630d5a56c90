//! Projection of the reconciled trail into display-ready breadcrumbs.
//!
//! The reducer's trail is internal state; consumers see [`BreadcrumbItem`]s
//! produced by [`project`]. Projection is a straight per-entry map over the
//! full trail in order — the cursor never truncates what is displayed — and
//! decomposes each entry's stored query string into ordered
//! [`QueryPair`]s.
//!
//! Query decomposition is deliberately minimal: split on `&`, then split
//! each pair on the *first* `=`. A segment with no `=` degrades to a key
//! with no value rather than being rejected. No percent-decoding or other
//! URL normalization is applied.
//!
//! # Example
//!
//! ```
//! use router_history::parse_query_pairs;
//!
//! let pairs = parse_query_pairs("p=1&flag&q=a=b");
//! assert_eq!(pairs[0].value.as_deref(), Some("1"));
//! assert_eq!(pairs[1].value, None);
//! assert_eq!(pairs[2].value.as_deref(), Some("a=b"));
//! ```

use crate::state::HistoryEntry;
use std::fmt;

// ============================================================================
// QueryPair
// ============================================================================

/// One `key=value` pair of a decomposed query string, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    /// Text before the first `=`, or the whole segment when no `=` exists.
    pub key: String,
    /// Text after the first `=`; `None` for a malformed (valueless) segment.
    pub value: Option<String>,
}

impl QueryPair {
    /// Create a pair with a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Create a valueless pair (a segment with no `=`).
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

impl fmt::Display for QueryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => f.write_str(&self.key),
        }
    }
}

/// Decompose a raw query string into ordered key/value pairs.
///
/// Splits on `&`, then each segment on its first `=`. Order is preserved
/// exactly; duplicate keys are kept. An empty input yields no pairs.
#[must_use]
pub fn parse_query_pairs(query: &str) -> Vec<QueryPair> {
    if query.is_empty() {
        return Vec::new();
    }

    query
        .split('&')
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => QueryPair::new(key, value),
            None => QueryPair::flag(segment),
        })
        .collect()
}

// ============================================================================
// BreadcrumbItem
// ============================================================================

/// A display-ready breadcrumb, projected from one trail entry.
///
/// # Example
///
/// ```
/// use router_history::{project, HistoryEntry};
///
/// let trail = vec![HistoryEntry {
///     id: 1,
///     url: "/reports".into(),
///     label: Some("Reports".into()),
///     query: Some("year=2024".into()),
/// }];
///
/// let items = project(&trail);
/// assert_eq!(items[0].target, "/reports");
/// assert_eq!(items[0].query_value("year"), Some("2024"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    /// Display label; `None` renders as an empty label.
    pub label: Option<String>,
    /// Navigation target path, query component excluded.
    pub target: String,
    /// Ordered query parameters to re-apply when following the breadcrumb.
    pub query_params: Vec<QueryPair>,
}

impl BreadcrumbItem {
    /// First value recorded for `key`, if present.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|pair| pair.key == key)
            .and_then(|pair| pair.value.as_deref())
    }

    /// First value for `key`, parsed as `T`.
    ///
    /// Returns `None` if the key is missing, valueless, or fails to parse.
    pub fn query_value_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.query_value(key)?.parse().ok()
    }

    /// Check if the item carries any query parameters.
    pub fn has_query(&self) -> bool {
        !self.query_params.is_empty()
    }
}

/// Project the reconciled trail into display-ready breadcrumbs.
///
/// The output order matches the trail order exactly and always covers the
/// whole trail; the cursor is reconciliation-internal and never limits what
/// is projected. An entry whose stored query string is empty projects with
/// no parameters, the same as an entry with none at all.
#[must_use]
pub fn project(trail: &[HistoryEntry]) -> Vec<BreadcrumbItem> {
    trail
        .iter()
        .map(|entry| BreadcrumbItem {
            label: entry.label.clone(),
            target: entry.url.clone(),
            query_params: entry
                .query
                .as_deref()
                .map(parse_query_pairs)
                .unwrap_or_default(),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str, label: Option<&str>, query: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            id: 0,
            url: url.to_string(),
            label: label.map(str::to_owned),
            query: query.map(str::to_owned),
        }
    }

    #[test]
    fn test_parse_ordered_pairs() {
        let pairs = parse_query_pairs("p=1&q=2");
        assert_eq!(
            pairs,
            vec![QueryPair::new("p", "1"), QueryPair::new("q", "2")]
        );
    }

    #[test]
    fn test_parse_preserves_duplicates_and_order() {
        let pairs = parse_query_pairs("tag=a&tag=b&page=1");
        let keys: Vec<_> = pairs.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["tag", "tag", "page"]);
    }

    #[test]
    fn test_parse_malformed_segment_keeps_key() {
        let pairs = parse_query_pairs("flag");
        assert_eq!(pairs, vec![QueryPair::flag("flag")]);
    }

    #[test]
    fn test_parse_splits_on_first_equals_only() {
        let pairs = parse_query_pairs("filter=a=b=c");
        assert_eq!(pairs, vec![QueryPair::new("filter", "a=b=c")]);
    }

    #[test]
    fn test_parse_empty_is_empty() {
        assert!(parse_query_pairs("").is_empty());
    }

    #[test]
    fn test_parse_empty_value() {
        let pairs = parse_query_pairs("q=");
        assert_eq!(pairs, vec![QueryPair::new("q", "")]);
    }

    #[test]
    fn test_query_pair_display() {
        assert_eq!(QueryPair::new("p", "1").to_string(), "p=1");
        assert_eq!(QueryPair::flag("flag").to_string(), "flag");
    }

    #[test]
    fn test_project_maps_whole_trail_in_order() {
        let trail = vec![
            entry("/a", Some("A"), None),
            entry("/b", None, Some("x=1")),
            entry("/c", Some("C"), None),
        ];

        let items = project(&trail);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].target, "/a");
        assert_eq!(items[1].label, None);
        assert_eq!(items[1].query_params, vec![QueryPair::new("x", "1")]);
        assert_eq!(items[2].label.as_deref(), Some("C"));
    }

    #[test]
    fn test_project_query_round_trip() {
        let trail = vec![entry("/x", Some("X"), Some("p=1&q=2"))];

        let items = project(&trail);
        assert_eq!(
            items[0].query_params,
            vec![QueryPair::new("p", "1"), QueryPair::new("q", "2")]
        );
    }

    #[test]
    fn test_project_empty_query_string_as_absent() {
        let items = project(&[entry("/x", None, Some(""))]);
        assert!(!items[0].has_query());
    }

    #[test]
    fn test_query_value_lookup() {
        let items = project(&[entry("/x", None, Some("page=3&flag&page=9"))]);

        assert_eq!(items[0].query_value("page"), Some("3"));
        assert_eq!(items[0].query_value_as::<u32>("page"), Some(3));
        assert_eq!(items[0].query_value("flag"), None);
        assert_eq!(items[0].query_value("missing"), None);
    }
}
