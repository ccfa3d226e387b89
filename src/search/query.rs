//! Query parsing
//!
//! The raw query is the query-string portion of a page address: an optional
//! leading '?' delimiter is stripped, the rest is percent-decoded, and the
//! decoded string is split on literal spaces into an ordered term sequence.
//! No trimming, no deduplication, no normalization beyond the scorer's
//! per-comparison lowercasing. Doubled spaces yield empty terms, which score
//! nothing.

use percent_encoding::percent_decode_str;

/// A parsed query: the decoded string plus its ordered terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    pub terms: Vec<String>,
}

/// Parse a raw query string. Returns None for an absent or empty query, in
/// which case the caller renders nothing and returns early.
pub fn parse_query(raw: &str) -> Option<Query> {
    let stripped = raw.strip_prefix('?').unwrap_or(raw);
    let decoded = percent_decode_str(stripped).decode_utf8_lossy();

    if decoded.is_empty() {
        return None;
    }

    let terms = decoded.split(' ').map(str::to_string).collect();

    Some(Query {
        raw: decoded.into_owned(),
        terms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_basic() {
        let query = parse_query("cats").unwrap();
        assert_eq!(query.raw, "cats");
        assert_eq!(query.terms, vec!["cats"]);
    }

    #[test]
    fn test_parse_query_splits_on_spaces() {
        let query = parse_query("build rules").unwrap();
        assert_eq!(query.terms, vec!["build", "rules"]);
    }

    #[test]
    fn test_parse_query_strips_leading_delimiter() {
        let query = parse_query("?cats").unwrap();
        assert_eq!(query.raw, "cats");
    }

    #[test]
    fn test_parse_query_percent_decodes() {
        let query = parse_query("c%20rules").unwrap();
        assert_eq!(query.raw, "c rules");
        assert_eq!(query.terms, vec!["c", "rules"]);
    }

    #[test]
    fn test_parse_query_plus_is_not_space() {
        // decodeURIComponent semantics: '+' stays a literal plus
        let query = parse_query("a+b").unwrap();
        assert_eq!(query.terms, vec!["a+b"]);
    }

    #[test]
    fn test_parse_query_empty_returns_none() {
        assert_eq!(parse_query(""), None);
        assert_eq!(parse_query("?"), None);
    }

    #[test]
    fn test_parse_query_double_space_keeps_empty_term() {
        let query = parse_query("a  b").unwrap();
        assert_eq!(query.terms, vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_query_no_trimming() {
        let query = parse_query(" cats").unwrap();
        assert_eq!(query.terms, vec!["", "cats"]);
    }
}
