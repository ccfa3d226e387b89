//! Scoring - Brute-force linear scan over page records
//!
//! For every searchable record and every query term the score gains 10 per
//! title occurrence and 1 per content occurrence, case-insensitive.
//! Occurrence counting permits overlapping matches: after each hit the scan
//! advances by exactly one character, so "aa" occurs twice in "aaa". Records
//! score into the result set only when strictly above zero, ranked by
//! descending score.

use crate::core::model::{PageRecord, SearchHit};
use crate::search::query::Query;

/// Weight of a title occurrence relative to a content occurrence
const TITLE_WEIGHT: u64 = 10;

/// Count positions at which needle matches haystack, permitting overlaps.
///
/// An empty needle counts as zero occurrences; empty terms from doubled
/// query spaces therefore contribute nothing.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut pos = 0;

    while let Some(found) = haystack[pos..].find(needle) {
        count += 1;
        let hit = pos + found;
        // Advance by one character, not one byte
        let step = haystack[hit..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        pos = hit + step;
        if pos > haystack.len() {
            break;
        }
    }

    count
}

/// Score one record against the query terms
pub fn score_record(record: &PageRecord, terms: &[String]) -> u64 {
    let title = record.title.to_lowercase();
    let content = record.content.to_lowercase();

    let mut score = 0;
    for term in terms {
        let term = term.to_lowercase();
        score += TITLE_WEIGHT * count_occurrences(&title, &term) as u64;
        score += count_occurrences(&content, &term) as u64;
    }
    score
}

/// Scan all records and return the qualifying hits, ranked by descending
/// score. The sort is stable, so equal scores keep their original index
/// order; no secondary key is applied.
pub fn search(records: &[PageRecord], query: &Query) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = records
        .iter()
        .filter(|record| record.is_searchable())
        .filter_map(|record| {
            let score = score_record(record, &query.terms);
            (score > 0).then(|| SearchHit::from_record(record, score))
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::query::parse_query;

    fn record(title: &str, content: &str, url: &str) -> PageRecord {
        PageRecord::new(title, content, url)
    }

    #[test]
    fn test_count_overlapping() {
        assert_eq!(count_occurrences("aaa", "aa"), 2);
        assert_eq!(count_occurrences("aaaa", "aa"), 3);
    }

    #[test]
    fn test_count_no_match() {
        assert_eq!(count_occurrences("abc", "x"), 0);
    }

    #[test]
    fn test_count_simple() {
        assert_eq!(count_occurrences("cats are great cats", "cats"), 2);
        assert_eq!(count_occurrences("cat", "cat"), 1);
    }

    #[test]
    fn test_count_empty_needle() {
        assert_eq!(count_occurrences("abc", ""), 0);
        assert_eq!(count_occurrences("", ""), 0);
    }

    #[test]
    fn test_count_multibyte_haystack() {
        assert_eq!(count_occurrences("你好你好", "你好"), 2);
        assert_eq!(count_occurrences("ééé", "éé"), 2);
    }

    #[test]
    fn test_score_title_and_content() {
        // 10 x 1 title occurrence + 1 x 2 content occurrences = 12
        let rec = record("Cats", "cats are great cats", "/cats.html");
        let query = parse_query("cats").unwrap();
        assert_eq!(score_record(&rec, &query.terms), 12);
    }

    #[test]
    fn test_score_case_insensitive() {
        let rec = record("CATS", "Cats And More CATS", "/cats.html");
        let query = parse_query("cAtS").unwrap();
        assert_eq!(score_record(&rec, &query.terms), 12);
    }

    #[test]
    fn test_score_multiple_terms_accumulate() {
        let rec = record("Build Rules", "rules for the build", "/build.html");
        let query = parse_query("build rules").unwrap();
        // build: 10 (title) + 1 (content); rules: 10 (title) + 1 (content)
        assert_eq!(score_record(&rec, &query.terms), 22);
    }

    #[test]
    fn test_score_empty_terms_contribute_nothing() {
        let rec = record("Cats", "cats", "/cats.html");
        let query = parse_query("cats  cats").unwrap();
        assert_eq!(query.terms.len(), 3);
        assert_eq!(score_record(&rec, &query.terms), 22);
    }

    #[test]
    fn test_search_skips_empty_title() {
        let records = vec![
            record("", "cats cats cats", "/hidden.html"),
            record("Cats", "cats", "/cats.html"),
        ];
        let query = parse_query("cats").unwrap();
        let hits = search(&records, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "/cats.html");
    }

    #[test]
    fn test_search_excludes_zero_score() {
        let records = vec![
            record("Dogs", "loyal companions", "/dogs.html"),
            record("Cats", "cats", "/cats.html"),
        ];
        let query = parse_query("cats").unwrap();
        let hits = search(&records, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Cats");
    }

    #[test]
    fn test_search_ranked_descending() {
        let records = vec![
            record("Misc", "one cats mention", "/misc.html"),
            record("Cats", "cats everywhere cats", "/cats.html"),
        ];
        let query = parse_query("cats").unwrap();
        let hits = search(&records, &query);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].score > hits[1].score);
        assert_eq!(hits[0].url, "/cats.html");
    }

    #[test]
    fn test_search_ties_keep_index_order() {
        let records = vec![
            record("First Cats", "x", "/first.html"),
            record("Later Cats", "x", "/later.html"),
        ];
        let query = parse_query("cats").unwrap();
        let hits = search(&records, &query);
        assert_eq!(hits[0].score, hits[1].score);
        assert_eq!(hits[0].url, "/first.html");
        assert_eq!(hits[1].url, "/later.html");
    }

    #[test]
    fn test_search_no_matches_is_empty() {
        let records = vec![record("Dogs", "loyal companions", "/dogs.html")];
        let query = parse_query("cats").unwrap();
        assert!(search(&records, &query).is_empty());
    }
}
