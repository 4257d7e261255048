//! Approximate text matching for Agenda
//!
//! Every text filter in the system (session titles, descriptions, tags,
//! speaker names and companies, location names) goes through [`is_match`].
//! A candidate matches a query when any of three tiers accepts it:
//!
//! 1. the lower-cased candidate contains the lower-cased query,
//! 2. the whole candidate is within a length-scaled edit distance of the query,
//! 3. a single whitespace/hyphen separated word is within a small edit distance.

mod levenshtein;

pub use levenshtein::distance;

use crate::error::{Error, Result};

/// Default upper bound on query length, in characters.
pub const DEFAULT_MAX_QUERY_CHARS: usize = 256;

/// Whole-string tolerance never drops below this many edits.
const MIN_TOTAL_DISTANCE: usize = 5;
/// Per-word tolerance never exceeds this many edits.
const MAX_WORD_DISTANCE: usize = 3;
/// Words shorter than this must match exactly.
const MIN_FUZZY_WORD_CHARS: usize = 4;

/// Decide whether `candidate` matches `query`.
///
/// Absent or empty candidates never match. An empty query is contained in
/// every non-empty candidate and therefore matches it; use [`SearchQuery`]
/// to reject empty queries before they get here.
pub fn is_match(candidate: Option<&str>, query: &str) -> bool {
    let Some(candidate) = candidate.filter(|text| !text.is_empty()) else {
        return false;
    };

    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    if candidate.contains(&query) {
        return true;
    }

    let query_chars = query.chars().count();
    if distance(&query, &candidate) <= whole_string_tolerance(query_chars) {
        return true;
    }

    candidate
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
        .any(|word| distance(&query, word) <= word_tolerance(word.chars().count()))
}

/// `max(5, floor(len * 0.4))`
const fn whole_string_tolerance(query_chars: usize) -> usize {
    let scaled = query_chars * 2 / 5;
    if scaled > MIN_TOTAL_DISTANCE {
        scaled
    } else {
        MIN_TOTAL_DISTANCE
    }
}

/// `0` for short words, otherwise `min(3, ceil(len * 0.4))`
const fn word_tolerance(word_chars: usize) -> usize {
    if word_chars < MIN_FUZZY_WORD_CHARS {
        return 0;
    }
    let scaled = (word_chars * 2).div_ceil(5);
    if scaled < MAX_WORD_DISTANCE {
        scaled
    } else {
        MAX_WORD_DISTANCE
    }
}

/// A validated, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim `raw` and reject it when empty or longer than `max_chars`.
    pub fn parse(raw: &str, max_chars: usize) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > max_chars {
            return Err(Error::InvalidInput(format!(
                "search query must be at most {max_chars} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse an optional query, treating `None` as "no filter".
    pub fn parse_optional(raw: Option<&str>, max_chars: usize) -> Result<Option<Self>> {
        raw.map(|value| Self::parse(value, max_chars)).transpose()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, candidate: Option<&str>) -> bool {
        is_match(candidate, &self.0)
    }

    /// True when any of `candidates` matches.
    pub fn matches_any<'a>(&self, candidates: impl IntoIterator<Item = Option<&'a str>>) -> bool {
        candidates.into_iter().any(|candidate| self.matches(candidate))
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_candidate_never_matches() {
        assert!(!is_match(None, "anything"));
        assert!(!is_match(Some(""), "x"));
        assert!(!is_match(Some(""), ""));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        assert!(is_match(Some("Python Basics"), "python"));
        assert!(is_match(Some("python basics"), "PYTHON"));
        assert_eq!(
            is_match(Some("GraphQL"), "GRAPHQL"),
            is_match(Some("GraphQL"), "graphql")
        );
    }

    #[test]
    fn misspelled_word_matches_through_word_tier() {
        assert!(is_match(Some("Pythom Basics"), "python"));
        assert!(is_match(Some("Kubernetes Deep Dive"), "kuberenetes"));
        assert!(is_match(
            Some("Advanced Pythom Patterns for Large Teams"),
            "python"
        ));
    }

    #[test]
    fn hyphenated_words_are_split() {
        assert!(is_match(Some("Cloud-Native Kubernetes Operations"), "natve"));
    }

    #[test]
    fn unrelated_text_does_not_match() {
        assert!(!is_match(Some("Database Systems"), "xyz123"));
        assert!(!is_match(
            Some("Scaling Event Driven Architectures"),
            "kubernetes"
        ));
    }

    #[test]
    fn short_words_require_exact_match() {
        assert!(!is_match(Some("An Intro to Go and Web Frameworks"), "gp"));
        assert!(is_match(Some("An Intro to Go and Web Frameworks"), "go"));
    }

    #[test]
    fn short_candidates_fall_inside_the_whole_string_floor() {
        // "go" -> "rust" is four edits, under the minimum tolerance of five.
        assert!(is_match(Some("Rust"), "go"));
    }

    #[test]
    fn empty_query_matches_non_empty_candidate() {
        assert!(is_match(Some("Anything"), ""));
    }

    #[test]
    fn repeated_calls_agree() {
        let first = is_match(Some("Kubernetes Deep Dive"), "kuberenetes");
        for _ in 0..10 {
            assert_eq!(is_match(Some("Kubernetes Deep Dive"), "kuberenetes"), first);
        }
    }

    #[test]
    fn whole_string_tolerance_scales_with_query_length() {
        assert_eq!(whole_string_tolerance(0), 5);
        assert_eq!(whole_string_tolerance(6), 5);
        assert_eq!(whole_string_tolerance(12), 5);
        assert_eq!(whole_string_tolerance(15), 6);
        assert_eq!(whole_string_tolerance(30), 12);
    }

    #[test]
    fn word_tolerance_is_capped() {
        assert_eq!(word_tolerance(3), 0);
        assert_eq!(word_tolerance(4), 2);
        assert_eq!(word_tolerance(5), 2);
        assert_eq!(word_tolerance(6), 3);
        assert_eq!(word_tolerance(40), 3);
    }

    #[test]
    fn search_query_rejects_blank_input() {
        assert!(SearchQuery::parse("", DEFAULT_MAX_QUERY_CHARS).is_err());
        assert!(SearchQuery::parse("  \t ", DEFAULT_MAX_QUERY_CHARS).is_err());
    }

    #[test]
    fn search_query_trims_and_limits_length() {
        let query = SearchQuery::parse("  rust  ", DEFAULT_MAX_QUERY_CHARS).unwrap();
        assert_eq!(query.as_str(), "rust");

        let err = SearchQuery::parse("abcdef", 5).unwrap_err();
        assert!(err.to_string().contains("at most 5"));
    }

    #[test]
    fn search_query_matches_any_candidate() {
        let query = SearchQuery::parse("acme", DEFAULT_MAX_QUERY_CHARS).unwrap();
        assert!(query.matches_any([None, Some("Jane Doe"), Some("ACME Corp")]));
        assert!(!query.matches_any([None, Some("")]));
    }

    #[test]
    fn parse_optional_passes_through_none() {
        assert_eq!(
            SearchQuery::parse_optional(None, DEFAULT_MAX_QUERY_CHARS).unwrap(),
            None
        );
        assert!(SearchQuery::parse_optional(Some(" "), DEFAULT_MAX_QUERY_CHARS).is_err());
    }
}
