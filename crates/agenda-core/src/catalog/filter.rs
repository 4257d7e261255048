//! Session filter arguments.

use crate::error::Result;
use crate::models::Session;
use crate::search::SearchQuery;

/// Criteria for listing sessions. Every criterion that is set must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    /// Exact session id
    pub id: Option<String>,
    /// Fuzzy match on the title
    pub title: Option<SearchQuery>,
    /// Fuzzy match on any tag title
    pub tag: Option<SearchQuery>,
    /// Fuzzy match on title, description, tags, speaker names and companies
    pub search: Option<SearchQuery>,
}

impl SessionFilter {
    /// Build a filter from raw request arguments.
    ///
    /// Blank text arguments are rejected; a blank id is ignored.
    pub fn parse(
        id: Option<&str>,
        title: Option<&str>,
        tag: Option<&str>,
        search: Option<&str>,
        max_query_chars: usize,
    ) -> Result<Self> {
        Ok(Self {
            id: id
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            title: SearchQuery::parse_optional(title, max_query_chars)?,
            tag: SearchQuery::parse_optional(tag, max_query_chars)?,
            search: SearchQuery::parse_optional(search, max_query_chars)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.title.is_none() && self.tag.is_none() && self.search.is_none()
    }

    pub fn matches(&self, session: &Session) -> bool {
        if let Some(id) = &self.id {
            if session.id != *id {
                return false;
            }
        }

        if let Some(title) = &self.title {
            if !title.matches(session.title.as_deref()) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            if !search.matches_any(session.searchable_fields()) {
                return false;
            }
        }

        if let Some(tag) = &self.tag {
            if !tag.matches_any(session.tag_titles().map(Some)) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DEFAULT_MAX_QUERY_CHARS;

    fn session(raw: &str) -> Session {
        serde_json::from_str(raw).unwrap()
    }

    fn filter(
        id: Option<&str>,
        title: Option<&str>,
        tag: Option<&str>,
        search: Option<&str>,
    ) -> SessionFilter {
        SessionFilter::parse(id, title, tag, search, DEFAULT_MAX_QUERY_CHARS).unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = SessionFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&session(r#"{"id": "1"}"#)));
    }

    #[test]
    fn blank_id_is_ignored_but_blank_text_is_rejected() {
        assert!(filter(Some("  "), None, None, None).is_empty());
        assert!(SessionFilter::parse(None, Some(""), None, None, DEFAULT_MAX_QUERY_CHARS).is_err());
        assert!(
            SessionFilter::parse(None, None, None, Some("   "), DEFAULT_MAX_QUERY_CHARS).is_err()
        );
    }

    #[test]
    fn id_must_match_exactly() {
        let s = session(r#"{"id": 12, "title": "Opening"}"#);
        assert!(filter(Some("12"), None, None, None).matches(&s));
        assert!(!filter(Some("1"), None, None, None).matches(&s));
    }

    #[test]
    fn search_reaches_speaker_company() {
        let s = session(
            r#"{"id": "1", "title": "Keynote",
                "speakers": [{"id": "a", "name": "Grace Hopper", "company": "Wundergraph"}]}"#,
        );
        assert!(filter(None, None, None, Some("wundergraf")).matches(&s));
        assert!(filter(None, None, None, Some("hopper")).matches(&s));
        assert!(!filter(None, None, None, Some("xyz123")).matches(&s));
    }

    #[test]
    fn tag_filter_is_fuzzy() {
        let s = session(r#"{"id": "1", "title": "Intro", "tags": [{"title": "Observability"}]}"#);
        assert!(filter(None, None, Some("observabilty"), None).matches(&s));

        let untagged = session(r#"{"id": "2", "title": "Intro"}"#);
        assert!(!filter(None, None, Some("observability"), None).matches(&untagged));
    }

    #[test]
    fn all_criteria_must_hold() {
        let s = session(
            r#"{"id": "1", "title": "Federated GraphQL", "tags": [{"title": "APIs"}]}"#,
        );
        assert!(filter(Some("1"), Some("graphql"), Some("apis"), None).matches(&s));
        assert!(!filter(Some("2"), Some("graphql"), Some("apis"), None).matches(&s));
        assert!(!filter(Some("1"), Some("kubernetes operators"), None, None).matches(&s));
    }
}
