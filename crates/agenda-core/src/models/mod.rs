//! Data models for Agenda

mod location;
mod session;
mod speaker;

pub use location::{Location, LocationRef};
pub use session::{Session, SessionView, Tag};
pub use speaker::{Speaker, SpeakerRef};

use serde::{Deserialize, Deserializer};

/// Accept ids written either as JSON strings or numbers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text.trim().to_string(),
        RawId::Number(number) => number.to_string(),
    })
}

/// Missing or `null` lists become empty; `null` entries are dropped.
pub(crate) fn deserialize_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_list")]
        items: Vec<u32>,
    }

    #[test]
    fn numeric_and_string_ids_normalize_to_text() {
        let numeric: Holder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let text: Holder = serde_json::from_str(r#"{"id": " 42 "}"#).unwrap();
        assert_eq!(numeric.id, "42");
        assert_eq!(text.id, "42");
    }

    #[test]
    fn list_tolerates_missing_null_and_null_entries() {
        let missing: Holder = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
        let null: Holder = serde_json::from_str(r#"{"id": "a", "items": null}"#).unwrap();
        let sparse: Holder =
            serde_json::from_str(r#"{"id": "a", "items": [1, null, 3]}"#).unwrap();
        assert!(missing.items.is_empty());
        assert!(null.items.is_empty());
        assert_eq!(sparse.items, vec![1, 3]);
    }
}
