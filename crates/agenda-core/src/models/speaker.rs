//! Speaker model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::deserialize_id;

/// A conference speaker as it appears inside session records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    /// Unique identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Organisation the speaker represents
    #[serde(default)]
    pub company: Option<String>,
    /// Any other attributes carried by the dataset (bio, photo, links...)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Lightweight speaker reference embedded in session views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerRef {
    pub id: String,
    pub name: Option<String>,
}

impl Speaker {
    #[must_use]
    pub fn reference(&self) -> SpeakerRef {
        SpeakerRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unknown_attributes() {
        let speaker: Speaker = serde_json::from_str(
            r#"{"id": 7, "name": "Ada", "company": "Engines Ltd", "twitter": "@ada"}"#,
        )
        .unwrap();
        assert_eq!(speaker.id, "7");
        assert_eq!(speaker.company.as_deref(), Some("Engines Ltd"));
        assert_eq!(
            speaker.attributes.get("twitter"),
            Some(&Value::String("@ada".to_string()))
        );

        let round_trip = serde_json::to_value(&speaker).unwrap();
        assert_eq!(round_trip["twitter"], "@ada");
    }

    #[test]
    fn reference_carries_id_and_name() {
        let speaker: Speaker = serde_json::from_str(r#"{"id": "s1", "name": "Ada"}"#).unwrap();
        assert_eq!(
            speaker.reference(),
            SpeakerRef {
                id: "s1".to_string(),
                name: Some("Ada".to_string()),
            }
        );
    }
}
