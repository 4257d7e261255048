//! Session model

use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_list, Location, LocationRef, Speaker, SpeakerRef};

/// A tag attached to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub title: Option<String>,
}

/// A scheduled conference session as stored in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Start time, as written in the dataset
    #[serde(default)]
    pub date_start: Option<String>,
    /// End time, as written in the dataset
    #[serde(default)]
    pub date_end: Option<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub tags: Vec<Tag>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub speakers: Vec<Speaker>,
    /// Rooms the session is held in
    #[serde(default, deserialize_with = "deserialize_list")]
    pub places: Vec<Location>,
}

impl Session {
    /// Tag titles, skipping tags without one
    pub fn tag_titles(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().filter_map(|tag| tag.title.as_deref())
    }

    /// Every text field a free-text search looks at: title, description,
    /// tag titles, speaker names and speaker companies.
    pub fn searchable_fields(&self) -> impl Iterator<Item = Option<&str>> {
        let tags = self.tags.iter().map(|tag| tag.title.as_deref());
        let speakers = self.speakers.iter().flat_map(|speaker| {
            [speaker.name.as_deref(), speaker.company.as_deref()]
        });

        [self.title.as_deref(), self.description.as_deref()]
            .into_iter()
            .chain(tags)
            .chain(speakers)
    }

    pub fn has_speaker(&self, speaker_id: &str) -> bool {
        self.speakers.iter().any(|speaker| speaker.id == speaker_id)
    }

    pub fn is_held_at(&self, location_id: &str) -> bool {
        self.places.iter().any(|place| place.id == location_id)
    }
}

/// Outward representation of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub tags: Vec<String>,
    pub speakers: Vec<SpeakerRef>,
    pub locations: Vec<LocationRef>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            title: session.title.clone(),
            description: session.description.clone(),
            date_start: session.date_start.clone(),
            date_end: session.date_end.clone(),
            tags: session.tag_titles().map(str::to_string).collect(),
            speakers: session.speakers.iter().map(Speaker::reference).collect(),
            locations: session.places.iter().map(Location::reference).collect(),
        }
    }
}
