//! In-memory catalogue of sessions, speakers and locations
//!
//! Speakers and locations have no records of their own in the dataset; they
//! are collected from the sessions that reference them, deduplicated by id
//! with the first occurrence winning.

mod filter;

pub use filter::SessionFilter;

use std::collections::HashSet;
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::models::{Location, Session, Speaker};
use crate::search::SearchQuery;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sessions: Vec<Session>,
    speakers: Vec<Speaker>,
    locations: Vec<Location>,
}

impl Catalog {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        let sessions = dataset.sessions;
        let speakers = unique_by_id(sessions.iter().flat_map(|s| &s.speakers), |speaker| {
            speaker.id.as_str()
        })
        .into_iter()
        .cloned()
        .collect();
        let locations = unique_by_id(sessions.iter().flat_map(|s| &s.places), |place| {
            place.id.as_str()
        })
        .into_iter()
        .cloned()
        .collect();

        Self {
            sessions,
            speakers,
            locations,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let catalog = Self::new(Dataset::load(path)?);
        tracing::info!(
            sessions = catalog.sessions.len(),
            speakers = catalog.speakers.len(),
            locations = catalog.locations.len(),
            "Built agenda catalog"
        );
        Ok(catalog)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn speaker_count(&self) -> usize {
        self.speakers.len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Sessions satisfying `filter`, in dataset order.
    pub fn sessions(&self, filter: &SessionFilter) -> Vec<&Session> {
        let matched = self
            .sessions
            .iter()
            .filter(|session| filter.matches(session))
            .collect::<Vec<_>>();
        tracing::debug!(?filter, matched = matched.len(), "Filtered sessions");
        matched
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Speakers whose name matches `name`, or all speakers when `None`.
    pub fn speakers(&self, name: Option<&SearchQuery>) -> Vec<&Speaker> {
        self.speakers
            .iter()
            .filter(|speaker| name.is_none_or(|query| query.matches(speaker.name.as_deref())))
            .collect()
    }

    pub fn speaker(&self, id: &str) -> Option<&Speaker> {
        self.speakers.iter().find(|speaker| speaker.id == id)
    }

    /// Locations whose name matches `name`, or all locations when `None`.
    pub fn locations(&self, name: Option<&SearchQuery>) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|location| name.is_none_or(|query| query.matches(location.name.as_deref())))
            .collect()
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    pub fn sessions_for_speaker(&self, speaker_id: &str) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|session| session.has_speaker(speaker_id))
            .collect()
    }

    /// Distinct locations of every session the speaker appears in.
    pub fn locations_for_speaker(&self, speaker_id: &str) -> Vec<&Location> {
        let places = self
            .sessions_for_speaker(speaker_id)
            .into_iter()
            .flat_map(|session| &session.places);
        unique_by_id(places, |place| place.id.as_str())
            .into_iter()
            .filter_map(|place| self.location(&place.id))
            .collect()
    }

    pub fn sessions_for_location(&self, location_id: &str) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|session| session.is_held_at(location_id))
            .collect()
    }

    /// Distinct speakers of every session held at the location.
    pub fn speakers_for_location(&self, location_id: &str) -> Vec<&Speaker> {
        let speakers = self
            .sessions_for_location(location_id)
            .into_iter()
            .flat_map(|session| &session.speakers);
        unique_by_id(speakers, |speaker| speaker.id.as_str())
            .into_iter()
            .filter_map(|speaker| self.speaker(&speaker.id))
            .collect()
    }
}

fn unique_by_id<'a, T>(
    items: impl IntoIterator<Item = &'a T>,
    id: impl Fn(&T) -> &str,
) -> Vec<&'a T>
where
    T: 'a,
{
    let mut seen: HashSet<&str> = HashSet::new();
    items
        .into_iter()
        .filter(|&item| seen.insert(id(item)))
        .collect()
}
