//! Loading the conference dataset document.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{deserialize_list, Session};

/// The raw dataset document: `{ "sessions": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "deserialize_list")]
    pub sessions: Vec<Session>,
}

impl Dataset {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse the dataset file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            sessions = dataset.sessions.len(),
            "Loaded agenda dataset"
        );
        Ok(dataset)
    }
}
