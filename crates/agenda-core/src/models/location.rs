//! Location model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::deserialize_id;

/// A room or venue where sessions take place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: String,
}

impl Location {
    #[must_use]
    pub fn reference(&self) -> LocationRef {
        LocationRef {
            id: self.id.clone(),
        }
    }
}
