//! Session ratings kept for the lifetime of the process.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Aggregate ratings for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub session_id: String,
    /// `None` until the session has been rated at least once
    pub average_rating: Option<f64>,
    pub ratings_count: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    sum: u32,
    count: u32,
}

/// Ratings per session id, behind a single lock.
#[derive(Debug, Default)]
pub struct RatingStore {
    tallies: RwLock<HashMap<String, Tally>>,
}

impl RatingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rating in `[1, 5]` and return the updated summary.
    pub fn rate(&self, session_id: &str, rating: i64) -> Result<RatingSummary> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            tracing::warn!(session_id, rating, "Rejected out-of-range rating");
            return Err(Error::InvalidInput(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        let points = u32::try_from(rating)
            .map_err(|_| Error::InvalidInput(format!("Invalid rating: {rating}")))?;

        let tally = {
            let mut guard = self
                .tallies
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let entry = guard.entry(session_id.to_string()).or_default();
            entry.sum = entry.sum.saturating_add(points);
            entry.count = entry.count.saturating_add(1);
            *entry
        };

        tracing::info!(session_id, rating, count = tally.count, "Recorded session rating");
        Ok(summarize(session_id, tally))
    }

    pub fn summary(&self, session_id: &str) -> RatingSummary {
        let tally = self
            .tallies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .copied()
            .unwrap_or_default();
        summarize(session_id, tally)
    }
}

fn summarize(session_id: &str, tally: Tally) -> RatingSummary {
    let average_rating = (tally.count > 0).then(|| f64::from(tally.sum) / f64::from(tally.count));
    RatingSummary {
        session_id: session_id.to_string(),
        average_rating,
        ratings_count: tally.count,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unrated_session_has_no_average() {
        let store = RatingStore::new();
        assert_eq!(
            store.summary("s1"),
            RatingSummary {
                session_id: "s1".to_string(),
                average_rating: None,
                ratings_count: 0,
            }
        );
    }

    #[test]
    fn rate_accumulates_average() {
        let store = RatingStore::new();
        store.rate("s1", 5).unwrap();
        store.rate("s1", 4).unwrap();
        let summary = store.rate("s1", 3).unwrap();

        assert_eq!(summary.ratings_count, 3);
        assert_eq!(summary.average_rating, Some(4.0));
        assert_eq!(store.summary("s2").ratings_count, 0);
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        let store = RatingStore::new();
        for rating in [0, 6, -1, i64::MAX] {
            let err = store.rate("s1", rating).unwrap_err();
            assert!(err.to_string().contains("between 1 and 5"));
        }
        assert_eq!(store.summary("s1").ratings_count, 0);
    }

    #[test]
    fn concurrent_ratings_are_all_counted() {
        let store = Arc::new(RatingStore::new());
        let handles = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..25 {
                        store.rate("busy", 2).unwrap();
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        let summary = store.summary("busy");
        assert_eq!(summary.ratings_count, 200);
        assert_eq!(summary.average_rating, Some(2.0));
    }

    #[test]
    fn summary_serializes_camel_case() {
        let store = RatingStore::new();
        let summary = store.rate("s1", 4).unwrap();
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"sessionId": "s1", "averageRating": 4.0, "ratingsCount": 1})
        );
    }
}
