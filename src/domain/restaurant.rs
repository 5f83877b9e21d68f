//! Restaurant record as supplied by the remote data store
//!
//! The backend returns loosely-typed JSON; every optional field is normalized
//! once here so the ledger can assume well-typed input. A missing or malformed
//! optional field is "does not qualify", never an error.

use chrono::{DateTime, Local, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A saved restaurant and everything the user has done with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Opaque identifier assigned by the data store
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_visited: bool,
    #[serde(default)]
    pub is_favorite: bool,
    /// User rating; 0 means "unset" for scoring purposes
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: f32,
    #[serde(default)]
    pub review_comment: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Free-text cuisine label, matched case-insensitively by badge criteria
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub visited_at: Option<DateTime<Utc>>,
}

impl RestaurantRecord {
    /// Parse a record from a raw backend payload
    pub fn from_api_json(value: serde_json::Value) -> anyhow::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// True if the user gave this place a real rating
    pub fn has_rating(&self) -> bool {
        self.rating > 0.0
    }

    /// True if a non-empty review comment is attached
    pub fn has_comment(&self) -> bool {
        self.review_comment.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// True if a non-empty photo URL is attached
    pub fn has_photo(&self) -> bool {
        self.image_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Case-insensitive substring match against the cuisine label.
    /// `needle` must already be lowercase.
    pub fn cuisine_contains(&self, needle: &str) -> bool {
        self.cuisine
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
    }

    /// Local wall-clock hour (0-23) of the visit, if one is recorded
    pub fn visited_hour_local(&self) -> Option<u32> {
        self.visited_at
            .map(|t| t.with_timezone(&Local).hour())
    }
}

/// Accept a rating as a number, a numeric string, or nothing at all.
/// Anything unparseable collapses to 0 (unset).
fn lenient_rating<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRating {
        Number(f32),
        Text(String),
        Nothing(()),
    }

    Ok(match RawRating::deserialize(deserializer)? {
        RawRating::Number(n) if n.is_finite() => n,
        RawRating::Text(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
