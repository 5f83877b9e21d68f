//! Experience computation
//!
//! XP is a pure tabulation over the restaurant collection: each record scores
//! through exactly one path (visited, else favorite, else nothing), points
//! are additive with no cap, and records never interact. The sum is therefore
//! independent of collection order and safe to recompute on every render.

use crate::domain::RestaurantRecord;

/// Points awarded per interaction
pub struct XpRewards;

impl XpRewards {
    /// Marking a restaurant visited
    pub const VISIT: u32 = 100;

    /// A real rating (> 0) on a visited restaurant
    pub const RATING: u32 = 50;

    /// A non-empty review comment on a visited restaurant
    pub const COMMENT: u32 = 50;

    /// A photo on a visited restaurant
    pub const PHOTO: u32 = 50;

    /// A favorited restaurant that has not been visited
    pub const FAVORITE: u32 = 20;
}

/// Points contributed by a single record.
///
/// A record that is both visited and favorited scores the visited path only;
/// visited supersedes favorite.
pub fn record_points(record: &RestaurantRecord) -> u32 {
    if record.is_visited {
        let mut points = XpRewards::VISIT;
        if record.has_rating() {
            points += XpRewards::RATING;
        }
        if record.has_comment() {
            points += XpRewards::COMMENT;
        }
        if record.has_photo() {
            points += XpRewards::PHOTO;
        }
        points
    } else if record.is_favorite {
        XpRewards::FAVORITE
    } else {
        0
    }
}

/// Total XP for the whole collection
pub fn compute_xp(records: &[RestaurantRecord]) -> u32 {
    records.iter().map(record_points).sum()
}
