//! Gamification ledger: XP, levels, badges, and level-up celebrations
//!
//! Everything here is a pure, synchronous computation over an in-memory
//! snapshot of the restaurant collection. There is no cache and no persisted
//! derived state: XP, the resolved level, and badge unlocks are re-derived
//! from the full collection on every call, so they can be recomputed on every
//! render without synchronization.
//!
//! # Usage
//!
//! ```ignore
//! let view = LedgerView::compute(&restaurants);
//! render_progress_bar(view.progress.fraction());
//! render_badges(&view.badges);
//! ```

mod badges;
mod celebration;
mod levels;
mod xp;

pub use badges::{BADGES, Badge, BadgeCriteria, BadgeId, BadgeStatus, evaluate_badges};
pub use celebration::{CelebrationState, LevelUp};
pub use levels::{LEVELS, Level, LevelProgress};
pub use xp::{XpRewards, compute_xp, record_points};

use crate::domain::RestaurantRecord;

/// Everything the UI needs to render the gamification surface, derived from
/// the full collection in one pass
#[derive(Debug)]
pub struct LedgerView {
    pub total_xp: u32,
    pub progress: LevelProgress,
    pub badges: Vec<BadgeStatus>,
}

impl LedgerView {
    /// Recompute the whole view from the collection
    pub fn compute(records: &[RestaurantRecord]) -> Self {
        let total_xp = compute_xp(records);
        Self {
            total_xp,
            progress: LevelProgress::new(total_xp),
            badges: evaluate_badges(records),
        }
    }
}
