//! Hello Foodie! gamification ledger
//!
//! Converts a user's restaurant-interaction history into experience points,
//! levels, and achievement badges, and fires the level-up celebration when a
//! confirmed visit pushes the user across a threshold.
//!
//! The ledger itself is pure: XP, levels, and badges are always re-derived
//! from the full restaurant collection, never persisted or cached. The only
//! stateful piece is [`store::RestaurantStore`], which owns the in-memory
//! collection snapshot, confirms mutations against the remote backend before
//! applying them, and holds the session-scoped celebration state.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = RestaurantStore::new(Box::new(backend));
//! store.refresh()?;
//!
//! // Render the progress bar and badge gallery
//! let view = store.view();
//!
//! // Mark a visit; Some(level_up) means the celebration modal should show
//! let level_up = store.mark_visited("r-42", VisitDetails::default())?;
//! ```

pub mod domain;
pub mod ledger;
pub mod store;

pub use domain::RestaurantRecord;
pub use ledger::{
    BADGES, Badge, BadgeCriteria, BadgeId, BadgeStatus, CelebrationState, LEVELS, LedgerView,
    Level, LevelProgress, LevelUp, XpRewards, compute_xp, evaluate_badges,
};
pub use store::{RestaurantBackend, RestaurantStore, StoreError, VisitDetails};
