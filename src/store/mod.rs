//! Restaurant collection store
//!
//! Owns the in-process snapshot of the user's restaurants and serializes all
//! mutations through discrete action calls. Every mutation is confirmed
//! against the remote backend before the local snapshot changes: on a remote
//! failure the snapshot is untouched, no level-transition check runs, and the
//! error is returned to the caller for display.

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::RestaurantRecord;
use crate::ledger::{CelebrationState, LedgerView, LevelUp, compute_xp};

/// The remote data store the app is backed by. Implementations perform the
/// actual network I/O; errors cross this seam as `anyhow::Error` and are
/// wrapped into [`StoreError`] by the store.
pub trait RestaurantBackend {
    /// Fetch the user's full restaurant collection
    fn fetch_all(&self) -> Result<Vec<RestaurantRecord>>;

    /// Persist one record (upsert by id)
    fn save(&self, record: &RestaurantRecord) -> Result<()>;
}

/// Errors surfaced by store actions
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unknown restaurant: {0}")]
    UnknownRestaurant(String),

    #[error("saving to the food diary failed: {0}")]
    Backend(#[source] anyhow::Error),
}

/// Review details attached when marking a restaurant visited
#[derive(Debug, Clone, Default)]
pub struct VisitDetails {
    /// 0 leaves the rating unset
    pub rating: f32,
    pub comment: Option<String>,
    pub image_url: Option<String>,
    /// Defaults to now when absent
    pub visited_at: Option<DateTime<Utc>>,
}

/// In-memory collection store with a remote backend collaborator
pub struct RestaurantStore {
    backend: Box<dyn RestaurantBackend>,
    restaurants: Vec<RestaurantRecord>,
    celebration: CelebrationState,
}

impl RestaurantStore {
    /// Create an empty store; call [`refresh`](Self::refresh) to load the
    /// collection from the backend
    pub fn new(backend: Box<dyn RestaurantBackend>) -> Self {
        Self {
            backend,
            restaurants: Vec::new(),
            celebration: CelebrationState::default(),
        }
    }

    /// Create a store pre-seeded with records (restored local state)
    pub fn with_records(
        backend: Box<dyn RestaurantBackend>,
        records: Vec<RestaurantRecord>,
    ) -> Self {
        let mut store = Self::new(backend);
        store.restaurants = records;
        store
    }

    /// Replace the snapshot with the backend's current collection
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        let records = self.backend.fetch_all().map_err(StoreError::Backend)?;
        debug!(count = records.len(), "refreshed restaurant collection");
        self.restaurants = records;
        Ok(())
    }

    pub fn restaurants(&self) -> &[RestaurantRecord] {
        &self.restaurants
    }

    /// Total XP for the current snapshot
    pub fn xp(&self) -> u32 {
        compute_xp(&self.restaurants)
    }

    /// Full gamification view for the current snapshot
    pub fn view(&self) -> LedgerView {
        LedgerView::compute(&self.restaurants)
    }

    pub fn celebration(&self) -> &CelebrationState {
        &self.celebration
    }

    /// Dismiss the pending celebration, if any
    pub fn dismiss_celebration(&mut self) -> Option<LevelUp> {
        self.celebration.dismiss()
    }

    // ========================================
    // ACTIONS
    // ========================================

    /// Mark a restaurant visited with an attached review. The write is
    /// confirmed by the backend before the snapshot mutates; only then does
    /// the pre/post level comparison run. Returns the level-up if the
    /// confirmed visit crossed a threshold.
    ///
    /// Marking an already-visited restaurant is a no-op success (no double
    /// credit).
    pub fn mark_visited(
        &mut self,
        id: &str,
        details: VisitDetails,
    ) -> Result<Option<LevelUp>, StoreError> {
        let index = self.index_of(id)?;
        if self.restaurants[index].is_visited {
            debug!(id, "already visited, nothing to do");
            return Ok(None);
        }

        let mut updated = self.restaurants[index].clone();
        updated.is_visited = true;
        updated.visited_at = Some(details.visited_at.unwrap_or_else(Utc::now));
        if details.rating > 0.0 {
            updated.rating = details.rating;
        }
        if let Some(comment) = details.comment {
            // Empty text is "no comment"
            updated.review_comment = Some(comment).filter(|c| !c.is_empty());
        }
        if details.image_url.is_some() {
            updated.image_url = details.image_url;
        }

        let old_xp = compute_xp(&self.restaurants);
        self.commit(index, updated)?;
        let new_xp = compute_xp(&self.restaurants);

        info!(id, old_xp, new_xp, "visit saved");

        let level_up = LevelUp::between(old_xp, new_xp);
        if let Some(level_up) = level_up {
            self.celebration.record(level_up);
        }
        Ok(level_up)
    }

    /// Un-mark a visit. XP decreases; this never fires a celebration.
    /// The review itself (rating, comment, photo) is kept on the record.
    pub fn unmark_visited(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        if !self.restaurants[index].is_visited {
            return Ok(());
        }

        let mut updated = self.restaurants[index].clone();
        updated.is_visited = false;
        updated.visited_at = None;

        self.commit(index, updated)?;
        info!(id, "visit removed");
        Ok(())
    }

    /// Toggle the favorite flag. Favorite changes can move XP by 20 points
    /// but never fire a celebration; only visit actions do.
    pub fn set_favorite(&mut self, id: &str, is_favorite: bool) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        if self.restaurants[index].is_favorite == is_favorite {
            return Ok(());
        }

        let mut updated = self.restaurants[index].clone();
        updated.is_favorite = is_favorite;

        self.commit(index, updated)?;
        debug!(id, is_favorite, "favorite updated");
        Ok(())
    }

    fn index_of(&self, id: &str) -> Result<usize, StoreError> {
        self.restaurants
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::UnknownRestaurant(id.to_string()))
    }

    /// Persist remotely, then apply locally. On backend failure the snapshot
    /// is left exactly as it was.
    fn commit(&mut self, index: usize, updated: RestaurantRecord) -> Result<(), StoreError> {
        if let Err(err) = self.backend.save(&updated) {
            warn!(id = %updated.id, %err, "remote write failed, keeping local state");
            return Err(StoreError::Backend(err));
        }
        self.restaurants[index] = updated;
        Ok(())
    }
}
