//! Level-up celebration state machine
//!
//! Session-scoped and in-memory only: a celebration exists between the
//! confirmed mutation that raised the level and the user dismissing the
//! modal. It is never persisted - closing the app discards it.

use tracing::{debug, info};

use super::levels::Level;

/// A level-up event: the resolved level increased across a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub previous: &'static Level,
    pub new: &'static Level,
}

impl LevelUp {
    /// Compare the resolved levels before and after a mutation. Fires only on
    /// an upward rank crossing; XP decreases and same-level gains yield None.
    pub fn between(old_xp: u32, new_xp: u32) -> Option<Self> {
        let previous = Level::for_xp(old_xp);
        let new = Level::for_xp(new_xp);
        (new.level > previous.level).then_some(Self { previous, new })
    }
}

/// Pending-celebration state for the current session
#[derive(Debug, Clone, Default)]
pub enum CelebrationState {
    #[default]
    Idle,
    Celebrating(LevelUp),
}

impl CelebrationState {
    /// Record a qualifying transition. A celebration that is still pending is
    /// replaced, not queued - last transition wins.
    pub fn record(&mut self, level_up: LevelUp) {
        if let Self::Celebrating(pending) = self {
            debug!(
                dropped = pending.new.title,
                "replacing undismissed celebration"
            );
        }
        info!(
            from = level_up.previous.level,
            to = level_up.new.level,
            title = level_up.new.title,
            "level up"
        );
        *self = Self::Celebrating(level_up);
    }

    /// Explicit user dismissal: Celebrating -> Idle
    pub fn dismiss(&mut self) -> Option<LevelUp> {
        match std::mem::take(self) {
            Self::Celebrating(level_up) => Some(level_up),
            Self::Idle => None,
        }
    }

    /// The celebration awaiting dismissal, if any
    pub fn pending(&self) -> Option<&LevelUp> {
        match self {
            Self::Celebrating(level_up) => Some(level_up),
            Self::Idle => None,
        }
    }

    pub fn is_celebrating(&self) -> bool {
        matches!(self, Self::Celebrating(_))
    }
}
