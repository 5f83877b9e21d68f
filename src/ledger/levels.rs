//! Level definitions and resolution
//!
//! Levels are static configuration compiled into the app: a totally ordered
//! table of XP thresholds with food-themed titles. Resolution is total -
//! the table starts at threshold 0, so every XP value maps to a level.

/// Level definition
#[derive(Debug, PartialEq, Eq)]
pub struct Level {
    pub level: u32,
    /// Minimum cumulative XP to hold this level
    pub xp_required: u32,
    pub title: &'static str,
    /// Congratulatory text shown on level up
    pub description: &'static str,
}

/// All level definitions (thresholds strictly increasing, first entry 0)
pub static LEVELS: &[Level] = &[
    Level {
        level: 1,
        xp_required: 0,
        title: "Appetizer",
        description: "Welcome to the table! Your foodie journey begins.",
    },
    Level {
        level: 2,
        xp_required: 500,
        title: "Flavor Seeker",
        description: "You're developing a taste for adventure!",
    },
    Level {
        level: 3,
        xp_required: 1200,
        title: "Taste Explorer",
        description: "No menu is safe from your curiosity.",
    },
    Level {
        level: 4,
        xp_required: 2500,
        title: "Local Gourmet",
        description: "The neighborhood spots know you by name.",
    },
    Level {
        level: 5,
        xp_required: 4500,
        title: "Food Critic",
        description: "Your reviews carry real weight now.",
    },
    Level {
        level: 6,
        xp_required: 7000,
        title: "Culinary Adventurer",
        description: "You'll travel across town for the right bite.",
    },
    Level {
        level: 7,
        xp_required: 10000,
        title: "Master Foodie",
        description: "Chefs respect you. Friends ask you where to eat.",
    },
    Level {
        level: 8,
        xp_required: 15000,
        title: "Legendary Gourmand",
        description: "A living map of everything worth eating.",
    },
];

impl Level {
    /// Resolve the level held at the given XP: the highest-ranked entry whose
    /// threshold is met. Selects the maximal qualifying threshold explicitly
    /// rather than trusting the table's storage order.
    pub fn for_xp(xp: u32) -> &'static Level {
        debug_assert!(table_is_valid(), "level table must start at 0 and strictly increase");
        LEVELS
            .iter()
            .filter(|l| l.xp_required <= xp)
            .max_by_key(|l| l.xp_required)
            .unwrap_or(&LEVELS[0])
    }

    /// The next level to unlock: the lowest threshold strictly above the
    /// given XP, or None at the terminal level.
    pub fn next_for_xp(xp: u32) -> Option<&'static Level> {
        LEVELS
            .iter()
            .filter(|l| l.xp_required > xp)
            .min_by_key(|l| l.xp_required)
    }

    /// Get max level rank
    pub fn max_level() -> u32 {
        LEVELS.iter().map(|l| l.level).max().unwrap_or(1)
    }
}

/// Configuration sanity: a zero-threshold base entry and strictly increasing
/// ranks and thresholds. A violation is a programming error, caught in
/// development; `for_xp` stays total regardless.
fn table_is_valid() -> bool {
    LEVELS.first().is_some_and(|l| l.xp_required == 0)
        && LEVELS
            .windows(2)
            .all(|w| w[0].xp_required < w[1].xp_required && w[0].level < w[1].level)
}

/// Current standing on the level track, derived from total XP
#[derive(Debug, Clone)]
pub struct LevelProgress {
    pub total_xp: u32,
    pub current: &'static Level,
    pub next: Option<&'static Level>,
}

impl LevelProgress {
    pub fn new(total_xp: u32) -> Self {
        Self {
            total_xp,
            current: Level::for_xp(total_xp),
            next: Level::next_for_xp(total_xp),
        }
    }

    /// Fraction of the way to the next level, clamped to [0, 1].
    /// The clamp covers transient out-of-range XP during optimistic updates.
    pub fn fraction(&self) -> f32 {
        match self.next {
            Some(next) => {
                let span = next.xp_required.saturating_sub(self.current.xp_required);
                if span == 0 {
                    return 1.0;
                }
                let into = self.total_xp.saturating_sub(self.current.xp_required);
                (into as f32 / span as f32).clamp(0.0, 1.0)
            }
            None => 1.0, // Max level
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.next.is_none()
    }
}
