//! Special badge definitions and evaluation
//!
//! Badges are defined as metadata plus a criteria value interpreted by one
//! evaluator. Unlock state is never stored: every evaluation recomputes from
//! the full collection, so the displayed state can never drift from the data.

use crate::domain::RestaurantRecord;

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeId {
    PizzaLover,
    SushiSensei,
    NightOwl,
    TacoLegend,
}

impl BadgeId {
    /// Stable slug for the UI and analytics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PizzaLover => "pizza_lover",
            Self::SushiSensei => "sushi_sensei",
            Self::NightOwl => "night_owl",
            Self::TacoLegend => "taco_legend",
        }
    }

    /// Parse from a stored slug
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pizza_lover" => Some(Self::PizzaLover),
            "sushi_sensei" => Some(Self::SushiSensei),
            "night_owl" => Some(Self::NightOwl),
            "taco_legend" => Some(Self::TacoLegend),
            _ => None,
        }
    }
}

/// Unlock criteria, interpreted by [`BadgeCriteria::is_met`]
#[derive(Debug, Clone, Copy)]
pub enum BadgeCriteria {
    /// At least `required` visited restaurants whose cuisine contains any of
    /// the needles (case-insensitive substring; needles are lowercase)
    CuisineVisits {
        needles: &'static [&'static str],
        required: usize,
    },
    /// At least `required` visits whose local hour falls in the late-night
    /// window (22:00 to 04:59)
    NightVisits { required: usize },
}

impl BadgeCriteria {
    pub fn is_met(&self, records: &[RestaurantRecord]) -> bool {
        match self {
            Self::CuisineVisits { needles, required } => {
                records
                    .iter()
                    .filter(|r| r.is_visited && needles.iter().any(|n| r.cuisine_contains(n)))
                    .count()
                    >= *required
            }
            Self::NightVisits { required } => {
                records
                    .iter()
                    .filter(|r| {
                        r.is_visited
                            && r.visited_hour_local()
                                .is_some_and(|h| h >= 22 || h < 5)
                    })
                    .count()
                    >= *required
            }
        }
    }
}

/// Badge definition with all metadata
#[derive(Debug)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub criteria: BadgeCriteria,
}

/// All badge definitions
pub static BADGES: &[Badge] = &[
    Badge {
        id: BadgeId::PizzaLover,
        name: "Pizza Lover",
        subtitle: "Mamma mia!",
        description: "Visit 5 pizza places",
        icon: "🍕",
        criteria: BadgeCriteria::CuisineVisits {
            needles: &["pizza"],
            required: 5,
        },
    },
    Badge {
        id: BadgeId::SushiSensei,
        name: "Sushi Sensei",
        subtitle: "Itadakimasu",
        description: "Visit 5 sushi or Japanese restaurants",
        icon: "🍣",
        criteria: BadgeCriteria::CuisineVisits {
            needles: &["sushi", "japanese"],
            required: 5,
        },
    },
    Badge {
        id: BadgeId::NightOwl,
        name: "Night Owl",
        subtitle: "The city never sleeps",
        description: "Eat out 5 times between 10 PM and 5 AM",
        icon: "🦉",
        criteria: BadgeCriteria::NightVisits { required: 5 },
    },
    Badge {
        id: BadgeId::TacoLegend,
        name: "Taco Legend",
        subtitle: "Every day is taco Tuesday",
        description: "Visit 10 taco spots",
        icon: "🌮",
        criteria: BadgeCriteria::CuisineVisits {
            needles: &["taco"],
            required: 10,
        },
    },
];

impl Badge {
    /// Get badge definition by ID
    pub fn get(id: BadgeId) -> &'static Badge {
        BADGES
            .iter()
            .find(|b| b.id == id)
            .expect("All badges should be defined")
    }

    /// Get total number of badges
    pub fn total_count() -> usize {
        BADGES.len()
    }
}

/// A badge together with its unlock state for the current collection
#[derive(Debug)]
pub struct BadgeStatus {
    pub badge: &'static Badge,
    pub unlocked: bool,
}

/// Evaluate every badge against the full collection
pub fn evaluate_badges(records: &[RestaurantRecord]) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| BadgeStatus {
            badge,
            unlocked: badge.criteria.is_met(records),
        })
        .collect()
}
