//! Badge catalog and earned-badge records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static description of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const fn def(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
) -> BadgeDef {
    BadgeDef {
        id,
        name,
        description,
        icon,
    }
}

pub const VARIABLE_STARTER: &str = "variable-starter";
pub const PYTHON_HERO: &str = "python-hero";

/// Streak length → badge.
pub const STREAK_BADGES: [(u32, &str); 4] = [
    (3, "streak-3"),
    (7, "streak-7"),
    (14, "streak-14"),
    (30, "streak-30"),
];

/// Total daily challenges completed → badge.
pub const DAILY_BADGES: [(u32, &str); 3] = [(5, "daily-5"), (15, "daily-15"), (30, "daily-30")];

pub const BADGES: [BadgeDef; 18] = [
    // First lesson of each world
    def(VARIABLE_STARTER, "Variable Starter", "Created your first magic box", "📦"),
    def("decision-maker", "Decision Maker", "Made your first choice", "🔀"),
    def("loop-apprentice", "Loop Apprentice", "Started climbing the mountains", "🥾"),
    def("spell-writer", "Spell Writer", "Wrote your first function", "📜"),
    def("bug-hunter", "Bug Hunter", "Found your first bug", "🔍"),
    // World completion
    def("village-master", "Village Master", "Mastered all variables in the village", "🏘️"),
    def("forest-explorer", "Forest Explorer", "Conquered all paths in the forest", "🌲"),
    def("loop-hero", "Loop Hero", "Reached the summit of Loop Mountains", "⛰️"),
    def("castle-knight", "Castle Knight", "Mastered all spells in the castle", "🏰"),
    def("dragon-slayer", "Dragon Slayer", "Defeated the Dragon of Debugging", "🐉"),
    // Everything
    def(PYTHON_HERO, "Python Hero", "Completed the entire PyQuest adventure!", "👑"),
    // Streaks
    def("streak-3", "Consistent Coder", "Completed challenges 3 days in a row!", "🔥"),
    def("streak-7", "Week Warrior", "Maintained a 7-day streak!", "⚡"),
    def("streak-14", "Fortnight Fighter", "Kept coding for 14 days straight!", "💪"),
    def("streak-30", "Monthly Master", "Achieved a legendary 30-day streak!", "🏆"),
    // Daily challenges
    def("daily-5", "Challenge Taker", "Completed 5 daily challenges!", "🎯"),
    def("daily-15", "Challenge Champion", "Completed 15 daily challenges!", "🌟"),
    def("daily-30", "Challenge Legend", "Completed 30 daily challenges!", "💎"),
];

pub fn find(id: &str) -> Option<&'static BadgeDef> {
    BADGES.iter().find(|b| b.id == id)
}

/// A badge as stored in the game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
}

impl Badge {
    /// Mark as earned. Keeps the first earned time.
    pub fn earn(&mut self, at: DateTime<Utc>) {
        if !self.earned {
            self.earned = true;
            self.earned_at = Some(at);
        }
    }
}

impl From<&BadgeDef> for Badge {
    fn from(def: &BadgeDef) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            earned: false,
            earned_at: None,
        }
    }
}

/// Every catalog badge, unearned.
pub fn initial_badges() -> Vec<Badge> {
    BADGES.iter().map(Badge::from).collect()
}
