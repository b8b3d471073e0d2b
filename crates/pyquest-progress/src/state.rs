//! Player progress state and read-only queries over it.

use crate::badge::{initial_badges, Badge};
use crate::catalog::World;
use crate::daily::DailyStatus;
use crate::level;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A completed lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    pub lesson_id: String,
    /// Slug of the world the lesson belongs to.
    pub world_id: String,
    pub completed: bool,
    pub xp_earned: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Everything persisted about one player.
///
/// Missing fields in stored JSON take their initial values, so state saved
/// by older builds still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameState {
    pub player_name: String,
    pub player_avatar: String,
    pub xp: u32,
    /// Index into [`level::LEVELS`].
    pub level: usize,
    /// Highest unlocked world id.
    pub current_world: u32,
    pub completed_lessons: Vec<LessonProgress>,
    pub badges: Vec<Badge>,
    pub streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_played_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_daily_challenge_date: Option<NaiveDate>,
    pub daily_challenge_index: u32,
    pub total_daily_challenges: u32,
    pub has_seen_tutorial: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            player_avatar: "🧙".to_string(),
            xp: 0,
            level: 0,
            current_world: 1,
            completed_lessons: Vec::new(),
            badges: initial_badges(),
            streak: 0,
            last_played_at: None,
            last_daily_challenge_date: None,
            daily_challenge_index: 0,
            total_daily_challenges: 0,
            has_seen_tutorial: false,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_lesson_completed(&self, lesson_id: &str) -> bool {
        self.completed_lessons.iter().any(|l| l.lesson_id == lesson_id)
    }

    pub fn is_world_unlocked(&self, world_id: u32) -> bool {
        world_id <= self.current_world
    }

    pub fn is_world_completed(&self, world: &World) -> bool {
        world
            .lessons
            .iter()
            .all(|l| self.is_lesson_completed(l.id))
    }

    pub fn badge(&self, id: &str) -> Option<&Badge> {
        self.badges.iter().find(|b| b.id == id)
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badge(id).is_some_and(|b| b.earned)
    }

    pub fn earned_badges(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter().filter(|b| b.earned)
    }

    pub fn daily_status(&self, today: NaiveDate) -> DailyStatus {
        DailyStatus {
            is_completed: self.last_daily_challenge_date == Some(today),
            today_challenge: self.daily_challenge_index,
        }
    }

    pub fn level_name(&self) -> &'static str {
        level::level_name(self.level)
    }

    pub fn xp_to_next_level(&self) -> u32 {
        level::xp_to_next_level(self.level, self.xp)
    }

    pub fn level_progress(&self) -> f64 {
        level::level_progress(self.level, self.xp)
    }
}
