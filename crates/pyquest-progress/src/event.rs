//! Progress events and the reducer that applies them.

use crate::badge::{DAILY_BADGES, STREAK_BADGES};
use crate::level::level_for;
use crate::state::{GameState, LessonProgress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One change to a player's progress.
///
/// Serialized with a `type` tag, e.g.
/// `{"type":"completeLesson","lessonId":"var-1","worldId":"village-of-variables","xp":20,"at":"…"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Event {
    SetPlayerName {
        name: String,
    },
    SetPlayerAvatar {
        avatar: String,
    },
    AddXp {
        amount: u32,
    },
    /// Ignored if the lesson is already completed.
    CompleteLesson {
        lesson_id: String,
        world_id: String,
        xp: u32,
        at: DateTime<Utc>,
    },
    EarnBadge {
        badge_id: String,
        at: DateTime<Utc>,
    },
    /// Raises the current world; never lowers it.
    UnlockWorld {
        world_id: u32,
    },
    /// Ignored if a daily challenge was already completed on `at`'s UTC date.
    CompleteDailyChallenge {
        xp: u32,
        at: DateTime<Utc>,
    },
    CompleteTutorial,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::SetPlayerName { .. } => "setPlayerName",
            Event::SetPlayerAvatar { .. } => "setPlayerAvatar",
            Event::AddXp { .. } => "addXp",
            Event::CompleteLesson { .. } => "completeLesson",
            Event::EarnBadge { .. } => "earnBadge",
            Event::UnlockWorld { .. } => "unlockWorld",
            Event::CompleteDailyChallenge { .. } => "completeDailyChallenge",
            Event::CompleteTutorial => "completeTutorial",
        }
    }
}

/// Apply `event` to `state`, returning the next state.
///
/// Pure: no clock, no storage. Events that don't apply return the state
/// unchanged.
#[tracing::instrument(level = "debug", skip_all, fields(event = event.name()))]
pub fn apply(mut state: GameState, event: &Event) -> GameState {
    match event {
        Event::SetPlayerName { name } => state.player_name = name.clone(),
        Event::SetPlayerAvatar { avatar } => state.player_avatar = avatar.clone(),
        Event::AddXp { amount } => add_xp(&mut state, *amount),
        Event::CompleteLesson {
            lesson_id,
            world_id,
            xp,
            at,
        } => {
            if state.is_lesson_completed(lesson_id) {
                tracing::debug!(lesson = %lesson_id, "lesson already completed");
                return state;
            }
            add_xp(&mut state, *xp);
            state.completed_lessons.push(LessonProgress {
                lesson_id: lesson_id.clone(),
                world_id: world_id.clone(),
                completed: true,
                xp_earned: *xp,
                completed_at: Some(*at),
            });
            state.last_played_at = Some(*at);
        }
        Event::EarnBadge { badge_id, at } => earn_badge(&mut state, badge_id, *at),
        Event::UnlockWorld { world_id } => {
            state.current_world = state.current_world.max(*world_id);
        }
        Event::CompleteDailyChallenge { xp, at } => complete_daily(&mut state, *xp, *at),
        Event::CompleteTutorial => state.has_seen_tutorial = true,
    }
    state
}

fn add_xp(state: &mut GameState, amount: u32) {
    state.xp = state.xp.saturating_add(amount);
    let level = level_for(state.xp);
    if level != state.level {
        tracing::debug!(from = state.level, to = level, xp = state.xp, "level changed");
    }
    state.level = level;
}

fn earn_badge(state: &mut GameState, badge_id: &str, at: DateTime<Utc>) {
    match state.badges.iter_mut().find(|b| b.id == badge_id) {
        Some(badge) => badge.earn(at),
        None => tracing::warn!(badge = %badge_id, "unknown badge"),
    }
}

fn complete_daily(state: &mut GameState, xp: u32, at: DateTime<Utc>) {
    let today = at.date_naive();
    if state.last_daily_challenge_date == Some(today) {
        tracing::debug!(%today, "daily challenge already completed");
        return;
    }

    let consecutive = state.last_daily_challenge_date.is_some()
        && state.last_daily_challenge_date == today.pred_opt();
    state.streak = if consecutive { state.streak + 1 } else { 1 };
    state.total_daily_challenges += 1;
    add_xp(state, xp);
    state.last_daily_challenge_date = Some(today);
    state.daily_challenge_index += 1;
    state.last_played_at = Some(at);

    let streak = state.streak;
    let total = state.total_daily_challenges;
    let earned = STREAK_BADGES
        .iter()
        .filter(|&&(days, _)| streak >= days)
        .chain(DAILY_BADGES.iter().filter(|&&(count, _)| total >= count));
    for &(_, badge_id) in earned {
        earn_badge(state, badge_id, at);
    }
}
