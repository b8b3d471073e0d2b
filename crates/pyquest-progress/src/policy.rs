//! What a successful lesson earns.

use crate::badge::PYTHON_HERO;
use crate::catalog::{self, find_lesson};
use crate::event::{apply, Event};
use crate::state::GameState;
use chrono::{DateTime, Utc};

/// Events to dispatch when the player passes `lesson_id` at `at`.
///
/// In order: complete the lesson; the world's first-lesson badge when this
/// is its first lesson; the world's completion badge and the next world's
/// unlock when this is its last lesson; the adventure badge once every
/// lesson is done. Empty for unknown or already completed lessons.
pub fn lesson_success_events(state: &GameState, lesson_id: &str, at: DateTime<Utc>) -> Vec<Event> {
    let Some((world, lesson)) = find_lesson(lesson_id) else {
        tracing::warn!(lesson = %lesson_id, "unknown lesson");
        return Vec::new();
    };
    if state.is_lesson_completed(lesson_id) {
        return Vec::new();
    }

    let complete = Event::CompleteLesson {
        lesson_id: lesson.id.to_string(),
        world_id: world.slug.to_string(),
        xp: lesson.xp,
        at,
    };
    let after = apply(state.clone(), &complete);
    let mut events = vec![complete];
    let badge = |id: &str| Event::EarnBadge {
        badge_id: id.to_string(),
        at,
    };

    let position = world.lessons.iter().position(|l| l.id == lesson.id);
    if position == Some(0) {
        events.push(badge(world.first_lesson_badge));
    }
    if position == Some(world.lessons.len() - 1) {
        if after.is_world_completed(world) {
            events.push(badge(world.completion_badge));
        }
        if catalog::world(world.id + 1).is_some() {
            events.push(Event::UnlockWorld {
                world_id: world.id + 1,
            });
        }
    }
    if catalog::all_lessons().all(|l| after.is_lesson_completed(l.id)) {
        events.push(badge(PYTHON_HERO));
    }
    events
}
