//! Integration tests for progress tracking.
//!
//! - lesson success policy across the whole map
//! - daily challenges, streaks and their badges
//! - persistence through a store
//! - quest runs feeding progress
//! - determinism

use chrono::{DateTime, Duration, TimeZone, Utc};
use pyquest_eval::run_quest;
use pyquest_progress::catalog::{all_lessons, WORLDS};
use pyquest_progress::{
    apply, daily, lesson_success_events, Event, GameState, MemoryStore, ProgressConfig,
    ProgressStore, StateStore, STORAGE_KEY,
};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap()
}

fn pass_lesson(state: GameState, lesson_id: &str, at: DateTime<Utc>) -> GameState {
    lesson_success_events(&state, lesson_id, at)
        .iter()
        .fold(state, apply)
}

fn daily_on(state: GameState, at: DateTime<Utc>) -> GameState {
    apply(state, &Event::CompleteDailyChallenge { xp: 25, at })
}

// ══════════════════════════════════════════════════════════════════════════════
// Lessons
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn completing_lesson_twice_adds_xp_once() {
    let event = Event::CompleteLesson {
        lesson_id: "var-1".into(),
        world_id: "village-of-variables".into(),
        xp: 20,
        at: start(),
    };
    let once = apply(GameState::new(), &event);
    let twice = apply(once.clone(), &event);
    assert_eq!(once, twice);
    assert_eq!(twice.xp, 20);
    assert_eq!(twice.completed_lessons.len(), 1);
    assert_eq!(twice.last_played_at, Some(start()));
}

#[test]
fn finishing_a_world_unlocks_the_next() {
    let mut state = GameState::new();
    for lesson in WORLDS[0].lessons {
        state = pass_lesson(state, lesson.id, start());
    }
    assert_eq!(state.xp, 65);
    assert_eq!(state.current_world, 2);
    assert!(state.is_world_unlocked(2));
    assert!(state.has_badge("variable-starter"));
    assert!(state.has_badge("village-master"));
    assert!(!state.has_badge("python-hero"));
}

#[test]
fn skipping_ahead_to_last_lesson_unlocks_without_completion_badge() {
    let state = pass_lesson(GameState::new(), "var-3", start());
    assert_eq!(state.current_world, 2);
    assert!(!state.has_badge("village-master"));
}

#[test]
fn full_adventure_earns_every_lesson_badge() {
    let mut state = GameState::new();
    for (i, lesson) in all_lessons().enumerate() {
        state = pass_lesson(state, lesson.id, start() + Duration::minutes(i as i64));
    }
    assert_eq!(state.completed_lessons.len(), 15);
    assert_eq!(state.xp, 515);
    assert_eq!(state.level_name(), "Code Adventurer");
    assert_eq!(state.current_world, 5);
    for world in &WORLDS {
        assert!(state.has_badge(world.first_lesson_badge), "{}", world.slug);
        assert!(state.has_badge(world.completion_badge), "{}", world.slug);
    }
    assert!(state.has_badge("python-hero"));
    assert_eq!(state.earned_badges().count(), 11);
}

#[test]
fn badge_keeps_first_earned_time() {
    let first = start();
    let later = start() + Duration::days(3);
    let state = apply(
        GameState::new(),
        &Event::EarnBadge {
            badge_id: "bug-hunter".into(),
            at: first,
        },
    );
    let state = apply(
        state,
        &Event::EarnBadge {
            badge_id: "bug-hunter".into(),
            at: later,
        },
    );
    assert_eq!(state.badge("bug-hunter").unwrap().earned_at, Some(first));
}

// ══════════════════════════════════════════════════════════════════════════════
// Daily challenges
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn daily_challenge_once_per_day() {
    let state = daily_on(GameState::new(), start());
    let again = daily_on(state.clone(), start() + Duration::hours(2));
    assert_eq!(state, again);
    assert_eq!(again.streak, 1);
    assert_eq!(again.daily_challenge_index, 1);
    assert!(again.daily_status(start().date_naive()).is_completed);
}

#[test]
fn day_boundary_is_utc() {
    // 20:00 and 23:59 the same UTC day, then 00:01 the next.
    let state = daily_on(GameState::new(), start());
    let state = daily_on(state, start() + Duration::minutes(239));
    assert_eq!(state.total_daily_challenges, 1);
    let state = daily_on(state, start() + Duration::minutes(241));
    assert_eq!(state.total_daily_challenges, 2);
    assert_eq!(state.streak, 2);
}

#[test]
fn thirty_day_streak_earns_all_streak_and_daily_badges() {
    let mut state = GameState::new();
    for d in 0..30 {
        state = daily_on(state, start() + Duration::days(d));
    }
    assert_eq!(state.streak, 30);
    assert_eq!(state.total_daily_challenges, 30);
    assert_eq!(state.xp, 750);
    assert_eq!(state.level_name(), "Syntax Sorcerer");
    for id in [
        "streak-3", "streak-7", "streak-14", "streak-30", "daily-5", "daily-15", "daily-30",
    ] {
        assert!(state.has_badge(id), "{id}");
    }
    assert_eq!(daily::challenge_for(state.daily_challenge_index).id, 11);
}

#[test]
fn streak_badge_survives_broken_streak() {
    let mut state = GameState::new();
    for d in 0..3 {
        state = daily_on(state, start() + Duration::days(d));
    }
    let state = daily_on(state, start() + Duration::days(10));
    assert_eq!(state.streak, 1);
    assert!(state.has_badge("streak-3"));
    assert!(!state.has_badge("daily-5"));
}

#[test]
fn streak_bonus_uses_config() {
    let config: ProgressConfig =
        serde_json::from_str(r#"{"streakBonusPerDay": 10, "streakBonusCap": 30}"#).unwrap();
    assert_eq!(daily::streak_bonus(2, &config), 20);
    assert_eq!(daily::streak_bonus(7, &config), 30);
}

// ══════════════════════════════════════════════════════════════════════════════
// Persistence
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn store_saves_and_reloads() {
    let mut store = ProgressStore::open(MemoryStore::new(), ProgressConfig::default()).unwrap();
    store
        .dispatch(&Event::SetPlayerName {
            name: "Rowan".into(),
        })
        .unwrap();
    let events = lesson_success_events(store.state(), "var-1", start());
    assert_eq!(store.dispatch_all(&events).unwrap(), 2);

    let backend = store.into_backend();
    let raw = backend.load(STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("\"playerName\":\"Rowan\""));

    let reopened = ProgressStore::open(backend, ProgressConfig::default()).unwrap();
    assert_eq!(reopened.state().player_name, "Rowan");
    assert!(reopened.state().is_lesson_completed("var-1"));
    assert!(reopened.state().has_badge("variable-starter"));
}

#[test]
fn store_uses_configured_key() {
    let config = ProgressConfig {
        storage_key: "slot-2".into(),
        ..ProgressConfig::default()
    };
    let mut store = ProgressStore::open(MemoryStore::new(), config).unwrap();
    store.dispatch(&Event::CompleteTutorial).unwrap();
    let backend = store.into_backend();
    assert!(backend.get("slot-2").is_some());
    assert!(backend.get(STORAGE_KEY).is_none());
}

#[test]
fn reset_starts_over() {
    let mut store = ProgressStore::open(MemoryStore::new(), ProgressConfig::default()).unwrap();
    store.dispatch(&Event::AddXp { amount: 500 }).unwrap();
    store.reset().unwrap();
    assert_eq!(store.state(), &GameState::default());
}

// ══════════════════════════════════════════════════════════════════════════════
// Quest runs feeding progress
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn solved_daily_challenge_awards_reward_with_streak_bonus() {
    let config = ProgressConfig::default();
    let mut store = ProgressStore::open(MemoryStore::new(), config.clone()).unwrap();

    let challenge = daily::challenge_for(store.state().daily_challenge_index);
    let solution = challenge.starter_code.replace("___", "42");
    let report = run_quest(&solution, "42");
    assert!(report.verdict.is_success());

    let xp = daily::total_reward(challenge, store.state().streak, &config);
    store
        .dispatch(&Event::CompleteDailyChallenge { xp, at: start() })
        .unwrap();
    assert_eq!(store.state().xp, 25);

    let next = daily::challenge_for(store.state().daily_challenge_index);
    assert_eq!(next.title, "Greeting Spell");
    let xp = daily::total_reward(next, store.state().streak, &config);
    assert_eq!(xp, 30);
}

#[test]
fn unsolved_starter_code_does_not_pass() {
    let challenge = daily::challenge_for(0);
    let report = run_quest(challenge.starter_code, "42");
    assert!(!report.verdict.is_success());
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn reducer_determinism_100_iterations() {
    let events: Vec<Event> = (0..5)
        .map(|d| Event::CompleteDailyChallenge {
            xp: 25,
            at: start() + Duration::days(d),
        })
        .chain(lesson_success_events(&GameState::new(), "var-1", start()))
        .collect();
    let first = events.iter().fold(GameState::new(), apply);
    for i in 0..100 {
        let again = events.iter().fold(GameState::new(), apply);
        assert_eq!(first, again, "Determinism failure at iteration {i}");
    }
}
