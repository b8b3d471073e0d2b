//! Native tests of the browser-facing JSON API.

use pyquest_wasm::*;
use serde_json::Value;

fn json(raw: &str) -> Value {
    serde_json::from_str(raw).expect("exports always return JSON")
}

const AT: &str = "2024-06-01T10:00:00Z";

// ══════════════════════════════════════════════════════════════════════════════
// Evaluation
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn evaluate_returns_tagged_result() {
    assert_eq!(
        json(&evaluate("x = 42\nprint(x)")),
        serde_json::json!({ "status": "output", "text": "42" })
    );
    let failure = json(&evaluate("1x = 5"));
    assert_eq!(failure["status"], "failure");
    assert_eq!(failure["kind"], "syntax");
    assert_eq!(failure["line"], 1);
}

#[test]
fn run_quest_includes_mood() {
    let report = json(&run_quest("magic = 42\nprint(magic)", "42"));
    assert_eq!(report["verdict"], "passed");
    assert_eq!(report["mood"], "celebrating");
    assert_eq!(report["evaluation"]["text"], "42");

    let report = json(&run_quest("print(ghost)", "boo"));
    assert_eq!(report["verdict"], "failed");
    assert_eq!(report["failure"]["kind"], "runtime");
    assert_eq!(report["mood"], "encouraging");

    let report = json(&run_quest("print(1)", ""));
    assert_eq!(report["verdict"], "ran");
}

#[test]
fn check_output_passes_through() {
    assert!(check_output("Hello, World!", "World"));
    assert!(!check_output("Hello", ""));
}

#[test]
fn classify_error_scans_source() {
    let failure = json(&classify_error("if x > 1\n    print(x)", "boom"));
    assert_eq!(failure["kind"], "syntax");
    assert_eq!(failure["line"], 1);
}

#[test]
fn feedback_hint_by_kind_name() {
    let hint = json(&feedback_hint("Logic", 4));
    assert_eq!(hint["kind"], "logic");
    assert!(hint["hint"].as_str().is_some_and(|h| !h.is_empty()));

    let err = json(&feedback_hint("cosmic", 0));
    assert_eq!(err["error"], "unknown failure kind 'cosmic'");
}

// ══════════════════════════════════════════════════════════════════════════════
// Progress
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn events_round_trip_through_json_state() {
    let state = initial_state();
    assert_eq!(json(&state)["currentWorld"], 1);

    let events = json(&lesson_success_events(&state, "var-1", AT));
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["type"], "completeLesson");

    let state = events
        .iter()
        .fold(state, |state, event| apply_event(&state, &event.to_string()));
    let state = json(&state);
    assert_eq!(state["xp"], 20);
    assert_eq!(state["completedLessons"][0]["lessonId"], "var-1");
}

#[test]
fn bad_input_reports_error_object() {
    let err = json(&apply_event("{}", r#"{"type":"teleport"}"#));
    assert!(err["error"].as_str().unwrap().starts_with("invalid event"));

    let err = json(&apply_event("not json", r#"{"type":"completeTutorial"}"#));
    assert!(err["error"].as_str().unwrap().starts_with("invalid game state"));

    let err = json(&lesson_success_events(&initial_state(), "var-1", "yesterday"));
    assert!(err["error"].as_str().unwrap().starts_with("invalid timestamp"));
}

#[test]
fn daily_challenge_reports_status_and_reward() {
    let state = initial_state();
    let daily = json(&daily_challenge(&state, "2024-06-01", ""));
    assert_eq!(daily["challenge"]["title"], "Magic Number");
    assert_eq!(daily["isCompleted"], false);
    assert_eq!(daily["streakBonus"], 0);
    assert_eq!(daily["totalXp"], 25);

    let state = apply_event(
        &state,
        &format!(r#"{{"type":"completeDailyChallenge","xp":25,"at":"{AT}"}}"#),
    );
    let daily = json(&daily_challenge(&state, "2024-06-01", r#"{"streakBonusPerDay":7}"#));
    assert_eq!(daily["isCompleted"], true);
    assert_eq!(daily["todayChallenge"], 1);
    assert_eq!(daily["challenge"]["title"], "Greeting Spell");
    assert_eq!(daily["streakBonus"], 7);
    assert_eq!(daily["totalXp"], 32);
}

#[test]
fn version_matches_package() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}
