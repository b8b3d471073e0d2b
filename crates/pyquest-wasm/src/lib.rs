//! PyQuest engine as a WASM module for browser environments.
//!
//! This crate exposes the evaluator, quest runner and progress reducer via
//! `wasm-bindgen`. Values cross the boundary as JSON strings; the page owns
//! the clock and storage and passes timestamps in.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { run_quest, apply_event, initial_state } from 'pyquest-wasm';
//!
//! await init();
//!
//! const report = JSON.parse(run_quest("magic = 42\nprint(magic)", "42"));
//! // { evaluation: { status: "output", text: "42" }, verdict: "passed", mood: "celebrating" }
//!
//! let state = initial_state();
//! state = apply_event(state, JSON.stringify({ type: "addXp", amount: 20 }));
//! ```
//!
//! Malformed input never throws: the result is `{"error": "..."}` instead.

use chrono::{DateTime, NaiveDate, Utc};
use pyquest_eval::{MascotMood, QuestReport};
use pyquest_progress::daily::{self, DailyChallenge, DailyStatus};
use pyquest_progress::{Event, GameState, ProgressConfig};
use pyquest_types::FailureKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| error_json(format!("Serialization error: {e}")))
}

fn error_json(message: impl Display) -> String {
    serde_json::json!({ "error": message.to_string() }).to_string()
}

fn from_json<T: DeserializeOwned>(what: &str, raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|e| error_json(format!("invalid {what}: {e}")))
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| error_json(format!("invalid timestamp '{raw}': {e}")))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    raw.trim()
        .parse()
        .map_err(|e| error_json(format!("invalid date '{raw}': {e}")))
}

/// Both arms are already JSON.
fn respond(result: Result<String, String>) -> String {
    result.unwrap_or_else(|err| err)
}

// ══════════════════════════════════════════════════════════════════════════════
// Evaluation
// ══════════════════════════════════════════════════════════════════════════════

/// Evaluate a learner program.
///
/// Returns a JSON string containing an `Evaluation`:
/// ```json
/// { "status": "output", "text": "42" }
/// { "status": "failure", "kind": "runtime", "message": "Variable 'y' is not defined", "line": 1 }
/// ```
#[wasm_bindgen]
pub fn evaluate(source: &str) -> String {
    to_json(&pyquest_eval::evaluate(source))
}

/// Evaluate a learner program, returning the `Evaluation` as a JS object.
#[wasm_bindgen]
pub fn evaluate_value(source: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&pyquest_eval::evaluate(source)).map_err(JsValue::from)
}

/// Whether `output` satisfies a non-empty `expected` output.
#[wasm_bindgen]
pub fn check_output(output: &str, expected: &str) -> bool {
    pyquest_eval::check_output(output, expected)
}

#[derive(Serialize)]
struct QuestResponse {
    #[serde(flatten)]
    report: QuestReport,
    mood: MascotMood,
}

/// Run a quest attempt: evaluate, judge against `expected`, pick a mood.
///
/// An empty `expected` reports `"verdict": "ran"`; success is then up to the
/// page's own submit action.
#[wasm_bindgen]
pub fn run_quest(source: &str, expected: &str) -> String {
    let report = pyquest_eval::run_quest(source, expected);
    let mood = pyquest_eval::mood_for(&report.verdict);
    to_json(&QuestResponse { report, mood })
}

/// Classify a failure the evaluator didn't report itself, such as a host
/// exception message.
#[wasm_bindgen]
pub fn classify_error(source: &str, message: &str) -> String {
    to_json(&pyquest_eval::classify_failure(source, message))
}

/// A mascot hint for a failure kind (`syntax`, `runtime`, `logic`, `unknown`).
///
/// `pick` selects among the hints and wraps around.
#[wasm_bindgen]
pub fn feedback_hint(kind: &str, pick: u32) -> String {
    match kind.parse::<FailureKind>() {
        Ok(kind) => serde_json::json!({
            "kind": kind,
            "hint": pyquest_eval::hint(kind, pick as usize),
        })
        .to_string(),
        Err(err) => error_json(err),
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Progress
// ══════════════════════════════════════════════════════════════════════════════

/// A fresh game state as JSON.
#[wasm_bindgen]
pub fn initial_state() -> String {
    to_json(&GameState::default())
}

/// Apply one event (JSON, `type`-tagged) to a state (JSON); returns the new
/// state.
#[wasm_bindgen]
pub fn apply_event(state_json: &str, event_json: &str) -> String {
    respond(try_apply_event(state_json, event_json))
}

fn try_apply_event(state_json: &str, event_json: &str) -> Result<String, String> {
    let state: GameState = from_json("game state", state_json)?;
    let event: Event = from_json("event", event_json)?;
    Ok(to_json(&pyquest_progress::apply(state, &event)))
}

/// Events earned by passing `lesson_id` at the RFC 3339 instant `at`.
#[wasm_bindgen]
pub fn lesson_success_events(state_json: &str, lesson_id: &str, at: &str) -> String {
    respond(try_lesson_success_events(state_json, lesson_id, at))
}

fn try_lesson_success_events(state_json: &str, lesson_id: &str, at: &str) -> Result<String, String> {
    let state: GameState = from_json("game state", state_json)?;
    let at = parse_instant(at)?;
    Ok(to_json(&pyquest_progress::lesson_success_events(
        &state, lesson_id, at,
    )))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DailyResponse {
    challenge: &'static DailyChallenge,
    #[serde(flatten)]
    status: DailyStatus,
    streak_bonus: u32,
    total_xp: u32,
}

/// Today's daily challenge for a state, with completion status and reward.
///
/// `today` is the page's `YYYY-MM-DD` date. `config_json` may be empty for
/// the default streak bonus.
#[wasm_bindgen]
pub fn daily_challenge(state_json: &str, today: &str, config_json: &str) -> String {
    respond(try_daily_challenge(state_json, today, config_json))
}

fn try_daily_challenge(state_json: &str, today: &str, config_json: &str) -> Result<String, String> {
    let state: GameState = from_json("game state", state_json)?;
    let today = parse_date(today)?;
    let config: ProgressConfig = if config_json.trim().is_empty() {
        ProgressConfig::default()
    } else {
        from_json("config", config_json)?
    };
    let challenge = daily::challenge_for(state.daily_challenge_index);
    Ok(to_json(&DailyResponse {
        challenge,
        status: state.daily_status(today),
        streak_bonus: daily::streak_bonus(state.streak, &config),
        total_xp: daily::total_reward(challenge, state.streak, &config),
    }))
}

/// Return the engine version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
