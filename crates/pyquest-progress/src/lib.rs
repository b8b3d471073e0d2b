//! PyQuest progress tracking.
//!
//! Progress transitions are a pure reduction: [`apply`] takes the current
//! [`GameState`] and an [`Event`] and returns the next state. Timestamps and
//! calendar dates travel inside events, so the reducer never reads a clock.
//! Persistence is a separate adapter ([`ProgressStore`] over a
//! [`StateStore`]) that the host drives.

pub mod badge;
pub mod catalog;
mod config;
pub mod daily;
mod event;
pub mod level;
mod policy;
mod state;
mod store;

pub use config::{ProgressConfig, STORAGE_KEY};
pub use event::{apply, Event};
pub use policy::lesson_success_events;
pub use state::{GameState, LessonProgress};
pub use store::{MemoryStore, ProgressError, ProgressStore, StateStore};
