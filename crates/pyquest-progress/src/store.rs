//! Persistence adapter for [`GameState`].

use crate::config::ProgressConfig;
use crate::event::{apply, Event};
use crate::state::GameState;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("game state serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage backend failed: {0}")]
    Storage(String),
}

/// Raw string storage keyed by name, such as browser local storage.
pub trait StateStore {
    fn load(&self, key: &str) -> Result<Option<String>, ProgressError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), ProgressError>;
}

/// In-memory [`StateStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ProgressError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ProgressError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Game state backed by a [`StateStore`], saved after every change.
#[derive(Debug)]
pub struct ProgressStore<S> {
    backend: S,
    config: ProgressConfig,
    state: GameState,
}

impl<S: StateStore> ProgressStore<S> {
    /// Load the saved state, or start fresh if there is none.
    ///
    /// Stored JSON that no longer parses is logged and replaced by the
    /// initial state on the next save.
    pub fn open(backend: S, config: ProgressConfig) -> Result<Self, ProgressError> {
        let state = match backend.load(&config.storage_key)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(key = %config.storage_key, error = %err, "discarding unreadable game state");
                GameState::default()
            }),
            None => GameState::default(),
        };
        Ok(Self {
            backend,
            config,
            state,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply `event` and persist the result if anything changed.
    ///
    /// Returns whether the state changed.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool, ProgressError> {
        let next = apply(self.state.clone(), event);
        if next == self.state {
            return Ok(false);
        }
        let raw = serde_json::to_string(&next)?;
        self.backend.save(&self.config.storage_key, &raw)?;
        self.state = next;
        Ok(true)
    }

    /// Dispatch each event in order, stopping at the first storage error.
    pub fn dispatch_all<'e>(
        &mut self,
        events: impl IntoIterator<Item = &'e Event>,
    ) -> Result<usize, ProgressError> {
        let mut changed = 0;
        for event in events {
            if self.dispatch(event)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Start over from the initial state.
    pub fn reset(&mut self) -> Result<(), ProgressError> {
        let raw = serde_json::to_string(&GameState::default())?;
        self.backend.save(&self.config.storage_key, &raw)?;
        self.state = GameState::default();
        Ok(())
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}
