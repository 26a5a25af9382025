//! Scripted Input
//!
//! A timeline of key presses and releases replayed into a
//! [`PlayerInput`], for headless runs and reproducible tests.
//!
//! Script files are JSON:
//!
//! ```json
//! { "events": [
//!     { "time": 0.0, "key": "D", "pressed": true },
//!     { "time": 0.5, "key": "Space", "pressed": true },
//!     { "time": 0.6, "key": "Space", "pressed": false }
//! ] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::{KeyCode, PlayerInput};

/// A single key transition at a point in session time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    /// Session time in seconds
    pub time: f32,
    pub key: KeyCode,
    pub pressed: bool,
}

impl ScriptEvent {
    pub fn press(time: f32, key: KeyCode) -> Self {
        Self {
            time,
            key,
            pressed: true,
        }
    }

    pub fn release(time: f32, key: KeyCode) -> Self {
        Self {
            time,
            key,
            pressed: false,
        }
    }
}

/// Key events ordered by time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputScript {
    pub events: Vec<ScriptEvent>,
}

impl InputScript {
    /// Build a script; events are sorted by time, ties keep their order.
    pub fn new(mut events: Vec<ScriptEvent>) -> Self {
        events.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { events }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script: InputScript = serde_json::from_str(&text)?;
        if let Some(bad) = script.events.iter().find(|e| !e.time.is_finite() || e.time < 0.0) {
            return Err(ConfigError::invalid(
                "script.events",
                format!("event time {} must be finite and non-negative", bad.time),
            ));
        }
        Ok(Self::new(script.events))
    }

    /// Time of the last event, or zero for an empty script.
    pub fn duration(&self) -> f32 {
        self.events.last().map_or(0.0, |e| e.time)
    }

    /// Demo run through the default level: walk right crouched under the
    /// tunnel roof, run on to the tall wall, jump, slide down it and
    /// wall-jump off.
    pub fn demo() -> Self {
        use KeyCode::{D, S, Space};
        Self::new(vec![
            ScriptEvent::press(0.5, D),
            ScriptEvent::press(0.7, S),
            ScriptEvent::release(3.0, S),
            ScriptEvent::press(4.5, Space),
            ScriptEvent::release(5.0, Space),
            // Falling against the wall by now
            ScriptEvent::press(6.2, Space),
            ScriptEvent::release(6.5, Space),
            ScriptEvent::release(7.0, D),
        ])
    }
}

/// Plays an [`InputScript`] against elapsed session time.
#[derive(Debug, Clone)]
pub struct ScriptPlayer {
    script: InputScript,
    cursor: usize,
    elapsed: f32,
}

impl ScriptPlayer {
    pub fn new(script: InputScript) -> Self {
        Self {
            script,
            cursor: 0,
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.script.events.len()
    }

    /// Advance session time and feed every event now due into `input`.
    ///
    /// Returns the number of events applied.
    pub fn advance(&mut self, delta_time: f32, input: &mut PlayerInput) -> usize {
        self.elapsed += delta_time.max(0.0);

        let start = self.cursor;
        while let Some(event) = self.script.events.get(self.cursor) {
            if event.time > self.elapsed {
                break;
            }
            input.handle_key(event.key, event.pressed);
            tracing::trace!(
                time = event.time,
                key = ?event.key,
                pressed = event.pressed,
                "script event"
            );
            self.cursor += 1;
        }
        self.cursor - start
    }
}
