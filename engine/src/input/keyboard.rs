//! Keyboard Input Module
//!
//! Generic key codes, independent of any windowing system. Hosts translate
//! their native key events into these before handing them to
//! [`PlayerInput`](super::PlayerInput).

use serde::{Deserialize, Serialize};

/// Key codes the platformer controls can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Letter keys
    W,
    A,
    S,
    D,
    C,

    Space,
    ShiftLeft,
    ControlLeft,
    ControlRight,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Escape,
    Enter,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Parse a key name as written in input scripts ("A", "Space", "ArrowLeft").
    pub fn from_name(name: &str) -> KeyCode {
        match name {
            "W" | "w" => KeyCode::W,
            "A" | "a" => KeyCode::A,
            "S" | "s" => KeyCode::S,
            "D" | "d" => KeyCode::D,
            "C" | "c" => KeyCode::C,
            "Space" | "space" => KeyCode::Space,
            "ShiftLeft" => KeyCode::ShiftLeft,
            "ControlLeft" => KeyCode::ControlLeft,
            "ControlRight" => KeyCode::ControlRight,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            "Escape" => KeyCode::Escape,
            "Enter" => KeyCode::Enter,
            _ => KeyCode::Unknown,
        }
    }
}
