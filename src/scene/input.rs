//! Per-frame input snapshot
//!
//! One immutable record of "what is the player holding right now", rebuilt
//! at the start of every frame from the cursor keys and the on-screen
//! buttons. Scene logic only ever sees this snapshot, never live engine
//! state, so the movement rules are testable with hand-built values.

use macroquad::input::{is_key_down, KeyCode};

use crate::ui::{ButtonsHeld, TouchButtons};

/// Cursor-key state for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub space: bool,
}

impl CursorKeys {
    /// Poll the keyboard.
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            space: is_key_down(KeyCode::Space),
        }
    }
}

/// The combined input state the scene update consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
}

impl InputSnapshot {
    /// Combine keyboard and touch-button state. Up/down exist only on the
    /// keyboard; the buttons cover left, right and shoot.
    pub fn combine(keys: CursorKeys, held: ButtonsHeld) -> Self {
        Self {
            left: keys.left || held.left,
            right: keys.right || held.right,
            up: keys.up,
            down: keys.down,
            shoot: keys.space || held.shoot,
        }
    }

    /// Sample the engine for this frame's snapshot.
    pub fn gather(buttons: &TouchButtons) -> Self {
        Self::combine(CursorKeys::poll(), buttons.poll())
    }
}
