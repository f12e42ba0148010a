//! On-screen touch buttons
//!
//! Three rectangular targets along the bottom edge: steer left, steer right,
//! shoot. Instead of flags flipped from pointer callbacks, the buttons are
//! sampled once per frame: a button counts as held while any active pointer
//! (touch or held mouse press) is inside its rect, which gives the same
//! behavior as pointerdown/pointerout pairs. Up to three simultaneous
//! pointers are considered.

use macroquad::input::{is_mouse_button_down, mouse_position, touches, MouseButton, TouchPhase};

use super::rect::Rect;

/// Maximum simultaneous pointers sampled per frame.
pub const MAX_POINTERS: usize = 3;

/// Which buttons are held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonsHeld {
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

/// The three button rects.
#[derive(Debug, Clone, Copy)]
pub struct TouchButtons {
    pub left: Rect,
    pub right: Rect,
    pub shoot: Rect,
}

impl TouchButtons {
    /// Bottom-edge layout: left at x=50, right just past it, shoot at x=320,
    /// all centered on the button row.
    pub fn layout(row_y: f32, size: f32) -> Self {
        let left = Rect::centered(50.0, row_y, size, size);
        let right = Rect::new(left.right() + 20.0, left.y, size, size);
        let shoot = Rect::centered(320.0, row_y, size, size);
        Self { left, right, shoot }
    }

    /// Test a set of pointer positions against the three rects.
    pub fn hit_test(&self, pointers: &[(f32, f32)]) -> ButtonsHeld {
        let mut held = ButtonsHeld::default();
        for &(x, y) in pointers.iter().take(MAX_POINTERS) {
            held.left |= self.left.contains(x, y);
            held.right |= self.right.contains(x, y);
            held.shoot |= self.shoot.contains(x, y);
        }
        held
    }

    /// Sample the engine's pointer state for this frame.
    pub fn poll(&self) -> ButtonsHeld {
        let mut pointers: Vec<(f32, f32)> = touches()
            .into_iter()
            .filter(|t| !matches!(t.phase, TouchPhase::Ended | TouchPhase::Cancelled))
            .map(|t| (t.position.x, t.position.y))
            .collect();

        // Mouse acts as one more pointer, for desktop testing
        if is_mouse_button_down(MouseButton::Left) {
            pointers.push(mouse_position());
        }

        self.hit_test(&pointers)
    }
}
