//! Touch controls
//!
//! Screen-space rects and the three on-screen buttons (left, right, shoot).

pub mod buttons;
pub mod rect;

pub use buttons::{ButtonsHeld, TouchButtons};
pub use rect::Rect;
