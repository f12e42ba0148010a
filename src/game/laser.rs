//! Player lasers
//!
//! A pooled projectile: fired from the ship's position, travels straight up,
//! erased when it leaves the top of the screen or hits an enemy.

use macroquad::math::Vec2;

/// Laser spritesheet frame size.
pub const LASER_FRAME_W: f32 = 16.0;
pub const LASER_FRAME_H: f32 = 32.0;

#[derive(Debug, Clone)]
pub struct Laser {
    /// Sprite center in world units
    pub pos: Vec2,
    /// Upward speed in units per second
    pub speed: f32,
}

impl Laser {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            speed: 0.0,
        }
    }

    /// Reset the slot at the firing position and start it moving.
    pub fn fire(&mut self, pos: Vec2, speed: f32) {
        self.pos = pos;
        self.speed = speed;
    }

    /// Advance one tick. Returns `true` once the laser is fully above the
    /// top edge and should be erased.
    pub fn update(&mut self, dt: f32) -> bool {
        self.pos.y -= self.speed * dt;
        self.pos.y < -LASER_FRAME_H
    }
}

impl Default for Laser {
    fn default() -> Self {
        Self::new()
    }
}
