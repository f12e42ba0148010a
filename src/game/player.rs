//! The player ship
//!
//! Plain data: position, velocity, mirror flag and animation playback.
//! The movement/fire handler in the scene decides what the velocity and
//! animation are each frame; the ship only integrates and stays inside the
//! world bounds.

use macroquad::math::Vec2;

use super::anim::{AnimationPlayer, ShipAnim};

/// Ship sprite frame size (66x66 spritesheet cells).
pub const SHIP_FRAME: f32 = 66.0;

#[derive(Debug, Clone)]
pub struct PlayerShip {
    /// Sprite center in world units
    pub pos: Vec2,
    /// Units per second, assigned by the movement handler
    pub vel: Vec2,
    /// Mirror the sprite horizontally (banking right)
    pub flip_x: bool,
    pub anim: AnimationPlayer,
}

impl PlayerShip {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            flip_x: false,
            anim: AnimationPlayer::new(),
        }
    }

    /// Integrate velocity and clamp the sprite inside the viewport.
    pub fn update(&mut self, dt: f32, view_w: f32, view_h: f32) {
        self.pos += self.vel * dt;

        let half = SHIP_FRAME * 0.5;
        self.pos.x = self.pos.x.clamp(half, view_w - half);
        self.pos.y = self.pos.y.clamp(half, view_h - half);

        self.anim.tick(dt);
    }

    /// Convenience for the movement handler: set velocity, clip and mirror
    /// in one step.
    pub fn steer(&mut self, vel: Vec2, anim: ShipAnim, flip_x: bool) {
        self.vel = vel;
        self.flip_x = flip_x;
        self.anim.play(anim);
    }
}
