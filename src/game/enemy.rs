//! Falling enemies
//!
//! A pooled sprite that spawns just above the top edge, falls at a fixed
//! speed while spinning, and is recycled when it leaves the screen or gets
//! shot. A shot enemy lingers in a `Dying` phase for a short flash window
//! before its slot returns to the pool.

use macroquad::math::Vec2;

use super::tween::FlashTween;

/// Lifecycle phase of a live (acquired) enemy slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyPhase {
    /// Falling and collidable
    Falling,
    /// Hit by a laser; flashing, not collidable, released at the deadline
    Dying { release_at_ms: f64 },
}

#[derive(Debug, Clone)]
pub struct FallingObject {
    /// Sprite center in world units
    pub pos: Vec2,
    /// Current rotation in radians
    pub rotation: f32,
    /// Fall speed in units per second
    pub speed: f32,
    /// Radians added per update tick
    pub rotation_step: f32,
    /// Sprite size (square) in world units
    pub size: f32,
    pub phase: EnemyPhase,
    /// Hit-flash tween, reset whenever the slot is recycled
    pub flash: FlashTween,
}

impl FallingObject {
    pub fn new(size: f32, flash_leg_ms: f64) -> Self {
        Self {
            pos: Vec2::ZERO,
            rotation: 0.0,
            speed: 0.0,
            rotation_step: 0.0,
            size,
            phase: EnemyPhase::Falling,
            flash: FlashTween::new(flash_leg_ms),
        }
    }

    /// Reset the slot for a fresh drop at horizontal position `x`.
    pub fn spawn(&mut self, x: f32, speed: f32, rotation_step: f32) {
        self.pos = Vec2::new(x, -self.size);
        self.rotation = 0.0;
        self.speed = speed;
        self.rotation_step = rotation_step;
        self.phase = EnemyPhase::Falling;
        self.flash.stop();
    }

    /// Mark the enemy as shot: stop colliding, start the flash, and
    /// schedule the slot release.
    pub fn hit(&mut self, now_ms: f64, removal_delay_ms: f64) {
        self.phase = EnemyPhase::Dying {
            release_at_ms: now_ms + removal_delay_ms,
        };
        self.flash.start(now_ms);
    }

    pub fn is_collidable(&self) -> bool {
        self.phase == EnemyPhase::Falling
    }

    /// Advance one tick. Returns `true` when the slot should go back to
    /// the pool (fell past the bottom edge, or the dying deadline passed).
    pub fn update(&mut self, dt: f32, now_ms: f64, view_h: f32) -> bool {
        match self.phase {
            EnemyPhase::Falling => {
                self.pos.y += self.speed * dt;
                self.rotation += self.rotation_step;
                self.pos.y > view_h + self.size
            }
            EnemyPhase::Dying { release_at_ms } => now_ms >= release_at_ms,
        }
    }
}
