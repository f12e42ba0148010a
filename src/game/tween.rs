//! Hit-flash alpha tween
//!
//! A yoyo tween that fades a sprite out and back, cubic ease-out, repeating
//! for as long as it is active. Used for the enemy hit flash during the
//! short window between being hit and being returned to the pool. The tween
//! lives in the enemy slot and is stopped when the slot is released, so it
//! can never outlive its sprite.

/// Repeating yoyo alpha fade (1 → 0 → 1 ...), cubic ease-out per leg.
#[derive(Debug, Clone, Copy)]
pub struct FlashTween {
    /// Duration of one leg of the yoyo in milliseconds
    leg_ms: f64,
    started_at_ms: f64,
    active: bool,
}

impl FlashTween {
    pub fn new(leg_ms: f64) -> Self {
        Self {
            leg_ms,
            started_at_ms: 0.0,
            active: false,
        }
    }

    /// Start (or restart) the tween at the given timestamp.
    pub fn start(&mut self, now_ms: f64) {
        self.started_at_ms = now_ms;
        self.active = true;
    }

    /// Stop the tween; `alpha` returns 1.0 again.
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current alpha in [0, 1]. Full opacity when inactive.
    pub fn alpha(&self, now_ms: f64) -> f32 {
        if !self.active || self.leg_ms <= 0.0 {
            return 1.0;
        }
        let t = (now_ms - self.started_at_ms).max(0.0) / self.leg_ms;
        // Yoyo: 0..1 fades out, 1..2 fades back in
        let cycle = t % 2.0;
        let progress = if cycle < 1.0 { cycle } else { 2.0 - cycle };
        1.0 - ease_out_cubic(progress as f32)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
