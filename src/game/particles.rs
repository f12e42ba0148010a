//! Smoke trail particles
//!
//! The exhaust puff that follows the player ship. A fixed-size pool: the
//! emitter spawns a few particles per second at the follow point, each one
//! drifts slowly, shrinks from its spawn scale towards nothing and dies.

use macroquad::math::Vec2;

use super::rng::GameRng;

/// Maximum live smoke particles.
pub const MAX_SMOKE: usize = 64;

/// A single puff in the pool.
#[derive(Debug, Clone, Copy)]
pub struct SmokeParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in seconds
    pub life: f32,
    /// Total lifetime (for scale interpolation)
    pub max_life: f32,
    pub alive: bool,
}

impl Default for SmokeParticle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 0.0,
            max_life: 1.0,
            alive: false,
        }
    }
}

impl SmokeParticle {
    /// Sprite scale for the current age: starts at `SCALE_START`, ends
    /// near nothing.
    pub fn scale(&self) -> f32 {
        let t = 1.0 - (self.life / self.max_life).clamp(0.0, 1.0);
        SmokeTrail::SCALE_START + (SmokeTrail::SCALE_END - SmokeTrail::SCALE_START) * t
    }
}

/// Emitter plus pool, following a target point with a fixed offset.
pub struct SmokeTrail {
    particles: [SmokeParticle; MAX_SMOKE],
    /// Offset from the followed sprite to the exhaust
    offset: Vec2,
    /// Particles per second
    spawn_rate: f32,
    /// Fractional-particle accumulator
    accumulator: f32,
    rng: GameRng,
}

impl SmokeTrail {
    pub const SCALE_START: f32 = 0.12;
    pub const SCALE_END: f32 = 0.01;
    /// Draw alpha for every puff.
    pub const ALPHA: f32 = 0.5;

    const DRIFT_SPEED: f32 = 1.0;
    const LIFE_SECS: f32 = 0.8;

    pub fn new(offset: Vec2, spawn_rate: f32, seed: u32) -> Self {
        Self {
            particles: [SmokeParticle::default(); MAX_SMOKE],
            offset,
            spawn_rate,
            accumulator: 0.0,
            rng: GameRng::new(seed),
        }
    }

    /// Advance all puffs and emit new ones at the follow point.
    pub fn update(&mut self, dt: f32, follow: Vec2) {
        for p in &mut self.particles {
            if !p.alive {
                continue;
            }
            p.life -= dt;
            if p.life <= 0.0 {
                p.alive = false;
                continue;
            }
            p.pos += p.vel * dt;
        }

        self.accumulator += self.spawn_rate * dt;
        while self.accumulator >= 1.0 {
            self.accumulator -= 1.0;
            self.spawn_one(follow + self.offset);
        }
    }

    fn spawn_one(&mut self, origin: Vec2) {
        if let Some(idx) = self.particles.iter().position(|p| !p.alive) {
            let angle = self.rng.range(0.0, std::f32::consts::TAU);
            self.particles[idx] = SmokeParticle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * Self::DRIFT_SPEED,
                life: Self::LIFE_SECS,
                max_life: Self::LIFE_SECS,
                alive: true,
            };
        }
    }

    /// Iterate over live puffs (for drawing).
    pub fn iter(&self) -> impl Iterator<Item = &SmokeParticle> {
        self.particles.iter().filter(|p| p.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.particles.iter().filter(|p| p.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_at_follow_point_plus_offset() {
        let mut trail = SmokeTrail::new(Vec2::new(0.0, 30.0), 60.0, 1);
        trail.update(1.0 / 60.0, Vec2::new(200.0, 450.0));
        assert_eq!(trail.alive_count(), 1);
        let p = trail.iter().next().unwrap();
        assert_eq!(p.pos, Vec2::new(200.0, 480.0));
    }

    #[test]
    fn test_particles_expire() {
        let mut trail = SmokeTrail::new(Vec2::ZERO, 60.0, 1);
        trail.update(1.0 / 60.0, Vec2::ZERO);
        assert!(trail.alive_count() > 0);

        // Run well past one particle lifetime; the pool reaches a steady
        // state of spawns and expiries and never overflows its capacity
        for _ in 0..120 {
            trail.update(1.0 / 60.0, Vec2::ZERO);
        }
        assert!(trail.alive_count() <= MAX_SMOKE);
    }

    #[test]
    fn test_scale_shrinks_with_age() {
        let mut p = SmokeParticle {
            life: 0.8,
            max_life: 0.8,
            alive: true,
            ..Default::default()
        };
        let fresh = p.scale();
        p.life = 0.1;
        let old = p.scale();
        assert!(fresh > old);
        assert!((fresh - SmokeTrail::SCALE_START).abs() < 1e-6);
    }
}
