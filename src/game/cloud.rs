//! Cloud decoration layer
//!
//! A fixed set of clouds drifting down over the background. Clouds are never
//! destroyed: one that falls below the viewport is wrapped back to a random
//! position just above the top edge.

use macroquad::math::Vec2;

use super::rng::GameRng;

/// Horizontal range clouds are wrapped back into.
pub const WRAP_X_MIN: f32 = 10.0;
pub const WRAP_X_MAX: f32 = 400.0;

/// Nominal cloud sprite height, used to park wrapped clouds off-screen.
pub const CLOUD_H: f32 = 48.0;

#[derive(Debug, Clone, Copy)]
pub struct Cloud {
    pub pos: Vec2,
}

/// The whole decoration layer.
#[derive(Debug, Clone)]
pub struct CloudLayer {
    pub clouds: Vec<Cloud>,
    /// Downward drift in units per second
    speed: f32,
}

impl CloudLayer {
    /// Scatter `count` clouds uniformly over the world bounds.
    pub fn new(count: usize, speed: f32, view_w: f32, view_h: f32, rng: &mut GameRng) -> Self {
        let clouds = (0..count)
            .map(|_| Cloud {
                pos: Vec2::new(rng.range(0.0, view_w), rng.range(0.0, view_h)),
            })
            .collect();
        Self { clouds, speed }
    }

    /// Drift all clouds down; wrap any that left the bottom of the screen.
    pub fn update(&mut self, dt: f32, view_h: f32, rng: &mut GameRng) {
        for cloud in &mut self.clouds {
            cloud.pos.y += self.speed * dt;
            if cloud.pos.y > view_h {
                cloud.pos.x = rng.range(WRAP_X_MIN, WRAP_X_MAX);
                cloud.pos.y = -CLOUD_H;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_inside_world_bounds() {
        let mut rng = GameRng::new(3);
        let layer = CloudLayer::new(21, 20.0, 400.0, 620.0, &mut rng);
        assert_eq!(layer.clouds.len(), 21);
        for cloud in &layer.clouds {
            assert!((0.0..400.0).contains(&cloud.pos.x));
            assert!((0.0..620.0).contains(&cloud.pos.y));
        }
    }

    #[test]
    fn test_constant_downward_drift() {
        let mut rng = GameRng::new(3);
        let mut layer = CloudLayer::new(1, 20.0, 400.0, 620.0, &mut rng);
        let before = layer.clouds[0].pos.y;
        layer.update(0.5, 620.0, &mut rng);
        assert_eq!(layer.clouds[0].pos.y, before + 10.0);
    }

    #[test]
    fn test_wraps_to_top_when_below_viewport() {
        let mut rng = GameRng::new(3);
        let mut layer = CloudLayer::new(1, 20.0, 400.0, 620.0, &mut rng);
        layer.clouds[0].pos = Vec2::new(123.0, 621.0);

        layer.update(0.016, 620.0, &mut rng);
        let cloud = layer.clouds[0];
        assert!(cloud.pos.y < 0.0);
        assert!((WRAP_X_MIN..WRAP_X_MAX).contains(&cloud.pos.x));
    }
}
