//! The game scene
//!
//! Owns every game object and runs the per-frame update: cloud drift,
//! movement and firing, enemy/laser pool ticks, the spawn timer, overlap
//! detection and hit resolution. The scene never talks to the engine
//! directly; input arrives as a snapshot and sound requests leave as audio
//! cue events, so the whole update is testable headless.

pub mod input;

use macroquad::math::Vec2;
use macroquad::prelude::warn;

use crate::config::GameConfig;
use crate::game::anim::ShipAnim;
use crate::game::cloud::CloudLayer;
use crate::game::enemy::FallingObject;
use crate::game::laser::Laser;
use crate::game::overlap;
use crate::game::particles::SmokeTrail;
use crate::game::player::PlayerShip;
use crate::game::{AudioCue, Events, GameRng, LaserHitEvent, Pool};
use crate::ui::TouchButtons;

pub use input::InputSnapshot;

/// Exhaust offset below the ship sprite.
const SMOKE_OFFSET: Vec2 = Vec2::new(0.0, 30.0);

pub struct Scene {
    pub cfg: GameConfig,
    pub player: PlayerShip,
    pub clouds: CloudLayer,
    pub enemies: Pool<FallingObject>,
    pub lasers: Pool<Laser>,
    pub smoke: SmokeTrail,
    pub buttons: TouchButtons,
    pub events: Events,
    /// Timestamp the next shot becomes allowed
    last_fired_ms: f64,
    /// Accumulator for the repeating enemy spawn timer
    spawn_clock_ms: f64,
    rng: GameRng,
}

impl Scene {
    pub fn new(cfg: GameConfig, seed: u32) -> Self {
        let mut rng = GameRng::new(seed);
        let clouds = CloudLayer::new(cfg.cloud_count, cfg.cloud_speed, cfg.view_w, cfg.view_h, &mut rng);
        let enemy_size = cfg.enemy_size;
        let flash_leg = cfg.flash_leg_ms;

        Self {
            player: PlayerShip::new(cfg.player_start_x, cfg.player_start_y),
            clouds,
            enemies: Pool::new(cfg.enemy_pool_size, || {
                FallingObject::new(enemy_size, flash_leg)
            }),
            lasers: Pool::new(cfg.laser_pool_size, Laser::new),
            smoke: SmokeTrail::new(SMOKE_OFFSET, cfg.smoke_rate, seed.wrapping_add(1)),
            buttons: TouchButtons::layout(cfg.button_row_y, cfg.button_size),
            events: Events::new(),
            last_fired_ms: 0.0,
            spawn_clock_ms: 0.0,
            rng,
            cfg,
        }
    }

    /// Run one frame. `now_ms` is the absolute frame timestamp, `dt` the
    /// frame delta in seconds.
    pub fn update(&mut self, input: &InputSnapshot, now_ms: f64, dt: f32) {
        self.clouds.update(dt, self.cfg.view_h, &mut self.rng);

        self.handle_move_and_fire(input, now_ms);
        self.player.update(dt, self.cfg.view_w, self.cfg.view_h);

        // Pool ticks; slots that report done go back to their free lists
        let mut done: Vec<usize> = Vec::new();
        for (slot, enemy) in self.enemies.iter_mut() {
            if enemy.update(dt, now_ms, self.cfg.view_h) {
                done.push(slot);
            }
        }
        for slot in done.drain(..) {
            if let Some(enemy) = self.enemies.get_mut(slot) {
                enemy.flash.stop();
            }
            self.enemies.release(slot);
        }
        for (slot, laser) in self.lasers.iter_mut() {
            if laser.update(dt) {
                done.push(slot);
            }
        }
        for slot in done.drain(..) {
            self.lasers.release(slot);
        }

        self.smoke.update(dt, self.player.pos);

        // Repeating spawn timer
        self.spawn_clock_ms += dt as f64 * 1000.0;
        while self.spawn_clock_ms >= self.cfg.enemy_spawn_period_ms {
            self.spawn_clock_ms -= self.cfg.enemy_spawn_period_ms;
            self.spawn_enemy();
        }

        // Collisions: detect, then resolve in the same frame
        overlap::detect_hits(&self.lasers, &self.enemies, &mut self.events.hits);
        let hits: Vec<LaserHitEvent> = self.events.hits.drain().collect();
        for hit in hits {
            self.on_laser_hits_enemy(hit, now_ms);
        }
    }

    /// Firing plus the mutually exclusive movement branches. Firing is
    /// independent of movement; the movement directions exclude each other,
    /// and the chosen branch zeroes the other axis.
    fn handle_move_and_fire(&mut self, input: &InputSnapshot, now_ms: f64) {
        let speed = self.cfg.player_speed;

        if input.shoot && now_ms >= self.last_fired_ms {
            match self.lasers.acquire() {
                Some(slot) => {
                    let pos = self.player.pos;
                    if let Some(laser) = self.lasers.get_mut(slot) {
                        laser.fire(pos, self.cfg.laser_speed);
                    }
                    self.events.audio.send(AudioCue::LaserShot);
                    self.last_fired_ms = now_ms + self.cfg.fire_cooldown_ms;
                }
                None => warn!("Laser pool exhausted, shot dropped"),
            }
        }

        let flip = self.player.flip_x;
        if input.left {
            self.player.steer(Vec2::new(-speed, 0.0), ShipAnim::Left, false);
            self.events.audio.send(AudioCue::Woosh);
        } else if input.right {
            self.player.steer(Vec2::new(speed, 0.0), ShipAnim::Right, true);
            self.events.audio.send(AudioCue::Woosh);
        } else if input.up {
            self.player.steer(Vec2::new(0.0, -speed), ShipAnim::Turn, flip);
            self.events.audio.send(AudioCue::Woosh);
        } else if input.down {
            self.player.steer(Vec2::new(0.0, speed), ShipAnim::Turn, flip);
            self.events.audio.send(AudioCue::Woosh);
        } else {
            self.player.steer(Vec2::ZERO, ShipAnim::Turn, flip);
        }
    }

    /// Acquire one enemy slot and drop it at a random horizontal position.
    /// An exhausted pool skips the spawn for this tick.
    pub fn spawn_enemy(&mut self) {
        let Some(slot) = self.enemies.acquire() else {
            return;
        };
        let margin = self.cfg.enemy_size;
        let x = self.rng.range(margin, self.cfg.view_w - margin);
        let speed = self.cfg.enemy_speed;
        let rotation_step = self.cfg.enemy_rotation_step;
        if let Some(enemy) = self.enemies.get_mut(slot) {
            enemy.spawn(x, speed, rotation_step);
        }
    }

    /// Resolve one laser/enemy overlap: erase the laser, flash the enemy
    /// and schedule its slot release, queue the hit sound.
    fn on_laser_hits_enemy(&mut self, hit: LaserHitEvent, now_ms: f64) {
        self.lasers.release(hit.laser);

        let delay = self.cfg.enemy_removal_delay_ms;
        if let Some(enemy) = self.enemies.get_mut(hit.enemy) {
            if enemy.is_collidable() {
                enemy.hit(now_ms, delay);
                self.events.audio.send(AudioCue::EnemyHit);
            }
        }
    }

    /// When the next shot becomes allowed (for tests and debug overlays).
    pub fn next_shot_at_ms(&self) -> f64 {
        self.last_fired_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::enemy::EnemyPhase;

    const DT: f32 = 1.0 / 60.0;

    fn scene() -> Scene {
        Scene::new(GameConfig::default(), 42)
    }

    fn shooting() -> InputSnapshot {
        InputSnapshot {
            shoot: true,
            ..Default::default()
        }
    }

    // --- firing and cooldown ---

    #[test]
    fn test_fire_spawns_laser_at_player() {
        let mut scene = scene();
        scene.update(&shooting(), 1000.0, DT);

        assert_eq!(scene.lasers.live_count(), 1);
        let (_, laser) = scene.lasers.iter().next().unwrap();
        // One tick of upward travel after firing
        assert_eq!(laser.pos.x, scene.player.pos.x);
        assert!(laser.pos.y <= scene.player.pos.y);
    }

    #[test]
    fn test_cooldown_set_to_now_plus_150() {
        let mut scene = scene();
        scene.update(&shooting(), 1000.0, DT);
        assert_eq!(scene.next_shot_at_ms(), 1150.0);
    }

    #[test]
    fn test_cooldown_rejects_at_149_accepts_at_150() {
        let mut scene = scene();
        scene.update(&shooting(), 1000.0, DT);
        assert_eq!(scene.lasers.live_count(), 1);

        scene.update(&shooting(), 1149.0, DT);
        assert_eq!(scene.lasers.live_count(), 1, "shot during cooldown");

        scene.update(&shooting(), 1150.0, DT);
        assert_eq!(scene.lasers.live_count(), 2, "cooldown expired");
    }

    #[test]
    fn test_no_fire_without_shoot_input() {
        let mut scene = scene();
        scene.update(&InputSnapshot::default(), 1000.0, DT);
        assert_eq!(scene.lasers.live_count(), 0);
    }

    #[test]
    fn test_exhausted_laser_pool_drops_shot_without_cooldown() {
        let mut scene = scene();
        for i in 0..10 {
            scene.update(&shooting(), 1000.0 + i as f64 * 200.0, DT);
        }
        assert_eq!(scene.lasers.live_count(), 10);

        let before = scene.next_shot_at_ms();
        scene.update(&shooting(), 10_000.0, DT);
        assert_eq!(scene.lasers.live_count(), 10);
        // A dropped shot must not consume the cooldown
        assert_eq!(scene.next_shot_at_ms(), before);
    }

    #[test]
    fn test_firing_and_moving_are_independent() {
        let mut scene = scene();
        let input = InputSnapshot {
            shoot: true,
            left: true,
            ..Default::default()
        };
        scene.update(&input, 1000.0, DT);
        assert_eq!(scene.lasers.live_count(), 1);
        assert_eq!(scene.player.vel, Vec2::new(-100.0, 0.0));
    }

    // --- movement branches ---

    #[test]
    fn test_left_takes_priority_and_zeroes_vertical() {
        let mut scene = scene();
        let input = InputSnapshot {
            left: true,
            up: true,
            down: true,
            ..Default::default()
        };
        scene.update(&input, 0.0, DT);
        assert_eq!(scene.player.vel, Vec2::new(-100.0, 0.0));
        assert_eq!(scene.player.anim.current(), ShipAnim::Left);
        assert!(!scene.player.flip_x);
    }

    #[test]
    fn test_right_mirrors_sprite() {
        let mut scene = scene();
        let input = InputSnapshot {
            right: true,
            ..Default::default()
        };
        scene.update(&input, 0.0, DT);
        assert_eq!(scene.player.vel, Vec2::new(100.0, 0.0));
        assert_eq!(scene.player.anim.current(), ShipAnim::Right);
        assert!(scene.player.flip_x);
    }

    #[test]
    fn test_up_and_down_use_turn_animation() {
        let mut scene = scene();
        scene.update(
            &InputSnapshot {
                up: true,
                ..Default::default()
            },
            0.0,
            DT,
        );
        assert_eq!(scene.player.vel, Vec2::new(0.0, -100.0));
        assert_eq!(scene.player.anim.current(), ShipAnim::Turn);

        scene.update(
            &InputSnapshot {
                down: true,
                ..Default::default()
            },
            0.0,
            DT,
        );
        assert_eq!(scene.player.vel, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_idle_stops_and_is_silent() {
        let mut scene = scene();
        scene.update(
            &InputSnapshot {
                right: true,
                ..Default::default()
            },
            0.0,
            DT,
        );
        scene.events.audio.drain().count();

        scene.update(&InputSnapshot::default(), 100.0, DT);
        assert_eq!(scene.player.vel, Vec2::ZERO);
        assert_eq!(scene.player.anim.current(), ShipAnim::Turn);
        assert!(scene.events.audio.is_empty());
    }

    #[test]
    fn test_moving_queues_woosh_cue() {
        let mut scene = scene();
        scene.update(
            &InputSnapshot {
                left: true,
                ..Default::default()
            },
            0.0,
            DT,
        );
        let cues: Vec<AudioCue> = scene.events.audio.drain().collect();
        assert!(cues.contains(&AudioCue::Woosh));
    }

    // --- enemy spawning ---

    #[test]
    fn test_spawn_positions_respect_margin() {
        let mut scene = scene();
        let margin = scene.cfg.enemy_size;
        for _ in 0..50 {
            scene.spawn_enemy();
            let xs: Vec<f32> = scene.enemies.iter().map(|(_, e)| e.pos.x).collect();
            for x in xs {
                assert!(x >= margin && x <= scene.cfg.view_w - margin, "x = {}", x);
            }
            // Recycle so the pool never runs dry mid-test
            let slots: Vec<usize> = scene.enemies.iter().map(|(s, _)| s).collect();
            for slot in slots {
                scene.enemies.release(slot);
            }
        }
    }

    #[test]
    fn test_spawn_timer_fires_every_two_seconds() {
        let mut scene = scene();
        // Just under one period of frames: nothing yet
        for _ in 0..119 {
            scene.update(&InputSnapshot::default(), 0.0, DT);
        }
        assert_eq!(scene.enemies.live_count(), 0);

        scene.update(&InputSnapshot::default(), 0.0, DT);
        assert_eq!(scene.enemies.live_count(), 1);
    }

    #[test]
    fn test_eleventh_enemy_is_noop() {
        let mut scene = scene();
        for _ in 0..11 {
            scene.spawn_enemy();
        }
        assert_eq!(scene.enemies.live_count(), 10);
    }

    // --- hit resolution ---

    /// Fire a laser and park an enemy on top of it, then run one update.
    fn stage_hit(scene: &mut Scene, now_ms: f64) -> usize {
        scene.update(&shooting(), now_ms, DT);
        scene.spawn_enemy();
        let (enemy_slot, _) = scene.enemies.iter().next().unwrap();
        let laser_pos = scene.lasers.iter().next().unwrap().1.pos;
        scene.enemies.get_mut(enemy_slot).unwrap().pos = laser_pos;
        scene.update(&InputSnapshot::default(), now_ms + 16.0, DT);
        enemy_slot
    }

    #[test]
    fn test_hit_erases_laser_and_starts_dying() {
        let mut scene = scene();
        let enemy_slot = stage_hit(&mut scene, 1000.0);

        assert_eq!(scene.lasers.live_count(), 0);
        let enemy = scene.enemies.get(enemy_slot).unwrap();
        assert!(matches!(enemy.phase, EnemyPhase::Dying { .. }));
        assert!(enemy.flash.is_active());
    }

    #[test]
    fn test_hit_queues_enemy_hit_cue() {
        let mut scene = scene();
        stage_hit(&mut scene, 1000.0);
        let cues: Vec<AudioCue> = scene.events.audio.drain().collect();
        assert!(cues.contains(&AudioCue::EnemyHit));
    }

    #[test]
    fn test_enemy_reusable_no_sooner_than_200ms() {
        let mut scene = scene();
        stage_hit(&mut scene, 1000.0);
        assert_eq!(scene.enemies.live_count(), 1);

        // Hit resolved at t=1016; still held short of the deadline
        scene.update(&InputSnapshot::default(), 1200.0, DT);
        assert_eq!(scene.enemies.live_count(), 1);

        // Past the 200 ms removal delay the slot is back in the pool
        scene.update(&InputSnapshot::default(), 1250.0, DT);
        assert_eq!(scene.enemies.live_count(), 0);
    }

    #[test]
    fn test_dying_enemy_cannot_be_hit_again() {
        let mut scene = scene();
        let enemy_slot = stage_hit(&mut scene, 1000.0);
        scene.events.audio.drain().count();

        // Second laser into the same (dying) enemy
        scene.update(&shooting(), 1200.0, DT);
        let laser_pos = scene.lasers.iter().next().unwrap().1.pos;
        scene.enemies.get_mut(enemy_slot).unwrap().pos = laser_pos;
        scene.update(&InputSnapshot::default(), 1216.0, DT);

        let cues: Vec<AudioCue> = scene.events.audio.drain().collect();
        assert!(!cues.contains(&AudioCue::EnemyHit));
    }

    // --- clouds ---

    #[test]
    fn test_scene_wraps_clouds() {
        let mut scene = scene();
        scene.clouds.clouds[0].pos = Vec2::new(200.0, scene.cfg.view_h + 1.0);
        scene.update(&InputSnapshot::default(), 0.0, DT);
        let cloud = scene.clouds.clouds[0];
        assert!(cloud.pos.y < 0.0);
        assert!((10.0..400.0).contains(&cloud.pos.x));
    }
}
