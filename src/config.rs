//! Game tuning
//!
//! All gameplay numbers in one serde struct, loadable from `assets/config.ron`
//! so tuning doesn't need a recompile. Missing file or a parse error falls
//! back to the defaults below; a partial file only overrides the fields it
//! names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport size in world units
    pub view_w: f32,
    pub view_h: f32,

    /// Player start position
    pub player_start_x: f32,
    pub player_start_y: f32,
    /// Player speed in units per second
    pub player_speed: f32,
    /// Minimum interval between shots
    pub fire_cooldown_ms: f64,

    /// Laser upward speed in units per second
    pub laser_speed: f32,
    pub laser_pool_size: usize,

    /// Enemy fall speed in units per second
    pub enemy_speed: f32,
    /// Enemy rotation per update tick, radians
    pub enemy_rotation_step: f32,
    /// Enemy sprite size (square)
    pub enemy_size: f32,
    pub enemy_pool_size: usize,
    /// One enemy spawns every this many milliseconds
    pub enemy_spawn_period_ms: f64,
    /// Hit flash: one yoyo leg
    pub flash_leg_ms: f64,
    /// Delay between a hit and the slot returning to the pool
    pub enemy_removal_delay_ms: f64,

    pub cloud_count: usize,
    /// Cloud downward drift in units per second
    pub cloud_speed: f32,

    /// Smoke trail emission rate, particles per second
    pub smoke_rate: f32,

    /// Touch button row (centers) and square button size
    pub button_row_y: f32,
    pub button_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            view_w: 400.0,
            view_h: 620.0,
            player_start_x: 200.0,
            player_start_y: 450.0,
            player_speed: 100.0,
            fire_cooldown_ms: 150.0,
            laser_speed: 200.0,
            laser_pool_size: 10,
            enemy_speed: 60.0,
            enemy_rotation_step: 0.06,
            enemy_size: 32.0,
            enemy_pool_size: 10,
            enemy_spawn_period_ms: 2000.0,
            flash_leg_ms: 100.0,
            enemy_removal_delay_ms: 200.0,
            cloud_count: 21,
            cloud_speed: 20.0,
            smoke_rate: 30.0,
            button_row_y: 550.0,
            button_size: 60.0,
        }
    }
}

impl GameConfig {
    /// Load from a RON file, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match ron::from_str(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("Failed to parse {}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_game_tuning() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.player_speed, 100.0);
        assert_eq!(cfg.fire_cooldown_ms, 150.0);
        assert_eq!(cfg.enemy_speed, 60.0);
        assert_eq!(cfg.enemy_pool_size, 10);
        assert_eq!(cfg.laser_pool_size, 10);
        assert_eq!(cfg.cloud_count, 21);
        assert_eq!(cfg.enemy_spawn_period_ms, 2000.0);
    }

    #[test]
    fn test_partial_file_overrides_named_fields_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(enemy_speed: 90.0)").unwrap();

        let cfg = GameConfig::load_or_default(file.path().to_str().unwrap());
        assert_eq!(cfg.enemy_speed, 90.0);
        assert_eq!(cfg.player_speed, 100.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let cfg = GameConfig::load_or_default("does/not/exist.ron");
        assert_eq!(cfg.view_w, 400.0);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not ron at all").unwrap();

        let cfg = GameConfig::load_or_default(file.path().to_str().unwrap());
        assert_eq!(cfg.cloud_count, 21);
    }

    #[test]
    fn test_round_trip_through_ron() {
        let cfg = GameConfig::default();
        let text = ron::to_string(&cfg).unwrap();
        let back: GameConfig = ron::from_str(&text).unwrap();
        assert_eq!(back.view_h, cfg.view_h);
        assert_eq!(back.enemy_rotation_step, cfg.enemy_rotation_step);
    }
}
