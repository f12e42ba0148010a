//! Asset manifest
//!
//! Declares every image, spritesheet and sound the game needs by logical
//! key and path, the way the scene's preload step would. The manifest is
//! RON on disk (`assets/manifest.ron`) with the full default embedded here,
//! so the game runs without the file present.

use serde::{Deserialize, Serialize};

/// A plain image asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntry {
    pub key: String,
    pub path: String,
}

/// Frame geometry of a spritesheet. Pure data so frame math is testable
/// without a loaded texture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SheetSpec {
    pub frame_w: f32,
    pub frame_h: f32,
    /// First usable frame index
    pub first: u16,
    /// Last usable frame index (inclusive)
    pub last: u16,
}

impl SheetSpec {
    /// Source rectangle of a frame, given the sheet texture width.
    /// Frames are numbered row-major.
    pub fn source_rect(&self, frame: u16, tex_w: f32) -> macroquad::math::Rect {
        let cols = ((tex_w / self.frame_w) as u16).max(1);
        let col = frame % cols;
        let row = frame / cols;
        macroquad::math::Rect::new(
            col as f32 * self.frame_w,
            row as f32 * self.frame_h,
            self.frame_w,
            self.frame_h,
        )
    }
}

/// A spritesheet asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetEntry {
    pub key: String,
    pub path: String,
    pub spec: SheetSpec,
}

/// A sound effect. The nominal duration drives the "don't retrigger while
/// still playing" gate, since the engine doesn't report playback state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundEntry {
    pub key: String,
    pub path: String,
    pub duration_secs: f64,
    pub volume: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub images: Vec<ImageEntry>,
    pub spritesheets: Vec<SheetEntry>,
    pub sounds: Vec<SoundEntry>,
}

fn image(key: &str, path: &str) -> ImageEntry {
    ImageEntry {
        key: key.to_string(),
        path: path.to_string(),
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            images: vec![
                image("background", "images/bg_layer1.png"),
                image("cloud", "images/cloud.png"),
                image("left-btn", "images/left-btn.png"),
                image("right-btn", "images/right-btn.png"),
                image("shoot-btn", "images/shoot-btn.png"),
                image("enemy", "images/enemy.png"),
                // Remote asset; failure to fetch only disables the smoke puffs
                image("smoke", "https://labs.phaser.io/assets/particles/smoke-puff.png"),
            ],
            spritesheets: vec![
                SheetEntry {
                    key: "player".to_string(),
                    path: "images/ship.png".to_string(),
                    spec: SheetSpec {
                        frame_w: 66.0,
                        frame_h: 66.0,
                        first: 0,
                        last: 2,
                    },
                },
                SheetEntry {
                    key: "laser".to_string(),
                    path: "images/laser-bolts.png".to_string(),
                    spec: SheetSpec {
                        frame_w: 16.0,
                        frame_h: 32.0,
                        first: 16,
                        last: 32,
                    },
                },
            ],
            sounds: vec![
                SoundEntry {
                    key: "woosh".to_string(),
                    path: "sfx/woosh.mp3".to_string(),
                    duration_secs: 0.8,
                    volume: 0.2,
                },
                SoundEntry {
                    key: "laser-shoot".to_string(),
                    path: "sfx/laser.mp3".to_string(),
                    duration_secs: 0.3,
                    volume: 0.6,
                },
                SoundEntry {
                    key: "enemy-hit".to_string(),
                    path: "sfx/hit.mp3".to_string(),
                    duration_secs: 0.5,
                    volume: 0.8,
                },
            ],
        }
    }
}

impl AssetManifest {
    /// Load from a RON file, falling back to the embedded default.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match ron::from_str(&text) {
                Ok(manifest) => manifest,
                Err(e) => {
                    eprintln!("Failed to parse {}: {}, using built-in manifest", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
