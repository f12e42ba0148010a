//! Asset loading
//!
//! Loads everything the manifest declares through macroquad's loaders and
//! keeps the results keyed by logical name. Loading happens once at startup;
//! a missing required texture is a startup error, while the remote smoke
//! image is allowed to fail (the trail is simply not drawn).

pub mod manifest;

use std::collections::HashMap;

use macroquad::prelude::warn;
use macroquad::texture::{load_texture, FilterMode, Texture2D};

pub use manifest::{AssetManifest, SheetSpec};

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// File I/O or engine loader error
    Io(String),
    /// Serialization/deserialization error
    Serialization(String),
    /// A manifest key the game requires was not declared or failed to load
    Missing(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Io(msg) => write!(f, "I/O error: {}", msg),
            AssetError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            AssetError::Missing(key) => write!(f, "Missing asset: {}", key),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        AssetError::Io(e.to_string())
    }
}

/// A loaded spritesheet: texture plus frame geometry.
pub struct SpriteSheet {
    pub texture: Texture2D,
    pub spec: SheetSpec,
}

impl SpriteSheet {
    /// Source rect for a frame of this sheet.
    pub fn frame_rect(&self, frame: u16) -> macroquad::math::Rect {
        self.spec.source_rect(frame, self.texture.width())
    }
}

/// All textures and spritesheets, keyed by manifest name.
pub struct GameAssets {
    textures: HashMap<String, Texture2D>,
    sheets: HashMap<String, SpriteSheet>,
}

impl GameAssets {
    /// Load every entry in the manifest. Only the `smoke` image is optional.
    pub async fn load(manifest: &AssetManifest) -> Result<Self, AssetError> {
        let mut textures = HashMap::new();
        for entry in &manifest.images {
            match load_texture(&entry.path).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Linear);
                    textures.insert(entry.key.clone(), texture);
                }
                Err(e) if entry.key == "smoke" => {
                    warn!("Smoke texture unavailable ({}), trail disabled", e);
                }
                Err(e) => {
                    return Err(AssetError::Io(format!("{}: {}", entry.path, e)));
                }
            }
        }

        let mut sheets = HashMap::new();
        for entry in &manifest.spritesheets {
            let texture = load_texture(&entry.path)
                .await
                .map_err(|e| AssetError::Io(format!("{}: {}", entry.path, e)))?;
            texture.set_filter(FilterMode::Linear);
            sheets.insert(
                entry.key.clone(),
                SpriteSheet {
                    texture,
                    spec: entry.spec,
                },
            );
        }

        Ok(Self { textures, sheets })
    }

    pub fn texture(&self, key: &str) -> Option<&Texture2D> {
        self.textures.get(key)
    }

    pub fn sheet(&self, key: &str) -> Option<&SpriteSheet> {
        self.sheets.get(key)
    }
}
