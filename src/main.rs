//! Corona Buster: steer the ship, shoot the falling viruses
//!
//! A small touch-friendly arcade shooter. macroquad does the heavy lifting
//! (rendering, asset decoding, input devices, the frame loop); this crate is
//! the game itself: one scene, two object pools, a handful of sprites and a
//! per-frame update.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod audio;
mod config;
mod game;
mod render;
mod scene;
mod ui;

use macroquad::prelude::*;

use assets::{AssetManifest, GameAssets};
use audio::SoundBank;
use config::GameConfig;
use scene::{InputSnapshot, Scene};

fn window_conf() -> Conf {
    let cfg = GameConfig::default();
    Conf {
        window_title: format!("Corona Buster v{}", VERSION),
        window_width: cfg.view_w as i32,
        window_height: cfg.view_h as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg = GameConfig::load_or_default("assets/config.ron");
    let manifest = AssetManifest::load_or_default("assets/manifest.ron");

    let game_assets = match GameAssets::load(&manifest).await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Asset loading failed: {}", e);
            return;
        }
    };
    let mut sounds = SoundBank::load(&manifest).await;

    // Wall-clock seed; macroquad's date works on WASM too
    let seed = macroquad::miniquad::date::now() as u32;
    let mut scene = Scene::new(cfg, seed);
    info!("Scene ready (seed {})", seed);

    loop {
        let input = InputSnapshot::gather(&scene.buttons);
        let now_ms = get_time() * 1000.0;

        scene.update(&input, now_ms, get_frame_time());

        let now_secs = get_time();
        for cue in scene.events.audio.drain() {
            sounds.play(cue, now_secs);
        }

        render::draw(&scene, &game_assets, now_ms);

        next_frame().await
    }
}
