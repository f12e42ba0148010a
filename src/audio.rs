//! Sound effects
//!
//! One-shot sound bank over macroquad's audio. The engine doesn't report
//! whether a sound is still playing, so each cue carries a nominal duration
//! and a gate: a cue retriggered before its previous shot has (nominally)
//! finished is skipped. That is the "play only if not already playing"
//! behavior the scene logic relies on.

use std::collections::HashMap;

use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};
use macroquad::prelude::warn;

use crate::assets::AssetManifest;
use crate::game::AudioCue;

impl AudioCue {
    /// Manifest key for this cue.
    pub fn key(self) -> &'static str {
        match self {
            AudioCue::Woosh => "woosh",
            AudioCue::LaserShot => "laser-shoot",
            AudioCue::EnemyHit => "enemy-hit",
        }
    }
}

/// Retrigger gate for a single cue. Engine-free, so the throttling rule is
/// unit-testable.
#[derive(Debug, Clone, Copy)]
pub struct CueGate {
    duration_secs: f64,
    last_started: Option<f64>,
}

impl CueGate {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            last_started: None,
        }
    }

    /// True if the previous shot has finished (or none was ever started).
    pub fn is_idle(&self, now_secs: f64) -> bool {
        match self.last_started {
            Some(started) => now_secs - started >= self.duration_secs,
            None => true,
        }
    }

    pub fn mark_started(&mut self, now_secs: f64) {
        self.last_started = Some(now_secs);
    }
}

struct BankEntry {
    sound: Sound,
    volume: f32,
    gate: CueGate,
}

/// All loaded sound effects, keyed by cue.
pub struct SoundBank {
    entries: HashMap<AudioCue, BankEntry>,
}

impl SoundBank {
    /// Load every sound the manifest declares. A sound that fails to load
    /// is skipped with a warning; the game stays playable without audio.
    pub async fn load(manifest: &AssetManifest) -> Self {
        let mut entries = HashMap::new();
        for cue in [AudioCue::Woosh, AudioCue::LaserShot, AudioCue::EnemyHit] {
            let Some(entry) = manifest.sounds.iter().find(|s| s.key == cue.key()) else {
                warn!("Sound {} not in manifest", cue.key());
                continue;
            };
            match load_sound(&entry.path).await {
                Ok(sound) => {
                    entries.insert(
                        cue,
                        BankEntry {
                            sound,
                            volume: entry.volume,
                            gate: CueGate::new(entry.duration_secs),
                        },
                    );
                }
                Err(e) => warn!("Failed to load sound {}: {}", entry.path, e),
            }
        }
        Self { entries }
    }

    /// Play a one-shot cue unless its previous shot is still running.
    pub fn play(&mut self, cue: AudioCue, now_secs: f64) {
        if let Some(entry) = self.entries.get_mut(&cue) {
            if entry.gate.is_idle(now_secs) {
                play_sound(
                    &entry.sound,
                    PlaySoundParams {
                        looped: false,
                        volume: entry.volume,
                    },
                );
                entry.gate.mark_started(now_secs);
            }
        }
    }
}
