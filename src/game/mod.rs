//! Gameplay building blocks
//!
//! Plain data types and small systems the scene is assembled from. Nothing
//! in here touches the engine beyond math types, which keeps every module
//! unit-testable without a window.
//!
//! - pool: fixed-capacity slot pools for enemies and lasers
//! - events: frame-local queues (hits, audio cues)
//! - player / enemy / laser / cloud: the sprites themselves
//! - anim: ship animation clips and playback
//! - overlap: laser-vs-enemy AABB sweep
//! - tween: hit-flash alpha fade
//! - particles: smoke trail following the ship
//! - rng: deterministic xorshift for scatter and spawn positions

pub mod anim;
pub mod cloud;
pub mod enemy;
pub mod events;
pub mod laser;
pub mod overlap;
pub mod particles;
pub mod player;
pub mod pool;
pub mod rng;
pub mod tween;

pub use events::{AudioCue, Events, LaserHitEvent};
pub use pool::Pool;
pub use rng::GameRng;
