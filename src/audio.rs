//! Sound-effect playback module
//!
//! - `SoundEffects`: lazily created, rate-limited, failure-tolerant effect player
//! - `SoundEffect`: the four named effects and their playback policy
//! - `RodioBackend`: rodio output used by the application at runtime
//! - `Cooldown`: per-effect minimum interval between triggers

mod backend;
mod cooldown;
mod sfx;

pub use backend::RodioBackend;
pub use sfx::{SoundEffect, SoundEffects};

#[cfg(test)]
pub use sfx::testing as sfx_testing;
