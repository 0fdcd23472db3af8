//! Sound-effect player
//!
//! Each effect owns one slot that is filled on first use and reused afterwards.
//! Creation is attempted once per effect; a failed slot stays silent for the
//! rest of the process. Playback errors are swallowed at the trigger boundary
//! so callers never have to care whether audio is available.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::cooldown::Cooldown;

/// Named sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Played when the rose is accepted
    Confirmation,
    /// Played alongside the confirmation when the overlay opens
    Celebration,
    /// Played when the No control dodges
    EvasionBoop,
    /// Softer boop played when the celebration overlay is dismissed
    DismissBoop,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::Confirmation,
        SoundEffect::Celebration,
        SoundEffect::EvasionBoop,
        SoundEffect::DismissBoop,
    ];

    /// Asset file name inside the assets directory
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundEffect::Confirmation => "sfx-yes-confirmation.mp3",
            SoundEffect::Celebration => "sfx-celebration.mp3",
            // The dismiss sound reuses the boop recording at a lower volume
            SoundEffect::EvasionBoop | SoundEffect::DismissBoop => "sfx-no-boop.mp3",
        }
    }

    pub fn default_volume(self) -> f32 {
        match self {
            SoundEffect::DismissBoop => 0.3,
            _ => 0.4,
        }
    }

    /// Minimum interval between two accepted triggers, if rate-limited
    pub fn cooldown(self) -> Option<Duration> {
        match self {
            SoundEffect::EvasionBoop => Some(Duration::from_millis(300)),
            SoundEffect::DismissBoop => Some(Duration::from_millis(500)),
            SoundEffect::Confirmation | SoundEffect::Celebration => None,
        }
    }

    fn index(self) -> usize {
        match self {
            SoundEffect::Confirmation => 0,
            SoundEffect::Celebration => 1,
            SoundEffect::EvasionBoop => 2,
            SoundEffect::DismissBoop => 3,
        }
    }
}

/// Errors raised while creating or playing a sound
#[derive(Debug, Clone, PartialEq)]
pub enum SfxError {
    /// No usable output device
    Device(String),
    /// Asset could not be read
    Io(String),
    /// Asset could not be decoded
    Decode(String),
    /// Playback was refused
    Playback(String),
}

impl std::fmt::Display for SfxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SfxError::Device(e) => write!(f, "Audio device error: {}", e),
            SfxError::Io(e) => write!(f, "Audio asset error: {}", e),
            SfxError::Decode(e) => write!(f, "Audio decode error: {}", e),
            SfxError::Playback(e) => write!(f, "Audio playback error: {}", e),
        }
    }
}

impl std::error::Error for SfxError {}

/// A created, reusable sound resource
pub trait SoundHandle {
    /// Rewind to the start and play. Overlapping calls restart, never queue.
    fn restart(&mut self) -> Result<(), SfxError>;
}

/// Creates sound handles from asset files
pub trait SfxBackend {
    fn create(&mut self, path: &Path, volume: f32) -> Result<Box<dyn SoundHandle>, SfxError>;
}

/// What happened to a trigger request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A playback attempt was made and accepted by the backend
    Played,
    /// Suppressed by the effect's cooldown; nothing was attempted
    Throttled,
    /// Passed the cooldown but the effect is unavailable (disabled or failed to load)
    Silent,
    /// A playback attempt was made and failed
    Failed,
}

impl TriggerOutcome {
    /// Whether the backend was asked to play
    #[cfg(test)]
    pub fn attempted(self) -> bool {
        matches!(self, TriggerOutcome::Played | TriggerOutcome::Failed)
    }
}

enum Slot {
    Untried,
    Ready(Box<dyn SoundHandle>),
    Unavailable,
}

/// Per-application sound-effect player
pub struct SoundEffects {
    backend: Box<dyn SfxBackend>,
    assets_dir: PathBuf,
    master_volume: f32,
    enabled: bool,
    slots: [Slot; 4],
    cooldowns: [Option<Cooldown>; 4],
}

impl SoundEffects {
    pub fn new(backend: Box<dyn SfxBackend>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            assets_dir: assets_dir.into(),
            master_volume: 1.0,
            enabled: true,
            slots: [Slot::Untried, Slot::Untried, Slot::Untried, Slot::Untried],
            cooldowns: SoundEffect::ALL.map(|effect| effect.cooldown().map(Cooldown::new)),
        }
    }

    /// Scale every effect's default volume (clamped to 0.0..=1.0)
    pub fn with_master_volume(mut self, volume: f32) -> Self {
        self.master_volume = volume.clamp(0.0, 1.0);
        self
    }

    /// Disabled players keep their cooldown bookkeeping but never create handles
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Effective volume for an effect
    pub fn volume(&self, effect: SoundEffect) -> f32 {
        effect.default_volume() * self.master_volume
    }

    /// Trigger an effect as if requested at `now`
    pub fn trigger_at(&mut self, effect: SoundEffect, now: Instant) -> TriggerOutcome {
        let idx = effect.index();

        if let Some(cooldown) = self.cooldowns[idx].as_mut() {
            if !cooldown.try_acquire(now) {
                tracing::debug!("{:?} suppressed by cooldown", effect);
                return TriggerOutcome::Throttled;
            }
        }

        if !self.enabled {
            return TriggerOutcome::Silent;
        }

        if matches!(self.slots[idx], Slot::Untried) {
            self.slots[idx] = self.create_slot(effect);
        }

        match &mut self.slots[idx] {
            Slot::Ready(handle) => match handle.restart() {
                Ok(()) => TriggerOutcome::Played,
                Err(e) => {
                    tracing::debug!("{:?} playback failed: {}", effect, e);
                    TriggerOutcome::Failed
                }
            },
            Slot::Untried | Slot::Unavailable => TriggerOutcome::Silent,
        }
    }

    /// Whether creation has been attempted and failed for an effect
    #[cfg(test)]
    pub fn is_unavailable(&self, effect: SoundEffect) -> bool {
        matches!(self.slots[effect.index()], Slot::Unavailable)
    }

    fn create_slot(&mut self, effect: SoundEffect) -> Slot {
        let path = self.assets_dir.join(effect.asset_name());
        let volume = self.volume(effect);
        match self.backend.create(&path, volume) {
            Ok(handle) => {
                tracing::debug!("Loaded {:?} from {}", effect, path.display());
                Slot::Ready(handle)
            }
            Err(e) => {
                tracing::warn!("Failed to create {:?} sound: {}", effect, e);
                Slot::Unavailable
            }
        }
    }
}

impl std::fmt::Debug for SoundEffects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundEffects")
            .field("assets_dir", &self.assets_dir)
            .field("master_volume", &self.master_volume)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingBackend;
    use super::*;

    fn player(backend: &RecordingBackend) -> SoundEffects {
        SoundEffects::new(Box::new(backend.clone()), "assets")
    }

    #[test]
    fn boop_twice_within_cooldown_plays_once() {
        let backend = RecordingBackend::default();
        let mut sfx = player(&backend);
        let start = Instant::now();

        assert_eq!(
            sfx.trigger_at(SoundEffect::EvasionBoop, start),
            TriggerOutcome::Played
        );
        assert_eq!(
            sfx.trigger_at(SoundEffect::EvasionBoop, start + Duration::from_millis(150)),
            TriggerOutcome::Throttled
        );
        assert_eq!(backend.log.borrow().played.len(), 1);
    }

    #[test]
    fn boop_spaced_by_cooldown_plays_every_time() {
        let backend = RecordingBackend::default();
        let mut sfx = player(&backend);
        let start = Instant::now();

        for i in 0..5 {
            let outcome =
                sfx.trigger_at(SoundEffect::EvasionBoop, start + Duration::from_millis(300 * i));
            assert!(outcome.attempted());
        }
        assert_eq!(backend.log.borrow().played.len(), 5);
    }

    #[test]
    fn dismiss_boop_has_its_own_longer_cooldown() {
        let backend = RecordingBackend::default();
        let mut sfx = player(&backend);
        let start = Instant::now();

        assert!(sfx.trigger_at(SoundEffect::DismissBoop, start).attempted());
        // Independent of the evasion boop window
        assert!(sfx.trigger_at(SoundEffect::EvasionBoop, start).attempted());
        assert_eq!(
            sfx.trigger_at(SoundEffect::DismissBoop, start + Duration::from_millis(400)),
            TriggerOutcome::Throttled
        );
        assert!(
            sfx.trigger_at(SoundEffect::DismissBoop, start + Duration::from_millis(500))
                .attempted()
        );
    }

    #[test]
    fn unlimited_effects_play_on_every_trigger() {
        let backend = RecordingBackend::default();
        let mut sfx = player(&backend);
        let now = Instant::now();

        for _ in 0..3 {
            sfx.trigger_at(SoundEffect::Confirmation, now);
            sfx.trigger_at(SoundEffect::Celebration, now);
        }
        let log = backend.log.borrow();
        assert_eq!(log.plays_of("sfx-yes-confirmation.mp3"), 3);
        assert_eq!(log.plays_of("sfx-celebration.mp3"), 3);
    }

    #[test]
    fn handles_are_created_once_and_reused() {
        let backend = RecordingBackend::default();
        let mut sfx = player(&backend);

        for _ in 0..4 {
            sfx.trigger_at(SoundEffect::Confirmation, Instant::now());
        }
        let log = backend.log.borrow();
        assert_eq!(log.created.len(), 1);
        assert_eq!(log.played.len(), 4);
    }

    #[test]
    fn failed_creation_is_not_retried() {
        let backend = RecordingBackend {
            broken_assets: vec!["sfx-celebration.mp3"],
            ..Default::default()
        };
        let mut sfx = player(&backend);

        assert_eq!(
            sfx.trigger_at(SoundEffect::Celebration, Instant::now()),
            TriggerOutcome::Silent
        );
        assert_eq!(
            sfx.trigger_at(SoundEffect::Celebration, Instant::now()),
            TriggerOutcome::Silent
        );
        assert!(sfx.is_unavailable(SoundEffect::Celebration));
        assert_eq!(backend.log.borrow().created.len(), 1);

        // Other effects are unaffected
        assert_eq!(
            sfx.trigger_at(SoundEffect::Confirmation, Instant::now()),
            TriggerOutcome::Played
        );
    }

    #[test]
    fn playback_failure_is_swallowed_per_trigger() {
        let backend = RecordingBackend {
            refuse_playback: true,
            ..Default::default()
        };
        let mut sfx = player(&backend);
        let start = Instant::now();

        assert_eq!(
            sfx.trigger_at(SoundEffect::EvasionBoop, start),
            TriggerOutcome::Failed
        );
        // A failed attempt still consumes the cooldown window
        assert_eq!(
            sfx.trigger_at(SoundEffect::EvasionBoop, start + Duration::from_millis(100)),
            TriggerOutcome::Throttled
        );
        // The handle is kept; the next allowed trigger tries again
        assert_eq!(
            sfx.trigger_at(SoundEffect::EvasionBoop, start + Duration::from_millis(300)),
            TriggerOutcome::Failed
        );
        assert_eq!(backend.log.borrow().created.len(), 1);
    }

    #[test]
    fn dismiss_boop_reuses_boop_asset_at_lower_volume() {
        let backend = RecordingBackend::default();
        let mut sfx = player(&backend);

        sfx.trigger_at(SoundEffect::EvasionBoop, Instant::now());
        sfx.trigger_at(SoundEffect::DismissBoop, Instant::now());

        let log = backend.log.borrow();
        assert_eq!(log.created.len(), 2);
        assert!(log.created.iter().all(|(p, _)| p.ends_with("sfx-no-boop.mp3")));
        assert_eq!(log.created[0].1, 0.4);
        assert_eq!(log.created[1].1, 0.3);
    }

    #[test]
    fn master_volume_scales_and_clamps() {
        let backend = RecordingBackend::default();
        let sfx = player(&backend).with_master_volume(0.5);
        assert!((sfx.volume(SoundEffect::Confirmation) - 0.2).abs() < f32::EPSILON);

        let loud = player(&backend).with_master_volume(3.0);
        assert!((loud.volume(SoundEffect::DismissBoop) - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn disabled_player_never_touches_backend() {
        let backend = RecordingBackend::default();
        let mut sfx = player(&backend).with_enabled(false);
        let start = Instant::now();

        assert_eq!(
            sfx.trigger_at(SoundEffect::EvasionBoop, start),
            TriggerOutcome::Silent
        );
        assert_eq!(
            sfx.trigger_at(SoundEffect::EvasionBoop, start + Duration::from_millis(10)),
            TriggerOutcome::Throttled
        );
        assert!(backend.log.borrow().created.is_empty());
    }

    #[test]
    fn assets_resolve_inside_assets_dir() {
        let backend = RecordingBackend::default();
        let mut sfx = SoundEffects::new(Box::new(backend.clone()), "/opt/rose/assets");

        sfx.trigger_at(SoundEffect::Celebration, Instant::now());
        assert_eq!(
            backend.log.borrow().created[0].0,
            PathBuf::from("/opt/rose/assets/sfx-celebration.mp3")
        );
    }
}
