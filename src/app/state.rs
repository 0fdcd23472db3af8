// src/app/state.rs
//! Application state definitions

use std::time::Instant;

use crate::app::celebration::CelebrationOverlay;
use crate::app::evasion::EvasionController;
use crate::audio::{RodioBackend, SoundEffects};
use crate::features::{Picture, Settings};
use crate::i18n::Locale;
use crate::ui::animation::{FadeAnimation, POPUP_FADE};

/// Main application state
pub struct App {
    /// Settings, locale and sound effects
    pub core: CoreState,
    /// Screen state (answer, evasion, overlay, animations)
    pub ui: UiState,
}

/// Core services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    pub sfx: SoundEffects,
}

impl CoreState {
    pub fn new(settings: Settings, locale: Locale, sfx: SoundEffects) -> Self {
        Self {
            settings,
            locale,
            sfx,
        }
    }

    /// Sound effects on the default output device, configured from settings
    pub fn default_sfx(settings: &Settings) -> SoundEffects {
        SoundEffects::new(Box::new(RodioBackend::new()), settings.assets_dir.clone())
            .with_master_volume(settings.sound.master_volume)
            .with_enabled(settings.sound.enabled)
    }
}

/// UI view state
pub struct UiState {
    /// Set once the rose is accepted; never cleared
    pub answered: bool,
    /// When the rose was accepted; the picture animation starts here
    pub accepted_at: Option<Instant>,
    /// Decoded accepted-screen picture, once loaded
    pub picture: Option<Picture>,
    /// Evasive No control and its feedback popup
    pub evasion: EvasionController,
    /// Feedback popup opacity
    pub popup_fade: FadeAnimation,
    /// Celebration overlay shown after acceptance
    pub celebration: CelebrationOverlay,
    /// Time of the latest animation frame
    pub now: Instant,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            answered: false,
            accepted_at: None,
            picture: None,
            evasion: EvasionController::new(settings.initial_side),
            popup_fade: FadeAnimation::new(POPUP_FADE),
            celebration: CelebrationOverlay::default(),
            now: Instant::now(),
        }
    }
}

impl App {
    /// Build the application state without opening a window
    pub fn with_sfx(settings: Settings, sfx: SoundEffects) -> Self {
        let locale = Locale::new(settings.language());
        let ui = UiState::new(&settings);
        let core = CoreState::new(settings, locale, sfx);
        Self { core, ui }
    }
}
