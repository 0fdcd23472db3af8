//! Main application module

pub mod celebration;
pub mod evasion;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::Key;

/// Clock resolution for playing the accepted-screen picture
const PICTURE_TICK: std::time::Duration = std::time::Duration::from_millis(40);
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale and sounds
        let settings = crate::features::Settings::load();
        let sfx = CoreState::default_sfx(&settings);

        // 2. Initialize state
        let picture_path = settings.picture_path();
        let app = Self::with_sfx(settings, sfx);

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(900.0, 760.0),
            min_size: Some(iced::Size::new(640.0, 560.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "rosegift".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Decode the accepted-screen picture in the background
        let load_picture = Task::perform(
            crate::features::Picture::load(picture_path),
            Message::PictureLoaded,
        );

        (app, Task::batch([open_window.discard(), load_picture]))
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        self.core.settings.theme()
    }

    /// Window title follows the current screen
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let key = if self.ui.answered {
            Key::WindowTitleAccepted
        } else {
            Key::WindowTitlePrompt
        };
        self.core.locale.get(key).to_string()
    }

    /// Subscriptions for animation frames, picture playback, Escape and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use std::time::Instant;

        let now = Instant::now();
        let (needs_frames, listens_for_escape) = subscription_logic::subscription_decisions(
            self.ui.popup_fade.is_animating(),
            self.ui.celebration.is_animating(now),
            self.ui.celebration.is_visible(),
        );
        let plays_picture = subscription_logic::needs_picture_ticks(
            self.ui.answered,
            self.ui.picture.as_ref().is_some_and(|p| p.is_animated()),
        );

        // 1. Animation subscription (vsync rate while something moves)
        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Picture playback on a coarse timer while nothing else drives frames
        let picture_sub = if plays_picture && !needs_frames {
            iced::time::every(PICTURE_TICK).map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Escape closes the celebration overlay
        let keyboard_sub = if listens_for_escape {
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                } => Some(Message::DismissCelebration),
                _ => None,
            })
        } else {
            iced::Subscription::none()
        };

        // 4. Window events
        let close_event_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        iced::Subscription::batch([animation_sub, picture_sub, keyboard_sub, close_event_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(popup_animating: bool, overlay_animating: bool) -> bool {
        popup_animating || overlay_animating
    }

    pub fn needs_escape_subscription(overlay_visible: bool) -> bool {
        overlay_visible
    }

    /// Animated pictures only play on the accepted screen
    pub fn needs_picture_ticks(answered: bool, picture_animated: bool) -> bool {
        answered && picture_animated
    }

    pub fn subscription_decisions(
        popup_animating: bool,
        overlay_animating: bool,
        overlay_visible: bool,
    ) -> (bool, bool) {
        (
            needs_animation_subscription(popup_animating, overlay_animating),
            needs_escape_subscription(overlay_visible),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn idle_prompt_needs_no_subscriptions() {
        let (frames, escape) = subscription_decisions(false, false, false);
        assert!(!frames, "No frames while nothing animates");
        assert!(!escape, "Escape only matters with the overlay open");
    }

    #[test]
    fn popup_fade_needs_frames() {
        let (frames, escape) = subscription_decisions(true, false, false);
        assert!(frames);
        assert!(!escape);
    }

    #[test]
    fn open_overlay_with_confetti_needs_both() {
        let (frames, escape) = subscription_decisions(false, true, true);
        assert!(frames && escape);
    }

    #[test]
    fn animated_picture_ticks_only_after_accept() {
        assert!(!needs_picture_ticks(false, true));
        assert!(!needs_picture_ticks(true, false));
        assert!(needs_picture_ticks(true, true));
    }

    #[test]
    fn settled_overlay_still_listens_for_escape() {
        // Confetti has landed and the fade is done, but the overlay is up
        let (frames, escape) = subscription_decisions(false, false, true);
        assert!(!frames);
        assert!(escape);
    }
}
