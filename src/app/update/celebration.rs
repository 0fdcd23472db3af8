//! Celebration overlay and animation handlers

use std::time::Instant;

use iced::Task;

use crate::app::{App, Message};
use crate::audio::SoundEffect;

impl App {
    /// Handle overlay dismissal and animation frames
    pub fn handle_celebration(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DismissCelebration => {
                self.on_dismiss_celebration(Instant::now());
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.now = now;
                self.ui.popup_fade.tick(now);
                self.ui.celebration.tick(now);
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }

    fn on_dismiss_celebration(&mut self, now: Instant) {
        if !self.ui.celebration.is_visible() {
            return;
        }
        self.core.sfx.trigger_at(SoundEffect::DismissBoop, now);
        self.ui.celebration.close();
        tracing::debug!("Celebration overlay dismissed");
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::app::Message;
    use crate::app::update::test_support::app_with_recorder;

    #[test]
    fn dismiss_closes_overlay_but_keeps_accepted_screen() {
        let (mut app, backend) = app_with_recorder();
        let _ = app.update(Message::Accept);

        let _ = app.update(Message::DismissCelebration);

        assert!(!app.ui.celebration.is_visible());
        assert!(app.ui.celebration.burst().is_none());
        assert!(app.ui.answered);
        assert_eq!(backend.log.borrow().plays_of("sfx-no-boop.mp3"), 1);
    }

    #[test]
    fn dismiss_without_overlay_is_silent() {
        let (mut app, backend) = app_with_recorder();

        let _ = app.update(Message::DismissCelebration);

        assert!(!app.ui.celebration.is_visible());
        assert!(backend.log.borrow().played.is_empty());
    }

    #[test]
    fn dismiss_sound_respects_its_cooldown() {
        let (mut app, backend) = app_with_recorder();
        let start = Instant::now();
        let mut rng = rand::rng();

        app.ui.answered = true;
        app.ui.celebration.open(&mut rng, start);
        app.on_dismiss_celebration(start);

        app.ui.celebration.open(&mut rng, start);
        app.on_dismiss_celebration(start + Duration::from_millis(200));
        // Closed even though the sound was throttled
        assert!(!app.ui.celebration.is_visible());

        app.ui.celebration.open(&mut rng, start);
        app.on_dismiss_celebration(start + Duration::from_millis(600));

        assert_eq!(backend.log.borrow().plays_of("sfx-no-boop.mp3"), 2);
    }

    #[test]
    fn animation_tick_advances_clock() {
        let (mut app, _) = app_with_recorder();
        let before = app.ui.now;

        let _ = app.update(Message::AnimationTick);

        assert!(app.ui.now >= before);
    }
}
