//! Prompt screen handlers: evasive No control and acceptance

use std::time::Instant;

use iced::Task;

use crate::app::evasion::HideTicket;
use crate::app::{App, Message};
use crate::audio::SoundEffect;

impl App {
    /// Handle prompt screen messages
    pub fn handle_prompt(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::EvasionAttempt => Some(
                self.on_evasion_attempt(Instant::now())
                    .map(hide_popup_after)
                    .unwrap_or_else(Task::none),
            ),

            Message::HidePopup(generation) => {
                if self.ui.evasion.hide(*generation) {
                    self.ui.popup_fade.reset();
                }
                Some(Task::none())
            }

            Message::Accept => {
                self.on_accept(Instant::now());
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Dodge, count the attempt, and (re)start the popup window.
    ///
    /// Returns the hide timer to schedule, or `None` once the rose is accepted.
    fn on_evasion_attempt(&mut self, now: Instant) -> Option<HideTicket> {
        // Queued pointer events can still arrive after the screen switched
        if self.ui.answered {
            return None;
        }

        self.core.sfx.trigger_at(SoundEffect::EvasionBoop, now);

        let ticket = self.ui.evasion.attempt();
        self.ui.popup_fade.show();
        tracing::debug!(
            "Evasion attempt #{} -> {:?}",
            self.ui.evasion.attempts(),
            self.ui.evasion.side()
        );

        Some(ticket)
    }

    /// Irreversible switch to the accepted screen with the celebration open
    fn on_accept(&mut self, now: Instant) {
        if self.ui.answered {
            return;
        }

        // Both sounds fire inside the same user interaction
        self.core.sfx.trigger_at(SoundEffect::Confirmation, now);

        self.ui.answered = true;
        self.ui.accepted_at = Some(now);
        self.ui.now = now;
        self.ui.celebration.open(&mut rand::rng(), now);

        self.core.sfx.trigger_at(SoundEffect::Celebration, now);

        tracing::info!(
            "Rose accepted after {} evasion attempts",
            self.ui.evasion.attempts()
        );
    }
}

/// Auto-hide the popup after the ticket's delay; stale generations are ignored
fn hide_popup_after(ticket: HideTicket) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(ticket.delay).await;
        },
        move |_| Message::HidePopup(ticket.generation),
    )
}
