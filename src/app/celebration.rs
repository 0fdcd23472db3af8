//! Celebration overlay state
//!
//! CLOSED -> OPEN on acceptance, OPEN -> CLOSED on explicit dismissal only.
//! Each opening rolls a fresh confetti burst; closing drops it.

use std::time::Instant;

use rand::Rng;

use crate::ui::animation::{DIALOG_FADE, FadeAnimation};
use crate::ui::effects::confetti::ConfettiBurst;

#[derive(Debug)]
pub struct CelebrationOverlay {
    visible: bool,
    burst: Option<ConfettiBurst>,
    fade: FadeAnimation,
}

impl Default for CelebrationOverlay {
    fn default() -> Self {
        Self {
            visible: false,
            burst: None,
            fade: FadeAnimation::new(DIALOG_FADE),
        }
    }
}

impl CelebrationOverlay {
    /// Open the overlay, generating a new burst. Opening an open overlay is a no-op.
    pub fn open<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        self.burst = Some(ConfettiBurst::generate(rng, now));
        self.fade.show();
        true
    }

    /// Close the overlay. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.burst = None;
        self.fade.reset();
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn burst(&self) -> Option<&ConfettiBurst> {
        self.burst.as_ref()
    }

    /// Dialog opacity (0.0 to 1.0)
    pub fn opacity(&self) -> f32 {
        self.fade.progress()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.fade.is_animating() || self.burst.as_ref().is_some_and(|b| b.is_animating(now))
    }

    pub fn tick(&mut self, now: Instant) {
        self.fade.tick(now);
    }
}
