//! Opacity fades built on iced_anim transitions

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Popup fade (slide-in feel)
pub const POPUP_FADE: Duration = Duration::from_millis(300);
/// Dialog fade
pub const DIALOG_FADE: Duration = Duration::from_millis(200);

/// Single 0.0 <-> 1.0 fade
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
    duration: Duration,
}

impl FadeAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            animation: Animated::transition(0.0, Self::easing(duration)),
            duration,
        }
    }

    fn easing(duration: Duration) -> Easing {
        Easing::EASE_OUT.with_duration(duration)
    }

    /// Fade towards fully visible
    pub fn show(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Jump straight to hidden, dropping any running transition
    pub fn reset(&mut self) {
        self.animation = Animated::transition(0.0, Self::easing(self.duration));
    }

    /// Current opacity (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
