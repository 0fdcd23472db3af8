//! Evasive No control state
//!
//! Every attempt flips the control to the other slot, bumps the attempt
//! counter and (re)opens the feedback popup for a fixed window. Only the
//! newest hide timer is honoured; older ones arrive with a stale generation
//! and are ignored.

use std::time::Duration;

use serde::Deserialize;

/// How long the feedback popup stays up after the latest attempt
pub const POPUP_DURATION: Duration = Duration::from_millis(2000);

/// Expressions shown in the feedback popup, indexed by attempt count
pub const EXPRESSIONS: [&str; 8] = ["🥺", "🥹", "😢", "😭", "💔", "🙏", "😿", "🥲"];

/// Horizontal slot of the No control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    pub fn flipped(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Scheduled popup hide, tagged with the attempt that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Default)]
struct PopupTimer {
    visible: bool,
    generation: u64,
}

/// State of the evasive No control and its feedback popup
#[derive(Debug)]
pub struct EvasionController {
    side: Side,
    attempts: u64,
    popup: PopupTimer,
}

impl Default for EvasionController {
    fn default() -> Self {
        Self::new(Side::default())
    }
}

impl EvasionController {
    pub fn new(initial_side: Side) -> Self {
        Self {
            side: initial_side,
            attempts: 0,
            popup: PopupTimer::default(),
        }
    }

    /// Register an attempt and return the hide timer to schedule
    pub fn attempt(&mut self) -> HideTicket {
        self.side = self.side.flipped();
        self.attempts = self.attempts.saturating_add(1);

        self.popup.visible = true;
        self.popup.generation = self.popup.generation.wrapping_add(1);

        HideTicket {
            generation: self.popup.generation,
            delay: POPUP_DURATION,
        }
    }

    /// Hide the popup if `generation` belongs to the latest attempt.
    ///
    /// Returns whether the popup was hidden.
    pub fn hide(&mut self, generation: u64) -> bool {
        if generation != self.popup.generation || !self.popup.visible {
            return false;
        }
        self.popup.visible = false;
        true
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn popup_visible(&self) -> bool {
        self.popup.visible
    }

    pub fn expression_index(&self) -> usize {
        (self.attempts % EXPRESSIONS.len() as u64) as usize
    }

    pub fn expression(&self) -> &'static str {
        EXPRESSIONS[self.expression_index()]
    }
}
