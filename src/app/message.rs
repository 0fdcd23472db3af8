//! Application messages

use crate::features::Picture;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (clicks inside the dialog)
    Noop,

    // ============ Prompt ============
    /// Pointer entered or pressed the No control
    EvasionAttempt,
    /// Popup hide timer fired for the given attempt generation
    HidePopup(u64),
    /// Accepted-screen picture finished decoding
    PictureLoaded(Result<Picture, String>),
    /// Yes button pressed
    Accept,

    // ============ Celebration ============
    /// Close button, backdrop click or Escape on the celebration overlay
    DismissCelebration,

    // ============ Animation ============
    /// Frame tick for fades and confetti
    AnimationTick,

    // ============ Window ============
    /// The main window was closed
    WindowClosed,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use a macro to reduce boilerplate for simple variants
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::Noop => simple!("Noop"),

            Self::EvasionAttempt => simple!("EvasionAttempt"),
            Self::HidePopup(generation) => simple!("HidePopup", "{}", generation),
            Self::PictureLoaded(Ok(picture)) => {
                simple!("PictureLoaded", "{} frames", picture.frame_count())
            }
            Self::PictureLoaded(Err(e)) => simple!("PictureLoaded", "error: {}", e),
            Self::Accept => simple!("Accept"),
            Self::DismissCelebration => simple!("DismissCelebration"),
            Self::WindowClosed => simple!("WindowClosed"),
        }
    }
}
