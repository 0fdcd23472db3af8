//! Animation helpers
//!
//! Opacity fades for the feedback popup and the celebration dialog, driven by
//! `iced_anim` transitions and ticked from `Message::AnimationTick`.

mod fade;

pub use fade::{DIALOG_FADE, FadeAnimation, POPUP_FADE};
