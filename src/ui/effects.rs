//! Decorative canvas effects
//!
//! - Confetti burst shown while the celebration overlay is open

pub mod confetti;
