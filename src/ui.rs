//! UI module for the rose greeting
//! Blush gradients with rose accents
//!
//! # Architecture
//!
//! - **Pages** (`pages`): The prompt and accepted screens
//! - **Components** (`components`): Popup and celebration overlay with Message handling
//! - **Effects** (`effects`): Canvas programs (confetti)
//! - **Animation** (`animation`): Opacity fades

pub mod animation;
pub mod components;
pub mod effects;
pub mod pages;
pub mod theme;
