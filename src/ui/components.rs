//! UI Components module - application-specific composite components
//!
//! Components combine iced widgets and effects with application messages.
//! They are the only UI layer besides pages that imports from `crate::app`.

pub mod celebration_overlay;
pub mod evasion_popup;
