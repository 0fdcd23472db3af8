//! Pages module
//! The two mutually exclusive full-window screens

pub mod accepted;
pub mod prompt;
