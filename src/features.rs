//! Feature modules - non-UI support code
//!
//! Features should not depend on UI components directly.

pub mod picture;
pub mod settings;

pub use picture::Picture;
pub use settings::Settings;
