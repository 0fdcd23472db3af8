//! Internationalization (i18n) support
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Window
    WindowTitlePrompt,
    WindowTitleAccepted,

    // Prompt screen
    PromptTitle,
    PromptTitleAccent,
    PromptYes,
    PromptNo,
    PromptHint,
    PromptFooter,
    /// Followed by the current expression
    PopupPleaseAccept,

    // Accepted screen
    AcceptedTitle,
    AcceptedLoveYou,
    AcceptedRoseDay,

    // Celebration dialog
    CelebrationTitle,
    CelebrationMessage,
}

impl Key {
    pub const ALL: [Key; 14] = [
        Key::WindowTitlePrompt,
        Key::WindowTitleAccepted,
        Key::PromptTitle,
        Key::PromptTitleAccent,
        Key::PromptYes,
        Key::PromptNo,
        Key::PromptHint,
        Key::PromptFooter,
        Key::PopupPleaseAccept,
        Key::AcceptedTitle,
        Key::AcceptedLoveYou,
        Key::AcceptedRoseDay,
        Key::CelebrationTitle,
        Key::CelebrationMessage,
    ];
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}
