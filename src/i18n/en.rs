//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Window
    m.insert(Key::WindowTitlePrompt, "Will you accept my rose?");
    m.insert(Key::WindowTitleAccepted, "Good choice ❤️");

    // Prompt screen
    m.insert(Key::PromptTitle, "Will you accept");
    m.insert(Key::PromptTitleAccent, "my rose?");
    m.insert(Key::PromptYes, "Yes! 🌹");
    m.insert(Key::PromptNo, "No");
    m.insert(Key::PromptHint, "Choose wisely... 🌹💕");
    m.insert(Key::PromptFooter, "Made with ❤ in Rust");
    m.insert(Key::PopupPleaseAccept, "Please accept Yes");

    // Accepted screen
    m.insert(Key::AcceptedTitle, "Good choice ❤️");
    m.insert(Key::AcceptedLoveYou, "Love you 💕");
    m.insert(Key::AcceptedRoseDay, "Happy Rose Day kannu 🌹");

    // Celebration dialog
    m.insert(Key::CelebrationTitle, "🎉 Party Time! 🎉");
    m.insert(
        Key::CelebrationMessage,
        "Thank you for accepting the rose — you are now finally mine",
    );

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
