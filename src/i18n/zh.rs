//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Window
    m.insert(Key::WindowTitlePrompt, "愿意收下我的玫瑰吗？");
    m.insert(Key::WindowTitleAccepted, "明智的选择 ❤️");

    // Prompt screen
    m.insert(Key::PromptTitle, "你愿意收下");
    m.insert(Key::PromptTitleAccent, "我的玫瑰吗？");
    m.insert(Key::PromptYes, "愿意！🌹");
    m.insert(Key::PromptNo, "不要");
    m.insert(Key::PromptHint, "想好了再选哦... 🌹💕");
    m.insert(Key::PromptFooter, "用 ❤ 和 Rust 制作");
    m.insert(Key::PopupPleaseAccept, "请选择愿意");

    // Accepted screen
    m.insert(Key::AcceptedTitle, "明智的选择 ❤️");
    m.insert(Key::AcceptedLoveYou, "爱你 💕");
    m.insert(Key::AcceptedRoseDay, "玫瑰节快乐，宝贝 🌹");

    // Celebration dialog
    m.insert(Key::CelebrationTitle, "🎉 庆祝时间！🎉");
    m.insert(Key::CelebrationMessage, "谢谢你收下这朵玫瑰，你终于是我的了");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
