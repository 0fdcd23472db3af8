//! Celebration overlay component
//!
//! Modal dialog over the accepted screen with a confetti burst on top.
//! Dismissed by the close button or a click on the backdrop.

use std::time::Instant;

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::app::celebration::CelebrationOverlay;
use crate::i18n::{Key, Locale};
use crate::ui::effects::confetti;
use crate::ui::theme;

const DIALOG_WIDTH: f32 = 440.0;

/// Build the overlay layer
pub fn view(overlay: &CelebrationOverlay, now: Instant, locale: Locale) -> Element<'_, Message> {
    if !overlay.is_visible() {
        return Space::new().width(0).height(0).into();
    }

    let opacity = overlay.opacity();

    let close_btn = button(text("✕").size(18))
        .padding([6, 12])
        .style(theme::ghost_round)
        .on_press(Message::DismissCelebration);

    let heart = text("❤").size(96).color(theme::ROSE_PRIMARY);

    let title = text(locale.get(Key::CelebrationTitle))
        .size(34)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .align_x(iced::alignment::Horizontal::Center)
        .style(|theme| text::Style {
            color: Some(theme::title(theme)),
        });

    let message = text(locale.get(Key::CelebrationMessage))
        .size(22)
        .color(theme::ROSE_ACCENT)
        .align_x(iced::alignment::Horizontal::Center);

    let flourish = row![text("🌹").size(30), text("💕").size(30), text("🌹").size(30)].spacing(8);

    let dialog_content = column![
        row![Space::new().width(Fill), close_btn],
        heart,
        Space::new().height(8),
        title,
        message,
        Space::new().height(8),
        flourish,
        Space::new().height(16),
    ]
    .width(DIALOG_WIDTH)
    .padding(24)
    .spacing(12)
    .align_x(Alignment::Center);

    // Clicks inside the dialog must not reach the backdrop
    let dialog_box = mouse_area(
        container(dialog_content).style(move |theme| theme::dialog(theme, opacity)),
    )
    .on_press(Message::Noop)
    .interaction(Interaction::Idle);

    let backdrop_content = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| theme::backdrop(opacity));

    // Clicking outside the dialog dismisses it
    let event_blocker = mouse_area(backdrop_content)
        .interaction(Interaction::Idle)
        .on_press(Message::DismissCelebration);

    let modal: Element<'_, Message> = opaque(event_blocker);

    match overlay.burst() {
        Some(burst) => stack![modal, confetti::view(burst, now)].into(),
        None => modal,
    }
}
