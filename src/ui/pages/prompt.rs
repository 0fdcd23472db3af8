//! Prompt screen: "Will you accept my rose?" with Yes and the evasive No

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, row, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::app::evasion::Side;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Width of the area both buttons live in
const BUTTON_AREA_WIDTH: f32 = 640.0;
const BUTTON_AREA_HEIGHT: f32 = 128.0;
/// Inset of the left and right slots from the area edges
const SLOT_INSET: f32 = 48.0;

fn bold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    }
}

/// Build the prompt screen
pub fn view(locale: Locale, no_side: Side) -> Element<'static, Message> {
    let roses = row![
        text("🌹").size(56),
        text("🌹").size(68),
        text("🌹").size(56),
    ]
    .spacing(12)
    .align_y(Alignment::End);

    let title = column![
        text(locale.get(Key::PromptTitle))
            .size(64)
            .font(bold())
            .style(|theme| text::Style {
                color: Some(theme::title(theme)),
            }),
        text(locale.get(Key::PromptTitleAccent))
            .size(64)
            .font(bold())
            .color(theme::ROSE_PRIMARY),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let hint = text(locale.get(Key::PromptHint))
        .size(20)
        .font(iced::Font {
            style: iced::font::Style::Italic,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::with_alpha(theme::text_muted(theme), 0.7)),
        });

    let content = column![
        roses,
        Space::new().height(24),
        title,
        Space::new().height(48),
        button_area(locale, no_side),
        Space::new().height(48),
        hint,
    ]
    .align_x(Alignment::Center);

    let footer = text(locale.get(Key::PromptFooter))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    column![
        Space::new().height(Fill),
        content,
        Space::new().height(Fill),
        footer,
        Space::new().height(24),
    ]
    .width(Fill)
    .height(Fill)
    .align_x(Alignment::Center)
    .into()
}

/// Yes sits in the left slot; No sits in whichever slot it dodged to.
///
/// In the left slot No is drawn over Yes.
fn button_area(locale: Locale, no_side: Side) -> Element<'static, Message> {
    let yes = button(text(locale.get(Key::PromptYes)).size(24).font(bold()))
        .padding([24, 56])
        .style(theme::primary_pill)
        .on_press(Message::Accept);

    // No press action: the control can never be activated, only dodge
    let no = mouse_area(
        container(text(locale.get(Key::PromptNo)).size(24).font(bold()))
            .padding([24, 56])
            .style(theme::decoy_button),
    )
    .on_enter(Message::EvasionAttempt)
    .on_press(Message::EvasionAttempt)
    .interaction(Interaction::Pointer);

    let yes_layer = slot(yes.into(), Side::Left);
    let no_layer = slot(no.into(), no_side);

    container(stack![yes_layer, no_layer])
        .width(BUTTON_AREA_WIDTH)
        .height(BUTTON_AREA_HEIGHT)
        .into()
}

fn slot(content: Element<'static, Message>, side: Side) -> Element<'static, Message> {
    let align = match side {
        Side::Left => iced::alignment::Horizontal::Left,
        Side::Right => iced::alignment::Horizontal::Right,
    };
    container(content)
        .width(Fill)
        .height(Fill)
        .align_x(align)
        .align_y(iced::alignment::Vertical::Center)
        .padding(Padding::new(0.0).left(SLOT_INSET).right(SLOT_INSET))
        .into()
}
