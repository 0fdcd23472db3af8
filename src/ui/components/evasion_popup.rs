//! Feedback popup shown after each evasion attempt
//!
//! Rose card floating over the upper quarter of the prompt screen.
//! It never takes pointer input, so the buttons underneath keep working.

use iced::widget::{Space, column, container, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Distance of the card from the top edge
const TOP_OFFSET: f32 = 150.0;
/// How far the card slides down while fading in
const SLIDE_DISTANCE: f32 = 24.0;

/// Build the popup layer
pub fn view(locale: Locale, expression: &'static str, opacity: f32) -> Element<'static, Message> {
    if opacity < 0.01 {
        return Space::new().width(0).height(0).into();
    }

    let message = format!("{} {}", locale.get(Key::PopupPleaseAccept), expression);

    let card = container(
        text(message)
            .size(30)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .color(theme::with_alpha(theme::WHITE, opacity)),
    )
    .padding([24, 32])
    .style(move |_theme| theme::popup_card(opacity));

    let slide = (1.0 - opacity) * SLIDE_DISTANCE;

    column![container(card).center_x(Fill)]
        .width(Fill)
        .height(Fill)
        .padding(Padding::new(0.0).top(TOP_OFFSET - slide))
        .into()
}
