//! Accepted screen shown for the rest of the session after Yes

use iced::widget::{Space, column, container, image, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

const PICTURE_SIZE: f32 = 420.0;

/// Build the accepted screen
pub fn view(locale: Locale, picture: image::Handle) -> Element<'static, Message> {
    let heart = text("❤").size(80).color(theme::ROSE_PRIMARY);

    let title = text(locale.get(Key::AcceptedTitle))
        .size(56)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::title(theme)),
        });

    // Missing files simply render nothing inside the frame
    let picture = container(
        image(picture)
            .width(PICTURE_SIZE)
            .height(PICTURE_SIZE),
    )
    .padding(4)
    .style(theme::picture_frame);

    let content = column![heart, title, Space::new().height(16), picture]
        .spacing(16)
        .align_x(Alignment::Center);

    let banner = container(
        column![
            text(locale.get(Key::AcceptedLoveYou))
                .size(30)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                }),
            text(locale.get(Key::AcceptedRoseDay)).size(24),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(24)
    .center_x(Fill)
    .style(theme::banner);

    column![
        Space::new().height(Fill),
        content,
        Space::new().height(Fill),
        banner,
    ]
    .width(Fill)
    .height(Fill)
    .align_x(Alignment::Center)
    .into()
}
