// src/app/view.rs
//! Application view rendering

use iced::widget::{container, image, stack};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, pages, theme};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;

        let screen: Element<'_, Message> = if self.ui.answered {
            stack![
                pages::accepted::view(locale, self.picture_frame()),
                components::celebration_overlay::view(&self.ui.celebration, self.ui.now, locale),
            ]
            .width(Fill)
            .height(Fill)
            .into()
        } else {
            let prompt = pages::prompt::view(locale, self.ui.evasion.side());

            match self.popup_opacity() {
                Some(opacity) => stack![
                    prompt,
                    components::evasion_popup::view(
                        locale,
                        self.ui.evasion.expression(),
                        opacity,
                    ),
                ]
                .width(Fill)
                .height(Fill)
                .into(),
                None => prompt,
            }
        };

        container(screen)
            .width(Fill)
            .height(Fill)
            .style(theme::background_gradient)
            .into()
    }

    /// Current frame of the accepted-screen picture
    fn picture_frame(&self) -> image::Handle {
        let elapsed = self
            .ui
            .accepted_at
            .map(|at| self.ui.now.saturating_duration_since(at))
            .unwrap_or_default();

        self.ui
            .picture
            .as_ref()
            .and_then(|picture| picture.frame_at(elapsed))
            .cloned()
            .unwrap_or_else(|| image::Handle::from_path(self.core.settings.picture_path()))
    }

    /// Popup opacity while the popup window is open.
    ///
    /// The card goes away with the hide timer, without waiting for the fade out.
    fn popup_opacity(&self) -> Option<f32> {
        self.ui
            .evasion
            .popup_visible()
            .then(|| self.ui.popup_fade.progress())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use iced::widget::image;

    use crate::app::Message;
    use crate::app::update::test_support::app_with_recorder;
    use crate::features::Picture;

    #[test]
    fn popup_layer_follows_attempts() {
        let (mut app, _) = app_with_recorder();
        assert!(app.popup_opacity().is_none());

        let _ = app.update(Message::EvasionAttempt);
        assert!(app.popup_opacity().is_some());
    }

    #[test]
    fn popup_layer_leaves_with_the_hide_timer() {
        let (mut app, _) = app_with_recorder();
        let _ = app.update(Message::EvasionAttempt);
        app.ui.popup_fade.tick(Instant::now() + Duration::from_secs(1));

        let _ = app.update(Message::HidePopup(1));

        // Gone at the hide, not after the fade out
        assert!(app.popup_opacity().is_none());
    }

    #[test]
    fn picture_falls_back_to_the_file_until_decoded() {
        let (app, _) = app_with_recorder();
        let from_file = image::Handle::from_path(app.core.settings.picture_path());

        assert_eq!(app.picture_frame(), from_file);
    }

    #[test]
    fn picture_plays_from_the_moment_of_acceptance() {
        let (mut app, _) = app_with_recorder();
        let picture = animated_picture();
        let _ = app.update(Message::PictureLoaded(Ok(picture.clone())));
        let _ = app.update(Message::Accept);

        let accepted_at = app.ui.accepted_at.expect("accept is timestamped");
        app.ui.now = accepted_at + Duration::from_millis(150);

        assert_eq!(
            Some(app.picture_frame()),
            picture.frame_at(Duration::from_millis(150)).cloned()
        );
        assert_ne!(
            Some(app.picture_frame()),
            picture.frame_at(Duration::ZERO).cloned()
        );
    }

    fn animated_picture() -> Picture {
        use ::image::codecs::gif::GifEncoder;
        use ::image::{Delay, Frame, Rgba, RgbaImage};

        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            let frames = [0u8, 200].map(|shade| {
                Frame::from_parts(
                    RgbaImage::from_pixel(2, 2, Rgba([shade, 0, 0, 255])),
                    0,
                    0,
                    Delay::from_numer_denom_ms(100, 1),
                )
            });
            encoder.encode_frames(frames).unwrap();
        }
        Picture::decode(&bytes).unwrap()
    }
}
