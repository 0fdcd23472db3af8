//! Accepted-screen picture loading

use iced::Task;

use crate::app::{App, Message};

impl App {
    /// Handle picture messages
    pub fn handle_picture(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PictureLoaded(Ok(picture)) => {
                tracing::debug!("Picture decoded with {} frames", picture.frame_count());
                self.ui.picture = Some(picture.clone());
                Some(Task::none())
            }
            Message::PictureLoaded(Err(e)) => {
                // The accepted screen falls back to loading the file directly
                tracing::warn!("Failed to load picture: {}", e);
                Some(Task::none())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, RgbaImage};

    use crate::app::Message;
    use crate::app::update::test_support::app_with_recorder;
    use crate::features::Picture;

    fn still_picture() -> Picture {
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(RgbaImage::new(2, 2))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        Picture::decode(&bytes).unwrap()
    }

    #[test]
    fn loaded_picture_is_kept() {
        let (mut app, _) = app_with_recorder();

        let _ = app.update(Message::PictureLoaded(Ok(still_picture())));

        assert_eq!(app.ui.picture.as_ref().map(Picture::frame_count), Some(1));
    }

    #[test]
    fn failed_load_leaves_screens_working() {
        let (mut app, _) = app_with_recorder();

        let _ = app.update(Message::PictureLoaded(Err("missing".to_string())));
        let _ = app.update(Message::Accept);

        assert!(app.ui.picture.is_none());
        assert!(app.ui.answered);
    }
}
