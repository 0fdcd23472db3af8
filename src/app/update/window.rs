//! Window lifecycle handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    /// Handle window messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                Some(iced::exit())
            }
            _ => None,
        }
    }
}
