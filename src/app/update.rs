//! Message update handlers - thin dispatcher delegating to submodules

mod celebration;
mod picture;
mod prompt;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_prompt(&message) {
            return task;
        }
        if let Some(task) = self.handle_celebration(&message) {
            return task;
        }
        if let Some(task) = self.handle_picture(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
