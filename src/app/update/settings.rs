//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Persist the current settings on the background executor
    fn persist_settings(&self) -> Task<Message> {
        let settings = self.core.settings.clone();
        Task::perform(async move { settings.save() }, Message::SettingsSaved)
    }

    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                Some(self.persist_settings())
            }

            Message::UpdateReduceMotion(enabled) => {
                self.core.settings.display.reduce_motion = *enabled;
                Some(self.persist_settings())
            }

            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Message};

    #[test]
    fn toggles_update_display_settings() {
        let mut app = App::new().0;

        let dark = !app.core.settings.display.dark_mode;
        let _ = app.update(Message::UpdateDarkMode(dark));
        assert_eq!(app.core.settings.display.dark_mode, dark);

        let _ = app.update(Message::UpdateReduceMotion(true));
        assert!(app.core.settings.display.reduce_motion);
    }
}
