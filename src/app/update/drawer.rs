// src/app/update/drawer.rs
//! Drawer and window message handlers

use iced::Task;
use iced::keyboard::Key;
use iced::keyboard::key::Named;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::components::DrawerMode;

impl App {
    /// Open the drawer, snapping when reduce-motion is set
    pub(crate) fn open_drawer(&mut self) {
        self.ui.drawer_open = true;
        if self.core.settings.display.reduce_motion {
            self.ui.drawer_animation.snap(true);
        } else {
            self.ui.drawer_animation.open();
        }
    }

    /// Close the drawer, snapping when reduce-motion is set
    pub(crate) fn close_drawer(&mut self) {
        self.ui.drawer_open = false;
        if self.core.settings.display.reduce_motion {
            self.ui.drawer_animation.snap(false);
        } else {
            self.ui.drawer_animation.close();
        }
    }

    /// Handle drawer- and window-related messages
    pub fn handle_drawer(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDrawer => {
                if self.ui.drawer_open {
                    self.close_drawer();
                } else {
                    self.open_drawer();
                }
                Some(Task::none())
            }

            Message::CloseDrawer => {
                if self.ui.drawer_open {
                    self.close_drawer();
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.ui.drawer_animation.tick(std::time::Instant::now());
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                let was_permanent = self.drawer_mode() == DrawerMode::Permanent;
                self.core.window_size = *size;
                // Entering overlay mode starts with the drawer closed
                if was_permanent && self.drawer_mode() == DrawerMode::Front {
                    self.ui.drawer_open = false;
                    self.ui.drawer_animation.snap(false);
                }
                Some(Task::none())
            }

            Message::KeyPressed(key, _modifiers) => {
                if matches!(key, Key::Named(Named::Escape))
                    && self.drawer_mode() == DrawerMode::Front
                    && self.ui.drawer_open
                {
                    self.close_drawer();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;
    use iced::keyboard::{Key, Modifiers, key::Named};

    use crate::app::{App, Message};

    fn narrow_app() -> App {
        let mut app = App::new().0;
        let _ = app.update(Message::WindowResized(Size::new(420.0, 700.0)));
        app
    }

    #[test]
    fn toggle_flips_drawer_target() {
        let mut app = narrow_app();
        assert!(!app.ui.drawer_open);

        let _ = app.update(Message::ToggleDrawer);
        assert!(app.ui.drawer_open);

        let _ = app.update(Message::ToggleDrawer);
        assert!(!app.ui.drawer_open);
    }

    #[test]
    fn escape_closes_open_overlay_drawer() {
        let mut app = narrow_app();
        let _ = app.update(Message::ToggleDrawer);
        assert!(app.ui.drawer_open);

        let _ = app.update(Message::KeyPressed(
            Key::Named(Named::Escape),
            Modifiers::default(),
        ));
        assert!(!app.ui.drawer_open);
    }

    #[test]
    fn shrinking_to_overlay_mode_closes_drawer() {
        let mut app = App::new().0;
        // Open while permanent (state carries over from a previous overlay session)
        app.ui.drawer_open = true;

        let _ = app.update(Message::WindowResized(Size::new(420.0, 700.0)));
        assert!(!app.ui.drawer_open);
        assert_eq!(app.ui.drawer_animation.progress(), 0.0);
    }

    #[test]
    fn reduce_motion_snaps_without_animating() {
        let mut app = narrow_app();
        app.core.settings.display.reduce_motion = true;

        let _ = app.update(Message::ToggleDrawer);
        assert!(app.ui.drawer_open);
        assert!(!app.ui.drawer_animation.is_animating());
        assert_eq!(app.ui.drawer_animation.progress(), 1.0);
    }
}
