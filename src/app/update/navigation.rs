// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::components::DrawerMode;
use crate::ui::components::user_header::FOLLOW_URL;

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(route) => {
                tracing::info!("Navigate: {:?}", route);
                self.ui.active_route = *route;
                // The overlay drawer closes once a destination is picked;
                // a permanent drawer stays where it is.
                if self.drawer_mode() == DrawerMode::Front && self.ui.drawer_open {
                    self.close_drawer();
                }
                Some(Task::none())
            }

            Message::OpenGithub => {
                tracing::info!("Opening {}", FOLLOW_URL);
                // Fire-and-forget: a missing handler is the platform's concern
                let _ = open::that_detached(FOLLOW_URL);
                Some(Task::none())
            }

            Message::Logout => {
                // Stub: no session exists to tear down
                tracing::info!("Logout");
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use crate::app::{App, Message};
    use crate::ui::components::Route;

    fn app() -> App {
        App::new().0
    }

    #[test]
    fn navigate_activates_each_route() {
        let mut app = app();
        for route in Route::ALL {
            let _ = app.update(Message::Navigate(route));
            assert_eq!(app.ui.active_route, route);
        }
    }

    #[test]
    fn selecting_item_closes_overlay_drawer() {
        let mut app = app();
        // Shrink below the breakpoint so the drawer overlays content
        let _ = app.update(Message::WindowResized(Size::new(420.0, 700.0)));
        let _ = app.update(Message::ToggleDrawer);
        assert!(app.ui.drawer_open);

        let _ = app.update(Message::Navigate(Route::Profile));
        assert!(!app.ui.drawer_open);
        assert_eq!(app.ui.active_route, Route::Profile);
    }

    #[test]
    fn follow_url_targets_the_profile_repositories() {
        use crate::ui::components::user_header::FOLLOW_URL;
        assert_eq!(FOLLOW_URL, "https://github.com/vishalpwr?tab=repositories");
    }

    #[test]
    fn navigation_keeps_permanent_drawer_untouched() {
        let mut app = app();
        // Default window is wide, so the drawer is permanent
        let _ = app.update(Message::Navigate(Route::Settings));
        assert_eq!(app.ui.active_route, Route::Settings);
        assert!(!app.ui.drawer_animation.is_animating());
    }
}
