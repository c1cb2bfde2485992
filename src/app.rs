//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, UiState};
pub use state::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = crate::features::Settings::load();

        let app = Self {
            core: CoreState::new(settings),
            ui: UiState::new(),
        };

        (app, Task::none())
    }

    /// Application theme driven by the display settings
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title based on the active route
    pub fn title(&self) -> String {
        format!("GlassDrawer - {}", self.ui.active_route.title())
    }

    /// Subscriptions for the drawer transition, window resizes, and keyboard
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Drawer slide animation (~60fps, only while in flight)
        let animation_sub = if subscription_logic::needs_frame_subscription(
            self.ui.drawer_animation.is_animating(),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Window resize drives the responsive drawer mode
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 3. Keyboard events (Escape closes the overlay drawer)
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        iced::Subscription::batch([animation_sub, resize_sub, keyboard_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frame ticks are only needed while the drawer transition is in flight;
    /// an idle app must not request redraws.
    pub fn needs_frame_subscription(drawer_animating: bool) -> bool {
        drawer_animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::Route;

    #[test]
    fn title_tracks_active_route() {
        let mut app = App::new().0;
        assert_eq!(app.title(), "GlassDrawer - Home");

        let _ = app.update(Message::Navigate(Route::Detail));
        assert_eq!(app.title(), "GlassDrawer - Detail Screen");
    }

    #[test]
    fn theme_follows_dark_mode_setting() {
        let mut app = App::new().0;

        app.core.settings.display.dark_mode = true;
        assert_eq!(app.theme(), Theme::Dark);

        app.core.settings.display.dark_mode = false;
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn frame_subscription_only_while_animating() {
        assert!(subscription_logic::needs_frame_subscription(true));
        assert!(!subscription_logic::needs_frame_subscription(false));
    }
}
