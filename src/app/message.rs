//! Application messages

use iced::Size;
use iced::keyboard::{Key, Modifiers};

use crate::features::SettingsError;
use crate::ui::components::Route;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Navigation ============
    /// Drawer menu item selected
    Navigate(Route),
    /// Open the user's GitHub profile in the platform browser
    OpenGithub,
    /// Logout action from the drawer footer
    Logout,

    // ============ Drawer ============
    /// Menu button pressed in overlay mode
    ToggleDrawer,
    /// Scrim click or Escape while the overlay drawer is open
    CloseDrawer,
    /// Animation frame tick while the drawer transition is in flight
    AnimationTick,

    // ============ Window ============
    /// Window resized (drives the responsive drawer mode)
    WindowResized(Size),
    /// Keyboard key pressed
    KeyPressed(Key, Modifiers),

    // ============ Settings ============
    /// Update dark mode setting
    UpdateDarkMode(bool),
    /// Update reduce-motion setting
    UpdateReduceMotion(bool),
    /// Settings persisted to disk
    SettingsSaved(Result<(), SettingsError>),
}
