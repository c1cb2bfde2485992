// src/app/state.rs
//! Application state definitions

use iced::Size;

use crate::features::Settings;
use crate::ui::animation::DrawerAnimation;
use crate::ui::components::{DrawerMode, Route};
use crate::ui::effects::RadialGradientProgram;

/// Initial window size
pub const WINDOW_WIDTH: f32 = 1100.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Minimum window size (small enough to exercise the overlay drawer mode)
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 540.0;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, window geometry)
    pub core: CoreState,
    /// UI state (active route, drawer, backdrop shader)
    pub ui: UiState,
}

impl App {
    /// Responsive drawer mode, a pure function of the latest window width
    pub fn drawer_mode(&self) -> DrawerMode {
        DrawerMode::for_width(self.core.window_size.width)
    }
}

/// Core infrastructure state
pub struct CoreState {
    pub settings: Settings,
    /// Latest window size, updated on every resize event
    pub window_size: Size,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window_size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        }
    }
}

/// UI view state
pub struct UiState {
    pub active_route: Route,
    /// Target drawer state in overlay mode; ignored while the drawer is permanent
    pub drawer_open: bool,
    /// Drawer open/close transition driving the header offset and fade
    pub drawer_animation: DrawerAnimation,
    /// Gradient backdrop rendered behind the drawer content
    pub backdrop: RadialGradientProgram,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_route: Route::Home,
            drawer_open: false,
            drawer_animation: DrawerAnimation::new(),
            // Green core sitting behind the user header, washing out towards
            // the panel's far corner
            backdrop: RadialGradientProgram::new()
                .with_center([145.0, 100.0])
                .with_radius(650.0)
                .with_colors(
                    [0.18, 0.62, 0.36, 1.0],
                    [1.0, 1.0, 1.0, 0.6],
                    [1.0, 1.0, 1.0, 0.4],
                ),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
