//! Drawer navigation panel
//! Gradient-backed menu with the user header, route list, and logout action

use iced::widget::{Space, button, column, container, row, shader, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::animation;
use crate::ui::components::user_header;
use crate::ui::effects::RadialGradientProgram;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Window widths at or above this keep the drawer permanently docked
pub const PERMANENT_BREAKPOINT: f32 = 700.0;

/// Fixed width of the drawer panel
pub const DRAWER_WIDTH: f32 = 280.0;

/// How the drawer is presented at the current window size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerMode {
    /// Docked next to the content, always visible
    Permanent,
    /// Slides in over the content behind a scrim
    Front,
}

impl DrawerMode {
    pub fn for_width(width: f32) -> Self {
        if width >= PERMANENT_BREAKPOINT {
            DrawerMode::Permanent
        } else {
            DrawerMode::Front
        }
    }
}

/// Navigable screens, in drawer order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Profile,
    Settings,
    Detail,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Profile, Route::Settings, Route::Detail];

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Profile => "Profile",
            Route::Settings => "Settings",
            Route::Detail => "Detail Screen",
        }
    }

    pub fn icon_svg(&self) -> &'static str {
        match self {
            Route::Home => crate::ui::icons::HOME,
            Route::Profile => crate::ui::icons::USER,
            Route::Settings => crate::ui::icons::SETTINGS,
            Route::Detail => crate::ui::icons::LAYERS,
        }
    }

    /// Render this route's icon at the given tint and size
    pub fn icon(&self, color: iced::Color, size: u16) -> Element<'static, Message> {
        svg(svg::Handle::from_memory(self.icon_svg().as_bytes()))
            .width(f32::from(size))
            .height(f32::from(size))
            .style(move |_theme, _status| svg::Style { color: Some(color) })
            .into()
    }
}

/// Build the drawer panel
///
/// `progress` is the slide progress in [0, 1]; the user header translates and
/// fades with it. In permanent mode callers pass 1.0 so the header sits still.
pub fn view<'a>(
    active: Route,
    progress: f32,
    backdrop: &'a RadialGradientProgram,
) -> Element<'a, Message> {
    let header = user_header::view(
        animation::header_offset(progress),
        animation::header_opacity(progress),
    );

    let nav_menu = column(Route::ALL.into_iter().map(|route| {
        let is_active = route == active;
        let color = if is_active {
            theme::ACCENT
        } else {
            theme::DRAWER_TEXT
        };
        drawer_item(
            route.icon(color, 20),
            route.title(),
            is_active,
            Message::Navigate(route),
        )
    }))
    .spacing(4);

    let logout_icon: Element<'static, Message> =
        svg(svg::Handle::from_memory(crate::ui::icons::LOG_OUT.as_bytes()))
            .width(20)
            .height(20)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::DRAWER_TEXT),
            })
            .into();
    let logout = drawer_item(logout_icon, "Logout", false, Message::Logout);

    let content = column![
        header,
        Space::new().height(12),
        nav_menu,
        Space::new().height(Fill),
        logout,
    ]
    .padding(Padding::new(12.0).top(24.0).bottom(20.0))
    .width(DRAWER_WIDTH)
    .height(Fill);

    // The gradient fades in with the panel in overlay mode
    let backdrop = backdrop.clone().with_opacity(progress);

    stack![
        shader(backdrop).width(DRAWER_WIDTH).height(Fill),
        content,
    ]
    .width(DRAWER_WIDTH)
    .height(Fill)
    .into()
}

/// One row in the drawer list, active rows get the accent treatment
fn drawer_item(
    icon: Element<'static, Message>,
    label: &'static str,
    is_active: bool,
    on_press: Message,
) -> Element<'static, Message> {
    let label_color = if is_active {
        theme::ACCENT
    } else {
        theme::DRAWER_TEXT
    };

    let label_text = text(label)
        .size(14)
        .color(label_color)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        });

    let content = row![icon, Space::new().width(14), label_text]
        .align_y(Alignment::Center)
        .padding(Padding::new(12.0).left(14.0).right(14.0));

    button(content)
        .width(Fill)
        .padding(0)
        .style(move |_theme, _status| iced::widget::button::Style {
            background: Some(iced::Background::Color(theme::fade(
                theme::ACCENT,
                if is_active { 0.12 } else { 0.0 },
            ))),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            text_color: label_color,
            ..Default::default()
        })
        .on_press(on_press)
        .into()
}

/// Scrim container style behind the overlay drawer
pub fn scrim(opacity: f32) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(iced::Background::Color(theme::fade(
            iced::Color::BLACK,
            0.32 * opacity,
        ))),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_selects_mode() {
        assert_eq!(DrawerMode::for_width(699.9), DrawerMode::Front);
        assert_eq!(DrawerMode::for_width(700.0), DrawerMode::Permanent);
        assert_eq!(DrawerMode::for_width(1100.0), DrawerMode::Permanent);
        assert_eq!(DrawerMode::for_width(360.0), DrawerMode::Front);
    }

    #[test]
    fn route_order_and_titles() {
        let titles: Vec<&str> = Route::ALL.iter().map(|r| r.title()).collect();
        assert_eq!(titles, ["Home", "Profile", "Settings", "Detail Screen"]);
    }
}
