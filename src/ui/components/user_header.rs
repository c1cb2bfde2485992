//! User header at the top of the drawer
//! Slides in from the left and fades up with the drawer's open progress

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Padding};

use crate::app::Message;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Profile link opened by the follow button
pub const FOLLOW_URL: &str = "https://github.com/vishalpwr?tab=repositories";

const DISPLAY_NAME: &str = "Vishal Pawar";
const HANDLE: &str = "@vishalpwr";

/// Inner width of the header content, drawer width minus panel padding
const HEADER_WIDTH: f32 = 256.0;

/// Build the header card
///
/// `offset` is the horizontal translation in [-100, 0] and `opacity` the
/// fade in [0, 1], both derived from the slide progress.
pub fn view(offset: f32, opacity: f32) -> Element<'static, Message> {
    let avatar = container(
        svg(svg::Handle::from_memory(crate::ui::icons::AVATAR.as_bytes()))
            .width(34)
            .height(34)
            .style(move |_theme, _status| svg::Style {
                color: Some(theme::fade(theme::ACCENT, opacity)),
            }),
    )
    .width(64)
    .height(64)
    .center_x(64)
    .center_y(64)
    .style(move |_theme| container::Style {
        background: Some(iced::Background::Color(theme::fade(theme::LIGHT, opacity))),
        border: iced::Border {
            radius: 32.0.into(),
            width: 2.0,
            color: theme::fade(theme::ACCENT, opacity),
        },
        ..Default::default()
    });

    let name = text(DISPLAY_NAME)
        .size(16)
        .color(theme::fade(theme::DRAWER_TEXT, opacity))
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        });

    let handle = text(HANDLE)
        .size(12)
        .color(theme::fade(theme::DRAWER_TEXT, 0.7 * opacity));

    let follow = button(
        row![
            svg(svg::Handle::from_memory(crate::ui::icons::GITHUB.as_bytes()))
                .width(14)
                .height(14)
                .style(move |_theme, _status| svg::Style {
                    color: Some(theme::fade(theme::LIGHT, opacity)),
                }),
            Space::new().width(8),
            text("vishalpwr")
                .size(12)
                .color(theme::fade(theme::LIGHT, opacity)),
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(6.0).left(12.0).right(12.0)),
    )
    .padding(0)
    .style(move |_theme, _status| iced::widget::button::Style {
        background: Some(iced::Background::Color(theme::fade(theme::ACCENT, opacity))),
        border: iced::Border {
            radius: 14.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .on_press(Message::OpenGithub);

    let card = button(
        column![
            avatar,
            Space::new().height(10),
            name,
            Space::new().height(2),
            handle,
            Space::new().height(12),
            follow,
        ]
        .align_x(Alignment::Start)
        .padding(Padding::new(8.0)),
    )
    .width(HEADER_WIDTH)
    .padding(0)
    .style(|_theme, _status| iced::widget::button::Style::default())
    .on_press(Message::Navigate(crate::ui::components::Route::Profile));

    // No transform support in the layout model, so the slide is done by
    // right-aligning the fixed-width card next to a spacer inside a clipped
    // container. Growing the spacer pushes the card off the left edge.
    container(
        row![card, Space::new().width(-offset.clamp(-100.0, 0.0))].align_y(Alignment::Start),
    )
    .width(HEADER_WIDTH)
    .align_x(Alignment::End)
    .clip(true)
    .into()
}
