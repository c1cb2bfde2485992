//! Profile page, mirrors the drawer's user header

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

pub fn view() -> Element<'static, Message> {
    let avatar = container(
        svg(svg::Handle::from_memory(crate::ui::icons::AVATAR.as_bytes()))
            .width(40)
            .height(40)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT),
            }),
    )
    .width(80)
    .height(80)
    .center_x(80)
    .center_y(80)
    .style(|theme| container::Style {
        background: Some(iced::Background::Color(theme::surface(theme))),
        border: iced::Border {
            radius: 40.0.into(),
            width: 2.0,
            color: theme::ACCENT,
        },
        ..Default::default()
    });

    let github_link = button(
        row![
            svg(svg::Handle::from_memory(crate::ui::icons::GITHUB.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::LIGHT),
                }),
            Space::new().width(8),
            text("View repositories").size(13).color(theme::LIGHT),
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(8.0).left(14.0).right(14.0)),
    )
    .padding(0)
    .style(|_theme, _status| iced::widget::button::Style {
        background: Some(iced::Background::Color(theme::ACCENT)),
        border: iced::Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .on_press(Message::OpenGithub);

    let card = container(
        column![
            avatar,
            Space::new().height(14),
            text("Vishal Pawar")
                .size(20)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme))
                })
                .font(iced::Font {
                    weight: MEDIUM_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(4),
            text("@vishalpwr").size(13).style(|theme| text::Style {
                color: Some(theme::text_muted(theme))
            }),
            Space::new().height(16),
            github_link,
        ]
        .align_x(Alignment::Center)
        .padding(24),
    )
    .width(Fill)
    .style(theme::card);

    let content = column![
        text("Profile").size(32).style(|theme| text::Style {
            color: Some(theme::text_primary(theme))
        }),
        Space::new().height(16),
        card,
    ]
    .padding(Padding::new(40.0));

    container(content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}
