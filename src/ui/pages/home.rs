//! Home page, the default route

use iced::widget::{Space, column, container, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;

pub fn view() -> Element<'static, Message> {
    let content = column![
        text("Home").size(32).style(|theme| text::Style {
            color: Some(theme::text_primary(theme))
        }),
        Space::new().height(16),
        container(
            column![
                text("Welcome back").size(18).style(|theme| text::Style {
                    color: Some(theme::text_primary(theme))
                }),
                Space::new().height(6),
                text("Pick a destination from the drawer to get started.")
                    .size(14)
                    .style(|theme| text::Style {
                        color: Some(theme::text_secondary(theme))
                    }),
            ]
            .padding(20),
        )
        .width(Fill)
        .style(theme::card),
    ]
    .padding(Padding::new(40.0));

    container(content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}
