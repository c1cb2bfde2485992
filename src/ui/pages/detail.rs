//! Detail page, a secondary screen reachable only from the drawer

use iced::widget::{Space, column, container, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;

pub fn view() -> Element<'static, Message> {
    let content = column![
        text("Detail Screen").size(32).style(|theme| text::Style {
            color: Some(theme::text_primary(theme))
        }),
        Space::new().height(16),
        container(
            text("Nothing to see here yet.")
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme))
                })
                .width(Fill),
        )
        .width(Fill)
        .padding(20)
        .style(theme::card),
    ]
    .padding(Padding::new(40.0));

    container(content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}
