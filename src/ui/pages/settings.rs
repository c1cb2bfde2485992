//! Settings page
//! Display toggles that persist across restarts

use iced::widget::{Space, column, container, row, text, toggler};
use iced::{Alignment, Background, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Settings;
use crate::ui::theme;

pub fn view(settings: &Settings) -> Element<'static, Message> {
    let display_section = container(
        column![
            setting_row(
                "Dark mode",
                Some("Switch the content area to a dark palette"),
                toggler(settings.display.dark_mode)
                    .on_toggle(Message::UpdateDarkMode)
                    .size(24)
                    .into(),
            ),
            divider(),
            setting_row(
                "Reduce motion",
                Some("Snap the drawer open and closed instead of sliding"),
                toggler(settings.display.reduce_motion)
                    .on_toggle(Message::UpdateReduceMotion)
                    .size(24)
                    .into(),
            ),
        ]
        .padding(Padding::new(8.0).left(20.0).right(20.0)),
    )
    .width(Fill)
    .style(theme::card);

    let content = column![
        text("Settings").size(32).style(|theme| text::Style {
            color: Some(theme::text_primary(theme))
        }),
        Space::new().height(16),
        display_section,
    ]
    .padding(Padding::new(40.0));

    container(content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}

fn setting_row<'a>(
    label: &str,
    description: Option<&str>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let label_text = label.to_string();
    let desc_text = description.map(|d| d.to_string());

    let label_section: Element<'a, Message> = if let Some(desc) = desc_text {
        column![
            text(label_text).size(15).style(|theme| text::Style {
                color: Some(theme::text_primary(theme))
            }),
            text(desc).size(12).style(|theme| text::Style {
                color: Some(theme::text_muted(theme))
            }),
        ]
        .spacing(4)
        .into()
    } else {
        column![text(label_text).size(15).style(|theme| text::Style {
            color: Some(theme::text_primary(theme))
        }),]
        .into()
    };

    container(
        row![label_section, Space::new().width(Fill), control,]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .padding([16, 0])
    .into()
}

fn divider() -> Element<'static, Message> {
    container(Space::new().width(Fill).height(1))
        .style(|theme| container::Style {
            background: Some(Background::Color(theme::border_color(theme))),
            ..Default::default()
        })
        .width(Fill)
        .into()
}
