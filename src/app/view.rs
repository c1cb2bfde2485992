// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, button, column, container, mouse_area, row, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use super::App;
use super::message::Message;
use crate::ui::components::{self, DrawerMode, Route, drawer};
use crate::ui::{pages, theme};

impl App {
    /// Build the layout for the current drawer mode
    pub fn view(&self) -> Element<'_, Message> {
        let mode = self.drawer_mode();
        let page = column![self.top_bar(mode), self.page()].width(Fill).height(Fill);

        match mode {
            DrawerMode::Permanent => {
                // Docked drawer, header sits at rest
                let panel = drawer::view(self.ui.active_route, 1.0, &self.ui.backdrop);
                row![panel, page].width(Fill).height(Fill).into()
            }
            DrawerMode::Front => {
                let progress = self.ui.drawer_animation.progress();

                if progress <= 0.01 {
                    return page.into();
                }

                // Scrim dims the content and catches clicks outside the panel
                let scrim: Element<'_, Message> = mouse_area(
                    container(Space::new().width(Fill).height(Fill))
                        .width(Fill)
                        .height(Fill)
                        .style(drawer::scrim(progress)),
                )
                .on_press(Message::CloseDrawer)
                .into();

                // The panel slides in from the left edge, so only its right
                // portion is visible until the transition settles
                let panel = container(drawer::view(
                    self.ui.active_route,
                    progress,
                    &self.ui.backdrop,
                ))
                .width(progress * components::DRAWER_WIDTH)
                .height(Fill)
                .align_x(Alignment::End)
                .clip(true);

                stack![page, scrim, panel].width(Fill).height(Fill).into()
            }
        }
    }

    /// Status-bar green header above the page content
    fn top_bar(&self, mode: DrawerMode) -> Element<'_, Message> {
        let menu_button: Element<'_, Message> = if mode == DrawerMode::Front {
            button(
                svg(svg::Handle::from_memory(crate::ui::icons::MENU.as_bytes()))
                    .width(22)
                    .height(22)
                    .style(|_theme, _status| svg::Style {
                        color: Some(theme::LIGHT),
                    }),
            )
            .padding(8)
            .style(|_theme, _status| iced::widget::button::Style {
                background: None,
                ..Default::default()
            })
            .on_press(Message::ToggleDrawer)
            .into()
        } else {
            Space::new().width(8).into()
        };

        container(
            row![
                menu_button,
                Space::new().width(10),
                text(self.ui.active_route.title())
                    .size(18)
                    .color(theme::LIGHT)
                    .font(iced::Font {
                        weight: theme::MEDIUM_WEIGHT,
                        ..Default::default()
                    }),
            ]
            .align_y(Alignment::Center)
            .padding(Padding::new(0.0).left(12.0)),
        )
        .width(Fill)
        .height(56)
        .align_y(Alignment::Center)
        .style(theme::top_bar)
        .into()
    }

    fn page(&self) -> Element<'_, Message> {
        match self.ui.active_route {
            Route::Home => pages::home::view(),
            Route::Profile => pages::profile::view(),
            Route::Settings => pages::settings::view(&self.core.settings),
            Route::Detail => pages::detail::view(),
        }
    }
}
