// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack: chrome and demo buttons at the bottom, the active
//! banner (if any) layered above them.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::banner::{Banner, Host, Position};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::status_strip::{self, ViewContext as StatusViewContext};
use crate::ui::theming::ThemeMode;
use chrono::{DateTime, Local};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Stack, Text},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub host: Host,
    pub theme_mode: ThemeMode,
    pub banner: Option<&'a Banner>,
    pub now: Instant,
    pub clock: DateTime<Local>,
    pub tap_count: u32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let status = status_strip::view(StatusViewContext {
        i18n: ctx.i18n,
        now: ctx.clock,
        tap_count: ctx.tap_count,
        height: ctx.host.status_bar_height,
    });

    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        height: ctx.host.navigation_bar_height,
    })
    .map(Message::Navbar);

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(status)
        .push(navbar)
        .push(demo_buttons(ctx.i18n));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);
    if let Some(banner) = ctx.banner {
        layers = layers.push(banner.view(ctx.now).map(Message::Banner));
    }

    layers.into()
}

fn demo_buttons(i18n: &I18n) -> Element<'_, Message> {
    let buttons = [
        ("button-show-navigation", Message::ShowBanner(Position::NavigationBar)),
        ("button-hide-navigation", Message::HideBanner(Position::NavigationBar)),
        ("button-show-status", Message::ShowBanner(Position::StatusBar)),
        ("button-hide-status", Message::HideBanner(Position::StatusBar)),
    ];

    let column = buttons.into_iter().fold(
        Column::new().spacing(spacing::XS).align_x(Horizontal::Center),
        |column, (key, message)| {
            column.push(
                button(
                    Text::new(i18n.tr(key))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fixed(sizing::BUTTON_WIDTH))
                .padding([spacing::XS, spacing::MD])
                .on_press(message),
            )
        },
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
