// SPDX-License-Identifier: MPL-2.0
//! Thin strip at the very top of the window, imitating a device status bar.
//!
//! Banners in [`Position::StatusBar`](crate::ui::banner::Position) mode
//! cover this strip and keep their title below it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming;
use chrono::{DateTime, Local};
use iced::widget::{container, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub now: DateTime<Local>,
    pub tap_count: u32,
    pub height: f32,
}

/// Clock text shown in the strip.
#[must_use]
pub fn clock_label(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let clock = ctx
        .i18n
        .tr_with_args("status-clock", &[("time", clock_label(&ctx.now).as_str())]);
    let taps = ctx
        .i18n
        .tr_with_args("status-taps", &[("count", ctx.tap_count.to_string().as_str())]);

    let row = Row::new()
        .padding([0.0, spacing::XS])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(Text::new(clock).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(taps).size(typography::CAPTION));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height))
        .style(|theme: &Theme| container::Style {
            background: Some(theming::chrome_surface(theme.extended_palette().is_dark).into()),
            text_color: Some(theme.palette().text),
            ..Default::default()
        })
        .into()
}
