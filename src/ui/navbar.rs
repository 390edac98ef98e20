// SPDX-License-Identifier: MPL-2.0
//! Navigation bar of the demo window.
//!
//! Shows the window title and two controls: a theme mode switch and a
//! language switch. Banners in [`Position::NavigationBar`](crate::ui::banner::Position)
//! mode slide out from underneath this bar.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::{self, ThemeMode};
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub height: f32,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CycleTheme,
    CycleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ThemeModeChanged(ThemeMode),
    NextLanguage,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, theme_mode: ThemeMode) -> Event {
    match message {
        Message::CycleTheme => Event::ThemeModeChanged(next_theme_mode(theme_mode)),
        Message::CycleLanguage => Event::NextLanguage,
    }
}

fn next_theme_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => ThemeMode::Light,
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::System,
    }
}

fn theme_label_key(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "navbar-theme-light",
        ThemeMode::Dark => "navbar-theme-dark",
        ThemeMode::System => "navbar-theme-system",
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("navbar-title")).size(typography::TITLE_MD);

    let theme_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::themed(icons::theme(), sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr(theme_label_key(ctx.theme_mode))).size(typography::BODY)),
    )
    .on_press(Message::CycleTheme)
    .padding([spacing::XXS, spacing::XS])
    .style(bar_button_style);

    let language = ctx.i18n.current_locale().to_string();
    let language_button = button(
        Text::new(ctx.i18n.tr_with_args("navbar-language", &[("lang", language.as_str())]))
            .size(typography::BODY),
    )
    .on_press(Message::CycleLanguage)
    .padding([spacing::XXS, spacing::XS])
    .style(bar_button_style);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::SM])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(theme_button)
        .push(language_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height))
        .style(|theme: &Theme| container::Style {
            background: Some(theming::chrome_surface(theme.extended_palette().is_dark).into()),
            border: Border {
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
                ..Default::default()
            },
            text_color: Some(theme.palette().text),
            ..Default::default()
        })
        .into()
}

/// Style function for navbar buttons.
fn bar_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let rounded = Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: rounded,
            ..Default::default()
        },
    }
}
