// SPDX-License-Identifier: MPL-2.0
//! Banner rendering.
//!
//! Layout: `[icon] [title / description]`, full host width, with the title
//! pushed down by the placement's title offset.

use super::placement::{ICON_SIZE, INSET};
use super::{Banner, Icon, IconSource, Label, Message, Rendering};
use crate::ui::design_tokens::shadow;
use crate::ui::theming;
use crate::ui::widgets::Slide;
use iced::widget::{container, svg, text, Column, Container, Image, Row, Svg, Text};
use iced::{alignment, Background, Color, Element, Length, Padding, Theme};
use std::time::Instant;

impl Banner {
    /// Renders the banner as a full-window overlay layer.
    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let text_column = Column::new()
            .spacing(INSET)
            .width(Length::Fill)
            .push(label(&self.title))
            .push(label(&self.description));

        let mut row = Row::new()
            .spacing(INSET)
            .align_y(alignment::Vertical::Center)
            .padding(Padding {
                top: self.placement.title_top_offset,
                right: INSET,
                bottom: INSET,
                left: INSET,
            });
        if let Some(icon) = &self.icon {
            row = row.push(icon_view(icon));
        }
        row = row.push(text_column);

        let background = self.configuration.background_color;
        let surface = Container::new(row)
            .width(Length::Fill)
            .style(move |theme: &Theme| surface_style(theme, background));

        let slide = Slide::new(surface, self.placement, self.progress(now))
            .on_pointer(Message::Pointer);

        Container::new(slide)
            .width(Length::Fill)
            .padding(Padding {
                top: self.placement.anchor_y,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            })
            .into()
    }
}

fn label(label: &Label) -> Text<'_> {
    let color = label.color;
    Text::new(label.text.as_str())
        .font(label.font.font)
        .size(label.font.size)
        .width(Length::Fill)
        .wrapping(text::Wrapping::Word)
        .style(move |theme: &Theme| text::Style {
            color: Some(color.unwrap_or_else(|| theming::banner_text(theme))),
        })
}

fn icon_view(icon: &Icon) -> Element<'_, Message> {
    match &icon.source {
        IconSource::Svg(handle) => {
            let widget = Svg::new(handle.clone())
                .width(ICON_SIZE)
                .height(ICON_SIZE);
            match icon.rendering {
                Rendering::Template(color) => widget
                    .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
                    .into(),
                Rendering::Original => widget.into(),
            }
        }
        // Raster templates are tinted when the banner is built.
        IconSource::Raster { handle, .. } => Image::new(handle.clone())
            .width(ICON_SIZE)
            .height(ICON_SIZE)
            .into(),
    }
}

fn surface_style(theme: &Theme, background: Option<Color>) -> container::Style {
    let color = background.unwrap_or_else(|| theming::banner_surface(theme));

    container::Style {
        background: Some(Background::Color(color)),
        shadow: shadow::SM,
        text_color: Some(theming::banner_text(theme)),
        ..Default::default()
    }
}
