// SPDX-License-Identifier: MPL-2.0
//! Banner appearance and behavior description.
//!
//! Every content field is optional: a configuration with nothing set is a
//! valid, empty banner strip.

use super::image::BannerImage;
use crate::config::DEFAULT_BANNER_DURATION_SECS;
use iced::{Color, Font};
use std::time::Duration;

/// Where the banner is anchored in its host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Directly below the navigation bar, sliding out from underneath it.
    #[default]
    NavigationBar,
    /// At the very top of the window; content is pushed below the status strip.
    StatusBar,
}

/// Font face and pixel size for a banner label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub font: Font,
    pub size: f32,
}

impl FontSpec {
    #[must_use]
    pub fn new(font: Font, size: f32) -> Self {
        Self { font, size }
    }

    /// Default font face at the given size.
    #[must_use]
    pub fn sized(size: f32) -> Self {
        Self::new(Font::DEFAULT, size)
    }
}

/// Describes how a banner should look and behave.
///
/// Built once by the caller and handed to [`Banner::new`](super::Banner::new),
/// which keeps its own copy.
#[derive(Debug, Clone)]
pub struct BannerConfiguration {
    /// Length of the show and hide animations.
    pub duration: Duration,
    pub position: Position,

    pub title: Option<String>,
    pub title_font: Option<FontSpec>,
    pub title_color: Option<Color>,

    pub description: Option<String>,
    pub description_font: Option<FontSpec>,
    pub description_color: Option<Color>,

    pub image: Option<BannerImage>,
    /// When set, the icon is drawn as a single-color template of this color.
    pub image_color: Option<Color>,

    /// Banner fill. Falls back to the theme's strong background.
    pub background_color: Option<Color>,
}

impl Default for BannerConfiguration {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs_f64(DEFAULT_BANNER_DURATION_SECS),
            position: Position::default(),
            title: None,
            title_font: None,
            title_color: None,
            description: None,
            description_font: None,
            description_color: None,
            image: None,
            image_color: None,
            background_color: None,
        }
    }
}

impl BannerConfiguration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_title_font(mut self, font: FontSpec) -> Self {
        self.title_font = Some(font);
        self
    }

    #[must_use]
    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_description_font(mut self, font: FontSpec) -> Self {
        self.description_font = Some(font);
        self
    }

    #[must_use]
    pub fn with_description_color(mut self, color: Color) -> Self {
        self.description_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: BannerImage) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_image_color(mut self, color: Color) -> Self {
        self.image_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_empty() {
        let configuration = BannerConfiguration::default();

        assert_eq!(configuration.duration, Duration::from_millis(500));
        assert_eq!(configuration.position, Position::NavigationBar);
        assert!(configuration.title.is_none());
        assert!(configuration.title_font.is_none());
        assert!(configuration.title_color.is_none());
        assert!(configuration.description.is_none());
        assert!(configuration.image.is_none());
        assert!(configuration.image_color.is_none());
        assert!(configuration.background_color.is_none());
    }

    #[test]
    fn builder_sets_fields_independently() {
        let configuration = BannerConfiguration::new()
            .with_title("New Message")
            .with_description_color(Color::BLACK)
            .with_position(Position::StatusBar);

        assert_eq!(configuration.title.as_deref(), Some("New Message"));
        assert!(configuration.description.is_none());
        assert_eq!(configuration.description_color, Some(Color::BLACK));
        assert_eq!(configuration.position, Position::StatusBar);
    }

    #[test]
    fn font_spec_sized_uses_default_face() {
        let spec = FontSpec::sized(18.0);
        assert_eq!(spec.font, Font::DEFAULT);
        assert_eq!(spec.size, 18.0);
    }
}
