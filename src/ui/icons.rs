// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are black line art so they work as templates: banners recolor them
//! through [`BannerConfiguration::with_image_color`](crate::ui::banner::BannerConfiguration::with_image_color),
//! and the navbar tints them with the theme's text color.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Defines an icon accessor with a handle cached on first use.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(info, "info.svg", "Info icon: circled lowercase i.");
define_icon!(warning, "warning.svg", "Warning icon: triangle with exclamation mark.");
define_icon!(message, "message.svg", "Message icon: speech bubble.");
define_icon!(theme, "theme.svg", "Theme icon: half-filled circle.");

/// Square icon widget tinted with the theme's text color.
pub fn themed<'a>(handle: Handle, size: f32) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(|theme: &Theme, _status| svg::Style {
            color: Some(theme.palette().text),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_cached() {
        assert_eq!(info().id(), info().id());
        assert_ne!(info().id(), warning().id());
        assert_ne!(theme().id(), info().id());
    }

    #[test]
    fn icon_data_is_svg() {
        for data in [
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/info.svg")),
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/warning.svg")),
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/message.svg")),
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/theme.svg")),
        ] {
            assert!(data.trim_start().starts_with("<svg"));
        }
    }
}
