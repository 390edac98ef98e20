// SPDX-License-Identifier: MPL-2.0
//! Banner geometry.
//!
//! A banner has two layouts, hidden and visible, and every frame in between
//! is an interpolation driven by the transition progress (`0.0` hidden,
//! `1.0` visible). How the hidden layout looks depends on the anchor:
//!
//! - **Navigation bar**: the banner keeps its top edge at the bottom of the
//!   navigation chrome and collapses to zero visible height, its content
//!   tucked up underneath that edge.
//! - **Status bar**: the banner keeps its full height and is pushed upward
//!   by half the window height, off screen.

use super::configuration::Position;
use crate::ui::design_tokens::{sizing, spacing};
use iced::{Rectangle, Size};

/// Fixed inset around and between banner elements.
pub const INSET: f32 = spacing::BANNER_INSET;

/// Edge length of the leading icon.
pub const ICON_SIZE: f32 = sizing::ICON_LG;

/// Geometry of the container hosting a banner.
///
/// This is a snapshot, not a handle: the banner never keeps its host alive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Host {
    pub width: f32,
    pub height: f32,
    pub status_bar_height: f32,
    pub navigation_bar_height: f32,
}

impl Host {
    #[must_use]
    pub fn new(size: Size, status_bar_height: f32, navigation_bar_height: f32) -> Self {
        Self {
            width: size.width,
            height: size.height,
            status_bar_height,
            navigation_bar_height,
        }
    }

    /// Same chrome, new window size.
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..self
        }
    }

    /// Top of the content region below the status strip and navigation bar.
    #[must_use]
    pub fn safe_area_top(&self) -> f32 {
        self.status_bar_height + self.navigation_bar_height
    }
}

/// The rule toggled between the hidden and visible layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility {
    /// Hidden means zero visible height below the anchor.
    Collapse,
    /// Hidden means the whole banner moved up by `hidden_offset` (negative).
    Offset { hidden_offset: f32 },
}

/// Resolved layout state of a banner within its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top edge of the banner when fully visible, in host coordinates.
    pub anchor_y: f32,
    /// The banner always spans the full host width.
    pub width: f32,
    /// Space above the title so it clears the status strip.
    pub title_top_offset: f32,
    pub visibility: Visibility,
}

impl Placement {
    #[must_use]
    pub fn new(position: Position, host: &Host) -> Self {
        match position {
            Position::NavigationBar => Self {
                anchor_y: host.safe_area_top(),
                width: host.width,
                title_top_offset: 0.0,
                visibility: Visibility::Collapse,
            },
            Position::StatusBar => Self {
                anchor_y: 0.0,
                width: host.width,
                title_top_offset: host.status_bar_height,
                visibility: Visibility::Offset {
                    hidden_offset: -host.height / 2.0,
                },
            },
        }
    }

    /// Height the banner occupies on screen at `progress`.
    #[must_use]
    pub fn visible_height(&self, progress: f32, content_height: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        match self.visibility {
            Visibility::Collapse => content_height * progress,
            Visibility::Offset { .. } => content_height,
        }
    }

    /// Vertical offset of the content relative to the banner's top edge.
    #[must_use]
    pub fn content_offset(&self, progress: f32, content_height: f32) -> f32 {
        let hidden = 1.0 - progress.clamp(0.0, 1.0);
        match self.visibility {
            Visibility::Collapse => -content_height * hidden,
            Visibility::Offset { hidden_offset } => hidden_offset * hidden,
        }
    }

    /// Frame of the banner content in host coordinates at `progress`.
    ///
    /// For the collapsing layout the frame is the visible slice; for the
    /// offset layout it is the full banner, possibly above the window.
    #[must_use]
    pub fn frame(&self, progress: f32, content_height: f32) -> Rectangle {
        let height = self.visible_height(progress, content_height);
        let y = match self.visibility {
            Visibility::Collapse => self.anchor_y,
            Visibility::Offset { .. } => {
                self.anchor_y + self.content_offset(progress, content_height)
            }
        };

        Rectangle {
            x: 0.0,
            y,
            width: self.width,
            height,
        }
    }
}

/// Leading edge of the title and description within the banner.
#[must_use]
pub fn text_leading(has_icon: bool) -> f32 {
    if has_icon {
        INSET + ICON_SIZE + INSET
    } else {
        INSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: f32 = 60.0;

    fn host() -> Host {
        Host::new(Size::new(400.0, 800.0), 20.0, 44.0)
    }

    #[test]
    fn status_bar_title_clears_status_strip() {
        let placement = Placement::new(Position::StatusBar, &host());
        assert_eq!(placement.title_top_offset, 20.0);
    }

    #[test]
    fn navigation_bar_title_has_no_offset() {
        let placement = Placement::new(Position::NavigationBar, &host());
        assert_eq!(placement.title_top_offset, 0.0);
    }

    #[test]
    fn banner_spans_host_width() {
        for position in [Position::NavigationBar, Position::StatusBar] {
            let placement = Placement::new(position, &host());
            assert_eq!(placement.frame(1.0, CONTENT).width, 400.0);
        }
    }

    #[test]
    fn navigation_bar_visible_frame_is_flush_below_chrome() {
        let placement = Placement::new(Position::NavigationBar, &host());
        let frame = placement.frame(1.0, CONTENT);

        assert_eq!(frame.y, host().safe_area_top());
        assert_eq!(frame.height, CONTENT);
        assert_eq!(placement.content_offset(1.0, CONTENT), 0.0);
    }

    #[test]
    fn navigation_bar_hidden_frame_collapses() {
        let placement = Placement::new(Position::NavigationBar, &host());
        let frame = placement.frame(0.0, CONTENT);

        assert_eq!(frame.y, 64.0);
        assert_eq!(frame.height, 0.0);
        assert_eq!(placement.content_offset(0.0, CONTENT), -CONTENT);
    }

    #[test]
    fn status_bar_visible_frame_is_at_window_top() {
        let placement = Placement::new(Position::StatusBar, &host());
        let frame = placement.frame(1.0, CONTENT);

        assert_eq!(frame.y, 0.0);
        assert_eq!(frame.height, CONTENT);
    }

    #[test]
    fn status_bar_hidden_frame_is_half_window_above() {
        let placement = Placement::new(Position::StatusBar, &host());
        let frame = placement.frame(0.0, CONTENT);

        assert_eq!(frame.y, -400.0);
        assert!(frame.y + frame.height < 0.0, "hidden banner must be off screen");
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        let placement = Placement::new(Position::NavigationBar, &host());
        assert_eq!(placement.frame(3.0, CONTENT), placement.frame(1.0, CONTENT));
        assert_eq!(placement.frame(-1.0, CONTENT), placement.frame(0.0, CONTENT));
    }

    #[test]
    fn halfway_interpolates_linearly() {
        let placement = Placement::new(Position::NavigationBar, &host());
        assert_eq!(placement.visible_height(0.5, CONTENT), 30.0);
        assert_eq!(placement.content_offset(0.5, CONTENT), -30.0);
    }

    #[test]
    fn resized_host_moves_hidden_offset() {
        let resized = host().with_size(Size::new(300.0, 500.0));
        let placement = Placement::new(Position::StatusBar, &resized);

        assert_eq!(
            placement.visibility,
            Visibility::Offset {
                hidden_offset: -250.0
            }
        );
        assert_eq!(resized.status_bar_height, 20.0);
    }

    #[test]
    fn text_starts_at_leading_inset_without_icon() {
        assert_eq!(text_leading(false), INSET);
        assert_eq!(text_leading(true), INSET * 2.0 + ICON_SIZE);
    }
}
