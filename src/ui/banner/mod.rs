// SPDX-License-Identifier: MPL-2.0
//! Dismissible banner notifications.
//!
//! A [`Banner`] is plain state owned by the application. The application
//! forwards pointer messages and clock ticks to it and renders it as an
//! overlay with [`Banner::view`]. The banner slides in below the navigation
//! bar or at the top of the window, depending on its [`Position`], and is
//! dismissed by a tap or an upward swipe.
//!
//! # Lifecycle
//!
//! ```text
//! Hidden -> Showing -> Visible -> Hiding -> Detached
//!              ^                     |
//!              +---------------------+   (show while hiding)
//! ```
//!
//! Once [`Banner::tick`] reports [`Event::Detached`] the banner is finished
//! and the owner should drop it.
//!
//! # Example
//!
//! ```ignore
//! let configuration = BannerConfiguration::new()
//!     .with_title("No connection")
//!     .with_position(Position::StatusBar);
//! let mut banner = Banner::new(configuration, &host);
//! banner.set_did_tap_banner(|| tracing::info!("banner tapped"));
//! banner.show();
//! ```

pub mod configuration;
pub mod gesture;
pub mod image;
pub mod placement;
pub mod transition;
mod view;

pub use configuration::{BannerConfiguration, FontSpec, Position};
pub use gesture::{Gesture, GestureTracker};
pub use image::{BannerImage, RasterIcon};
pub use placement::{Host, Placement, Visibility};
pub use transition::{Completion, Phase, Transition};

pub use crate::ui::widgets::slide::Pointer;

use crate::ui::design_tokens::typography;
use iced::font::Weight;
use iced::widget::{image as image_widget, svg};
use iced::{Color, Font};
use std::fmt;
use std::time::Instant;

/// Messages a banner's view produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Pointer(Pointer),
}

/// What happened to a banner after an update or tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The show transition finished.
    Shown,
    /// The banner was tapped; it is now hiding.
    Tapped,
    /// The banner was swiped away; it is now hiding.
    Swiped,
    /// The hide transition finished. Reported once; drop the banner.
    Detached,
}

/// Text element of a banner, resolved from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font: FontSpec,
    /// `None` follows the theme.
    pub color: Option<Color>,
}

impl Label {
    fn new(
        text: Option<&str>,
        font: Option<FontSpec>,
        color: Option<Color>,
        fallback: FontSpec,
    ) -> Self {
        Self {
            text: text.unwrap_or_default().to_owned(),
            font: font.unwrap_or(fallback),
            color,
        }
    }
}

/// How the icon's colors are used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rendering {
    Original,
    /// Only the icon's shape is kept, filled with this color.
    Template(Color),
}

#[derive(Debug, Clone)]
enum IconSource {
    Svg(svg::Handle),
    Raster {
        icon: RasterIcon,
        handle: image_widget::Handle,
    },
}

/// Leading icon of a banner, ready to draw.
#[derive(Debug, Clone)]
pub struct Icon {
    source: IconSource,
    rendering: Rendering,
}

impl Icon {
    fn new(image: &BannerImage, tint: Option<Color>) -> Self {
        let rendering = tint.map_or(Rendering::Original, Rendering::Template);
        let source = match image {
            BannerImage::Svg(handle) => IconSource::Svg(handle.clone()),
            BannerImage::Raster(icon) => {
                let icon = match rendering {
                    Rendering::Template(color) => icon.tinted(color),
                    Rendering::Original => icon.clone(),
                };
                let handle = icon.handle();
                IconSource::Raster { icon, handle }
            }
        };

        Self { source, rendering }
    }

    #[must_use]
    pub fn rendering(&self) -> Rendering {
        self.rendering
    }

    /// Pixels as drawn, for raster icons.
    #[must_use]
    pub fn raster(&self) -> Option<&RasterIcon> {
        match &self.source {
            IconSource::Raster { icon, .. } => Some(icon),
            IconSource::Svg(_) => None,
        }
    }
}

fn default_title_font() -> FontSpec {
    FontSpec::new(
        Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        },
        typography::BANNER_TITLE,
    )
}

fn default_description_font() -> FontSpec {
    FontSpec::sized(typography::BODY)
}

/// A banner notification bound to a host window.
pub struct Banner {
    configuration: BannerConfiguration,
    host: Host,
    placement: Placement,
    title: Label,
    description: Label,
    icon: Option<Icon>,
    transition: Transition,
    gestures: GestureTracker,
    did_tap_banner: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("configuration", &self.configuration)
            .field("host", &self.host)
            .field("placement", &self.placement)
            .field("phase", &self.transition.phase())
            .field("has_icon", &self.icon.is_some())
            .field("did_tap_banner", &self.did_tap_banner.is_some())
            .finish_non_exhaustive()
    }
}

impl Banner {
    /// Creates a hidden banner. Call [`show`](Self::show) to present it.
    #[must_use]
    pub fn new(configuration: BannerConfiguration, host: &Host) -> Self {
        let title = Label::new(
            configuration.title.as_deref(),
            configuration.title_font,
            configuration.title_color,
            default_title_font(),
        );
        let description = Label::new(
            configuration.description.as_deref(),
            configuration.description_font,
            configuration.description_color,
            default_description_font(),
        );
        let icon = configuration
            .image
            .as_ref()
            .map(|image| Icon::new(image, configuration.image_color));
        let placement = Placement::new(configuration.position, host);

        tracing::debug!(
            position = ?configuration.position,
            duration_ms = u64::try_from(configuration.duration.as_millis()).unwrap_or(u64::MAX),
            has_icon = icon.is_some(),
            "banner created"
        );

        Self {
            transition: Transition::new(configuration.duration),
            configuration,
            host: *host,
            placement,
            title,
            description,
            icon,
            gestures: GestureTracker::default(),
            did_tap_banner: None,
        }
    }

    /// Replaces the distance an upward drag must cover to dismiss the banner.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.gestures = GestureTracker::new(threshold);
        self
    }

    /// Registers the closure run when the banner is tapped.
    pub fn set_did_tap_banner(&mut self, callback: impl FnMut() + 'static) {
        self.did_tap_banner = Some(Box::new(callback));
    }

    pub fn show(&mut self) -> bool {
        self.show_at(Instant::now())
    }

    pub fn show_at(&mut self, now: Instant) -> bool {
        let started = self.transition.show(now);
        if started {
            tracing::debug!(position = ?self.configuration.position, "banner showing");
        }
        started
    }

    pub fn hide(&mut self) -> bool {
        self.hide_at(Instant::now())
    }

    pub fn hide_at(&mut self, now: Instant) -> bool {
        let started = self.transition.hide(now);
        if started {
            self.gestures.cancel();
            tracing::debug!(position = ?self.configuration.position, "banner hiding");
        }
        started
    }

    /// Advances the animation clock.
    pub fn tick(&mut self, now: Instant) -> Event {
        match self.transition.tick(now) {
            Some(Completion::Shown) => Event::Shown,
            Some(Completion::Hidden) => {
                tracing::debug!("banner detached");
                Event::Detached
            }
            None => Event::None,
        }
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        let Message::Pointer(pointer) = message;

        let gesture = match pointer {
            Pointer::Pressed(position) => {
                if self.accepts_gestures() {
                    self.gestures.press(position);
                }
                None
            }
            Pointer::Moved(position) => {
                self.gestures.moved(position);
                None
            }
            Pointer::Released(position) => self.gestures.release(Some(position)),
            Pointer::Lost => self.gestures.release(None),
        };

        match gesture {
            Some(Gesture::Tap) => {
                tracing::debug!("banner tapped");
                self.hide_at(now);
                if let Some(callback) = self.did_tap_banner.as_mut() {
                    callback();
                }
                Event::Tapped
            }
            Some(Gesture::SwipeUp) => {
                tracing::debug!("banner swiped away");
                self.hide_at(now);
                Event::Swiped
            }
            None => Event::None,
        }
    }

    /// Follows a host resize.
    pub fn resize(&mut self, host: &Host) {
        self.host = *host;
        self.placement = Placement::new(self.configuration.position, host);
    }

    fn accepts_gestures(&self) -> bool {
        matches!(self.transition.phase(), Phase::Showing | Phase::Visible)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.transition.phase()
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.transition.phase() == Phase::Detached
    }

    /// Whether the owner must keep ticking this banner.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.transition.is_animating()
    }

    /// Eased visibility at `now`, `0.0` hidden to `1.0` visible.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        self.transition.progress(now)
    }

    #[must_use]
    pub fn configuration(&self) -> &BannerConfiguration {
        &self.configuration
    }

    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[must_use]
    pub fn title(&self) -> &Label {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &Label {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Leading edge of the text relative to the banner.
    #[must_use]
    pub fn text_leading(&self) -> f32 {
        placement::text_leading(self.icon.is_some())
    }
}
