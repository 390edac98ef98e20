// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::banner::{self, Position};
use crate::ui::navbar;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Present the demo banner for this anchor, replacing any current one.
    ShowBanner(Position),
    /// Hide the current banner, if it uses this anchor.
    HideBanner(Position),
    Banner(banner::Message),
    Navbar(navbar::Message),
    /// Animation and clock tick.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_BANNER_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional banner animation duration, overriding the config file for
    /// this run only.
    pub duration_secs: Option<f64>,
}
