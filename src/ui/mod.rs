// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`banner`] - Banner notification state and rendering
//! - [`widgets`] - Custom Iced widgets (the banner slide)
//! - [`navbar`] - Navigation bar with theme and language switches
//! - [`status_strip`] - Status strip with a clock
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod banner;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod status_strip;
pub mod theming;
pub mod widgets;
