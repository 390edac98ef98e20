// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` provides dismissible slide-in banner notifications for the
//! Iced GUI framework, along with a small demo application.
//!
//! The banner itself lives in [`ui::banner`]; everything else supports the
//! demo window (settings, localization, theming, chrome).

#![doc(html_root_url = "https://docs.rs/iced_banner/0.1.0")]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
