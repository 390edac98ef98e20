// SPDX-License-Identifier: MPL-2.0
//! Localization of the demo application's strings.
//!
//! Uses Fluent. Translation files live in `assets/i18n/` and are embedded
//! in the binary.

pub mod fluent;

pub use fluent::I18n;
