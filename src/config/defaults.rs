// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Banner slide duration and tick rate
//! - **Chrome**: Status strip and navigation bar geometry
//! - **Gestures**: Swipe and tap recognition distances

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default show/hide animation duration in seconds.
pub const DEFAULT_BANNER_DURATION_SECS: f64 = 0.5;

/// Shortest allowed animation duration in seconds.
pub const MIN_BANNER_DURATION_SECS: f64 = 0.05;

/// Longest allowed animation duration in seconds.
pub const MAX_BANNER_DURATION_SECS: f64 = 5.0;

/// Interval between animation ticks while a banner is moving (~60 Hz).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Chrome Defaults
// ==========================================================================

/// Height of the status strip drawn at the very top of the window.
pub const DEFAULT_STATUS_BAR_HEIGHT: f32 = 20.0;

/// Height of the navigation bar below the status strip.
pub const DEFAULT_NAVIGATION_BAR_HEIGHT: f32 = 44.0;

/// Upper bound for either chrome height.
pub const MAX_CHROME_HEIGHT: f32 = 200.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum upward travel (in logical pixels) recognized as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 24.0;

/// Smallest configurable swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 4.0;

/// Largest configurable swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 200.0;

/// Maximum pointer travel still recognized as a tap.
pub const TAP_TOLERANCE: f32 = 8.0;

const _: () = {
    assert!(MIN_BANNER_DURATION_SECS < DEFAULT_BANNER_DURATION_SECS);
    assert!(DEFAULT_BANNER_DURATION_SECS < MAX_BANNER_DURATION_SECS);
    assert!(MIN_SWIPE_THRESHOLD <= DEFAULT_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);
    // A swipe must travel further than a tap may wobble.
    assert!(TAP_TOLERANCE < DEFAULT_SWIPE_THRESHOLD);
};
