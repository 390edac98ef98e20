// SPDX-License-Identifier: MPL-2.0
//! Show/hide transition state.
//!
//! The transition tracks a linear position between `0.0` (hidden) and `1.0`
//! (visible) and exposes an eased progress for rendering. The latest
//! `show`/`hide` call wins: reversing mid-flight restarts from the current
//! position and runs only for the remaining fraction of the duration, so
//! the banner moves at a constant speed.

use std::time::{Duration, Instant};

/// Lifecycle phase of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached but off screen; initial phase.
    Hidden,
    Showing,
    Visible,
    Hiding,
    /// Hide finished; the banner must be dropped by its owner.
    Detached,
}

/// Reported once when a transition runs to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Shown,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct Transition {
    duration: Duration,
    phase: Phase,
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    span: Duration,
}

impl Transition {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            phase: Phase::Hidden,
            from: 0.0,
            to: 0.0,
            started_at: None,
            span: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether a show or hide is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Showing | Phase::Hiding)
    }

    /// Linear position at `now`.
    #[must_use]
    pub fn position(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.span {
            return self.to;
        }

        let t = elapsed.as_secs_f32() / self.span.as_secs_f32();
        self.from + (self.to - self.from) * t
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.started_at
            .is_none_or(|started_at| now.saturating_duration_since(started_at) >= self.span)
    }

    /// Eased progress at `now`, for rendering.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        ease_in_out(self.position(now))
    }

    /// Starts moving towards visible. Returns `false` if nothing changed.
    pub fn show(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Hidden | Phase::Hiding => {
                self.start(1.0, now);
                self.phase = Phase::Showing;
                true
            }
            Phase::Showing | Phase::Visible | Phase::Detached => false,
        }
    }

    /// Starts moving towards hidden. Returns `false` if nothing changed.
    pub fn hide(&mut self, now: Instant) -> bool {
        match self.phase {
            // Hiding a banner that never appeared still detaches it.
            Phase::Hidden | Phase::Showing | Phase::Visible => {
                self.start(0.0, now);
                self.phase = Phase::Hiding;
                true
            }
            Phase::Hiding | Phase::Detached => false,
        }
    }

    /// Settles a finished transition. Each completion is reported once.
    pub fn tick(&mut self, now: Instant) -> Option<Completion> {
        if !self.is_animating() || !self.is_finished(now) {
            return None;
        }

        self.from = self.to;
        self.started_at = None;
        self.span = Duration::ZERO;

        match self.phase {
            Phase::Showing => {
                self.phase = Phase::Visible;
                Some(Completion::Shown)
            }
            Phase::Hiding => {
                self.phase = Phase::Detached;
                Some(Completion::Hidden)
            }
            Phase::Hidden | Phase::Visible | Phase::Detached => None,
        }
    }

    fn start(&mut self, target: f32, now: Instant) {
        let current = self.position(now);
        self.from = current;
        self.to = target;
        self.started_at = Some(now);
        let fraction = f64::from((target - current).abs());
        self.span = Duration::try_from_secs_f64(self.duration.as_secs_f64() * fraction)
            .unwrap_or(self.duration);
    }
}

/// Cubic ease-in-out on `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
