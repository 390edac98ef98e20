// SPDX-License-Identifier: MPL-2.0
//! Tap and swipe-up recognition over a single pointer.

use crate::config::{DEFAULT_SWIPE_THRESHOLD, TAP_TOLERANCE};
use iced::Point;

/// A recognized pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    SwipeUp,
}

/// Follows one press-move-release sequence.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    swipe_threshold: f32,
    origin: Option<Point>,
    last: Option<Point>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl GestureTracker {
    #[must_use]
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe_threshold,
            origin: None,
            last: None,
        }
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    pub fn press(&mut self, position: Point) {
        self.origin = Some(position);
        self.last = Some(position);
    }

    pub fn moved(&mut self, position: Point) {
        if self.origin.is_some() {
            self.last = Some(position);
        }
    }

    /// Ends the sequence. A release without a known position falls back to
    /// the last reported one.
    pub fn release(&mut self, position: Option<Point>) -> Option<Gesture> {
        let origin = self.origin.take()?;
        let end = position.or(self.last.take())?;
        self.last = None;
        classify(origin, end, self.swipe_threshold)
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.last = None;
    }
}

/// Classifies a pointer travel from `origin` to `end`.
#[must_use]
pub fn classify(origin: Point, end: Point, swipe_threshold: f32) -> Option<Gesture> {
    let dx = end.x - origin.x;
    let dy = end.y - origin.y;

    if dx.hypot(dy) <= TAP_TOLERANCE {
        return Some(Gesture::Tap);
    }

    let upward = -dy;
    if upward >= swipe_threshold && upward > dx.abs() {
        return Some(Gesture::SwipeUp);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_travel_is_a_tap() {
        let gesture = classify(Point::new(50.0, 50.0), Point::new(53.0, 52.0), 24.0);
        assert_eq!(gesture, Some(Gesture::Tap));
    }

    #[test]
    fn long_upward_travel_is_a_swipe() {
        let gesture = classify(Point::new(50.0, 50.0), Point::new(55.0, 10.0), 24.0);
        assert_eq!(gesture, Some(Gesture::SwipeUp));
    }

    #[test]
    fn downward_and_sideways_travel_is_ignored() {
        assert_eq!(
            classify(Point::new(50.0, 50.0), Point::new(50.0, 90.0), 24.0),
            None
        );
        assert_eq!(
            classify(Point::new(50.0, 50.0), Point::new(120.0, 20.0), 24.0),
            None
        );
    }

    #[test]
    fn upward_travel_below_threshold_is_ignored() {
        assert_eq!(
            classify(Point::new(50.0, 50.0), Point::new(50.0, 35.0), 24.0),
            None
        );
    }

    #[test]
    fn tracker_uses_last_move_when_release_position_is_unknown() {
        let mut tracker = GestureTracker::default();
        tracker.press(Point::new(10.0, 60.0));
        tracker.moved(Point::new(10.0, 20.0));

        assert_eq!(tracker.release(None), Some(Gesture::SwipeUp));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn release_without_press_recognizes_nothing() {
        let mut tracker = GestureTracker::default();
        tracker.moved(Point::new(10.0, 20.0));
        assert_eq!(tracker.release(Some(Point::new(10.0, 20.0))), None);
    }

    #[test]
    fn cancel_drops_sequence() {
        let mut tracker = GestureTracker::new(10.0);
        tracker.press(Point::new(0.0, 0.0));
        tracker.cancel();
        assert_eq!(tracker.release(Some(Point::new(0.0, 0.0))), None);
    }
}
