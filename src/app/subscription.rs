// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Clock refresh while nothing animates.
const IDLE_TICK: Duration = Duration::from_secs(1);

/// Window resizes, plus a tick that speeds up while a banner animates.
pub fn create(animating: bool) -> Subscription<Message> {
    let resize = event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    });

    Subscription::batch([resize, time::every(tick_interval(animating)).map(Message::Tick)])
}

fn tick_interval(animating: bool) -> Duration {
    if animating {
        Duration::from_millis(ANIMATION_TICK_MS)
    } else {
        IDLE_TICK
    }
}
