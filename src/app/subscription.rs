// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::ui::snackbar;
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Ticks the snackbar timer, only while a snackbar is on screen.
pub fn create_tick_subscription(snackbar_visible: bool) -> Subscription<Message> {
    if snackbar_visible {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(tick)
    } else {
        Subscription::none()
    }
}

fn tick(now: Instant) -> Message {
    Message::Snackbar(snackbar::Message::Tick(now))
}
