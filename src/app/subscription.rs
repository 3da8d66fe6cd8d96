// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between notifier ticks while timers are pending.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Creates a periodic tick subscription while any toast timer is pending.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
