// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.
//!
//! Two timers exist: the toast expiry tick, only while toasts are visible,
//! and the slider's autoplay timer, only while the slider is mounted and
//! playing.

use super::Message;
use crate::config::NOTIFICATION_TICK_MS;
use crate::ui::slider;
use iced::{time, Subscription};
use std::time::Duration;

/// Periodic tick used to expire toasts.
pub fn create_notification_tick(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Autoplay timer of the mounted slider, if any.
pub fn create_slider_subscription(slider: Option<&slider::State>) -> Subscription<Message> {
    slider.map_or_else(Subscription::none, |state| {
        state.subscription().map(Message::Slider)
    })
}
