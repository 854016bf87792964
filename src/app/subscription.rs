// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Every subscription here is conditional: the tick only runs while toasts
//! are on screen, and frames are only requested while an activity tracker has
//! a recomputation pending.

use super::Message;
use crate::config::NOTIFICATION_TICK_MS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window size changes and close requests; other native events are
/// handled by widgets.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested)
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Delivers the next frame while a tracker waits for one.
pub fn create_frame_subscription(needs_frame: bool) -> Subscription<Message> {
    if needs_frame {
        window::frames().map(|_| Message::Frame)
    } else {
        Subscription::none()
    }
}
