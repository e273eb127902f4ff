// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are only routed to the gallery while its lightbox is
//! open; the frame tick only runs while a reveal pass is pending. Both
//! subscriptions are torn down the moment they are not needed.

use super::{Message, Screen};
use iced::{event, time, Subscription};
use std::time::Duration;

use crate::gallery::reveal::FRAME_TICK;

/// Creates the native event subscription.
///
/// Window resizes are always routed so the grid can re-layout. Keyboard
/// keys are routed only on the gallery screen while the lightbox is open;
/// on every other screen the keyboard belongs to the focused widget.
pub fn create_event_subscription(screen: Screen, lightbox_open: bool) -> Subscription<Message> {
    if screen == Screen::Gallery && lightbox_open {
        event::listen_with(route_window_and_key_events)
    } else {
        event::listen_with(route_window_events)
    }
}

fn route_window_events(
    event: event::Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
        return Some(Message::WindowResized(*size));
    }

    None
}

fn route_window_and_key_events(
    event: event::Event,
    status: event::Status,
    window: iced::window::Id,
) -> Option<Message> {
    if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = &event {
        return match status {
            event::Status::Ignored => Some(Message::KeyPressed(key.clone())),
            event::Status::Captured => None,
        };
    }

    route_window_events(event, status, window)
}

/// Creates the frame tick driving coalesced reveal passes.
///
/// Returns `Subscription::none()` when no pass is pending so the app is
/// fully idle between scroll events.
pub fn create_reveal_subscription(reveal_pass_pending: bool) -> Subscription<Message> {
    if reveal_pass_pending {
        time::every(FRAME_TICK).map(Message::RevealTick)
    } else {
        Subscription::none()
    }
}

/// Creates the minute tick refreshing the about screen's status chip.
pub fn create_minute_subscription(screen: Screen) -> Subscription<Message> {
    if screen == Screen::About {
        time::every(Duration::from_secs(60)).map(Message::MinuteTick)
    } else {
        Subscription::none()
    }
}

/// Creates the periodic tick for notification auto-dismiss.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
