// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard input is only listened to while the preview dialog is open, so
//! navigation keys never reach a closed or closing dialog.

use super::Message;
use crate::ui::preview;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Frame interval used while something on screen is animating.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Window size events, always active.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| window_size_message(event))
}

/// The first `Opened` carries the real size the platform gave the window;
/// later changes arrive as `Resized`.
fn window_size_message(event: event::Event) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}

/// Key presses routed to the preview. Only subscribed while the dialog is open.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::Preview(preview::Message::KeyPressed(key))),
        _ => None,
    })
}

/// Creates a periodic tick subscription for dialog transitions, the loading
/// spinner, and notification auto-dismiss.
pub fn create_tick_subscription(
    transitioning: bool,
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if transitioning || is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
