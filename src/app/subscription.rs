// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! File drops are only meaningful on the decompression screen, where they
//! fill the file or folder field. A periodic tick runs while notifications
//! are visible so auto-dismiss timers fire.

use super::{Message, Screen};
use iced::{event, time, Subscription};

/// Creates the window event subscription based on the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    if screen != Screen::Decompressor {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }
        None
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
