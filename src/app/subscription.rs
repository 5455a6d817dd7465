// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are conditional on application state: keyboard routing only
//! while the coordinate entry screen is open, and a periodic tick only while
//! toast notifications are on screen.

use super::{App, Message, Screen};
use crate::ui::coordinate_entry;
use iced::{keyboard, time, Subscription};
use std::time::Duration;

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    // Escape mirrors the host environment's default dismissal
    if app.screen == Screen::CoordinateEntry {
        subscriptions.push(iced::event::listen_with(|event, _status, _window| {
            match event {
                iced::Event::Keyboard(keyboard::Event::KeyPressed {
                    key, modifiers, ..
                }) => handle_entry_key(key, modifiers),
                _ => None,
            }
        }));
    }

    if app.notifications.visible_count() > 0 {
        subscriptions.push(time::every(Duration::from_millis(500)).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

fn handle_entry_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CoordinateEntry(
            coordinate_entry::Message::Cancel,
        )),
        _ => None,
    }
}
