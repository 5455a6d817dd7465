// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the handlers that
//! translate component events into navigation, the result handoff, and
//! preference persistence.

use super::{App, Message, Screen};
use crate::config;
use crate::ui::coordinate_entry::{self, Event as CoordinateEntryEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::notifications::Notification;
use crate::ui::settings::{self, Event as SettingsEvent};
use iced::Task;

/// Notification key surfaced when preferences cannot be written.
const WARNING_CONFIG_SAVE_FAILED: &str = "notification-config-save-failed";

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Home(message) => handle_home(app, &message),
        Message::CoordinateEntry(message) => handle_coordinate_entry(app, message),
        Message::Settings(message) => handle_settings(app, message),
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

fn handle_home(app: &mut App, message: &home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::OpenCoordinateEntry => {
            // Fresh, empty fields on every open
            app.coordinate_entry = Some(coordinate_entry::State::new());
            app.screen = Screen::CoordinateEntry;
        }
        HomeEvent::OpenSettings => {
            app.screen = Screen::Settings;
        }
    }
    Task::none()
}

fn handle_coordinate_entry(app: &mut App, message: coordinate_entry::Message) -> Task<Message> {
    let Some(state) = app.coordinate_entry.as_mut() else {
        // The screen already closed; a stray message has no state to act on.
        tracing::debug!("dropping coordinate entry message for a closed screen");
        return Task::none();
    };

    match coordinate_entry::update(state, message) {
        CoordinateEntryEvent::None => {}
        CoordinateEntryEvent::Submitted(fields) => {
            // Destroying the state here is what makes a second confirmation
            // impossible.
            app.coordinate_entry = None;
            app.screen = Screen::Home;
            tracing::info!(
                latitude = %fields.latitude,
                longitude = %fields.longitude,
                "destination submitted"
            );
            app.notifications.push(
                Notification::success("notification-destination-set")
                    .with_arg("latitude", &fields.latitude)
                    .with_arg("longitude", &fields.longitude),
            );
            app.home.set_destination(fields);
        }
        CoordinateEntryEvent::Dismissed => {
            app.coordinate_entry = None;
            app.screen = Screen::Home;
            tracing::debug!("coordinate entry dismissed without a result");
        }
    }
    Task::none()
}

fn handle_settings(app: &mut App, message: settings::Message) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::LanguageChanged(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.language = Some(locale.to_string());
            persist_config(app);
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            app.theme_mode = mode;
            app.config.theme_mode = mode;
            persist_config(app);
        }
        SettingsEvent::Back => {
            app.screen = Screen::Home;
        }
    }
    Task::none()
}

fn persist_config(app: &mut App) {
    if let Err(err) = config::save(&app.config, app.config_dir.as_deref()) {
        tracing::warn!(error = %err, "failed to save preferences");
        app.notifications
            .push(Notification::warning(WARNING_CONFIG_SAVE_FAILED));
    }
}
