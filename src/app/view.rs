// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, plus the toast overlay.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::coordinate_entry;
use crate::ui::home;
use crate::ui::notifications::{self, Toast};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{stack, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub home: &'a home::State,
    pub coordinate_entry: Option<&'a coordinate_entry::State>,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(ctx.home, ctx.i18n),
        Screen::CoordinateEntry => view_coordinate_entry(ctx.coordinate_entry, ctx.i18n),
        Screen::Settings => view_settings(ctx.theme_mode, ctx.i18n),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.visible_count() == 0 {
        return base.into();
    }

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
    stack([base.into(), toasts]).into()
}

fn view_home<'a>(home: &'a home::State, i18n: &'a I18n) -> Element<'a, Message> {
    home::view(home::ViewContext { i18n, state: home }).map(Message::Home)
}

fn view_coordinate_entry<'a>(
    state: Option<&'a coordinate_entry::State>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    if let Some(state) = state {
        coordinate_entry::view(coordinate_entry::ViewContext { i18n, state })
            .map(Message::CoordinateEntry)
    } else {
        // Fallback if the entry state is missing
        Container::new(Text::new("Entry error"))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn view_settings(theme_mode: ThemeMode, i18n: &I18n) -> Element<'_, Message> {
    settings::view(settings::ViewContext { i18n, theme_mode }).map(Message::Settings)
}
