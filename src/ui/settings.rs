// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection and theme mode.
//!
//! Selections take effect immediately and are persisted by the application
//! update loop.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, text, Button, Column, Row, Text};
use iced::{alignment::Horizontal, Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
    Back,
}

/// Process a settings screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeChanged(mode),
        Message::Back => Event::Back,
    }
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("settings-back-button"))).size(typography::BODY),
    )
    .on_press(Message::Back)
    .style(iced::widget::button::text);

    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_MD);

    let language_section = build_language_section(&ctx);
    let theme_section = build_theme_section(&ctx);

    let panel = container(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(language_section)
            .push(theme_section),
    )
    .padding(spacing::LG)
    .max_width(sizing::PANEL_MAX_WIDTH)
    .style(theme::panel_style);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(back_button)
        .push(panel);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(spacing::MD)
        .into()
}

/// Build the language selection list, one button per embedded locale.
fn build_language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("settings-language-label")).size(typography::BODY));

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Prefer a translated name, e.g. "language-name-en-US"
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let mut locale_button: Button<'a, Message> = button(text(button_text))
            .on_press(Message::LanguageSelected(locale.clone()))
            .padding([spacing::XXS, spacing::SM]);

        if is_current {
            locale_button = locale_button.style(iced::widget::button::primary);
        } else {
            locale_button = locale_button.style(iced::widget::button::secondary);
        }

        column = column.push(locale_button);
    }

    column.into()
}

/// Build the theme mode selector row.
fn build_theme_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for mode in ThemeMode::ALL {
        let mut mode_button: Button<'a, Message> = button(text(ctx.i18n.tr(mode.i18n_key())))
            .on_press(Message::ThemeModeSelected(mode))
            .padding([spacing::XXS, spacing::SM]);

        if mode == ctx.theme_mode {
            mode_button = mode_button.style(iced::widget::button::primary);
        } else {
            mode_button = mode_button.style(iced::widget::button::secondary);
        }

        row = row.push(mode_button);
    }

    Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("settings-theme-label")).size(typography::BODY))
        .push(row)
        .into()
}
