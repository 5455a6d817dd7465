// SPDX-License-Identifier: MPL-2.0
//! Home screen showing the current destination.
//!
//! The home screen is the caller side of the coordinate entry handoff: it
//! opens the entry screen and later receives the submitted payload from the
//! application update loop. The received strings are displayed as-is.

use crate::domain::DestinationFields;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::{button, container, text, Column, Row, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Home screen state: the destination received so far, if any.
#[derive(Debug, Clone, Default)]
pub struct State {
    destination: Option<DestinationFields>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently stored destination.
    #[must_use]
    pub fn destination(&self) -> Option<&DestinationFields> {
        self.destination.as_ref()
    }

    /// Stores the payload received from the coordinate entry screen.
    pub fn set_destination(&mut self, fields: DestinationFields) {
        self.destination = Some(fields);
    }
}

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    EditDestination,
    OpenSettings,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenCoordinateEntry,
    OpenSettings,
}

/// Process a home screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::EditDestination => Event::OpenCoordinateEntry,
        Message::OpenSettings => Event::OpenSettings,
    }
}

/// Render the home screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("home-title")).size(typography::TITLE_LG);

    let destination_section: Element<'a, Message> = match ctx.state.destination() {
        Some(fields) => destination_rows(ctx.i18n, fields),
        None => text(ctx.i18n.tr("home-no-destination"))
            .size(typography::BODY)
            .style(|_theme: &Theme| iced::widget::text::Style {
                color: Some(theme::muted_text_color()),
            })
            .into(),
    };

    let edit_button = button(text(ctx.i18n.tr("home-set-destination-button")))
        .on_press(Message::EditDestination)
        .padding([spacing::XS, spacing::MD])
        .style(iced::widget::button::primary);

    let settings_button = button(text(ctx.i18n.tr("home-settings-button")))
        .on_press(Message::OpenSettings)
        .padding([spacing::XS, spacing::MD])
        .style(iced::widget::button::text);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(destination_section)
        .push(edit_button)
        .push(settings_button);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(spacing::MD)
        .into()
}

/// Labeled rows for the stored raw coordinate strings.
fn destination_rows<'a>(i18n: &'a I18n, fields: &'a DestinationFields) -> Element<'a, Message> {
    let latitude_row = Row::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("home-latitude-label")).size(typography::BODY))
        .push(text(fields.latitude.as_str()).size(typography::BODY));

    let longitude_row = Row::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("home-longitude-label")).size(typography::BODY))
        .push(text(fields.longitude.as_str()).size(typography::BODY));

    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(latitude_row)
        .push(longitude_row)
        .into()
}
