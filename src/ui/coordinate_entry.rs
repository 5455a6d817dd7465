// SPDX-License-Identifier: MPL-2.0
//! Coordinate entry screen.
//!
//! Two editable text fields (latitude, longitude) and a confirmation control.
//! Confirming packages the current field contents into a [`DestinationFields`]
//! payload and emits it to the parent; cancelling emits a dismissal. The text
//! is handed back verbatim: no parsing, trimming, or range check happens here,
//! the caller owns the interpretation of the values.

use crate::domain::DestinationFields;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{alignment::Horizontal, Element, Length};

/// Transient state of the entry screen: the two owned text buffers.
///
/// Constructed empty when the screen opens and dropped when it closes, so the
/// fields can never be observed unbound.
#[derive(Debug, Clone, Default)]
pub struct State {
    latitude_input: String,
    longitude_input: String,
}

impl State {
    /// Creates a fresh entry screen with empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Contextual data needed to render the entry screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the entry screen widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LatitudeInputChanged(String),
    LongitudeInputChanged(String),
    Confirm,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user confirmed; the payload carries the exact field contents.
    Submitted(DestinationFields),
    /// The user left without confirming; no payload is produced.
    Dismissed,
}

/// Process an entry screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::LatitudeInputChanged(value) => {
            state.latitude_input = value;
            Event::None
        }
        Message::LongitudeInputChanged(value) => {
            state.longitude_input = value;
            Event::None
        }
        Message::Confirm => Event::Submitted(DestinationFields {
            latitude: state.latitude_input.clone(),
            longitude: state.longitude_input.clone(),
        }),
        Message::Cancel => Event::Dismissed,
    }
}

/// Render the entry screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("coordinate-entry-title")).size(typography::TITLE_MD);

    let latitude_label = text(ctx.i18n.tr("coordinate-entry-latitude-label")).size(typography::BODY);
    let latitude_input = text_input(
        ctx.i18n.tr("coordinate-entry-latitude-label").as_str(),
        &ctx.state.latitude_input,
    )
    .on_input(Message::LatitudeInputChanged)
    .on_submit(Message::Confirm)
    .padding(spacing::XS)
    .size(typography::TITLE_SM)
    .width(Length::Fill);

    let longitude_label =
        text(ctx.i18n.tr("coordinate-entry-longitude-label")).size(typography::BODY);
    let longitude_input = text_input(
        ctx.i18n.tr("coordinate-entry-longitude-label").as_str(),
        &ctx.state.longitude_input,
    )
    .on_input(Message::LongitudeInputChanged)
    .on_submit(Message::Confirm)
    .padding(spacing::XS)
    .size(typography::TITLE_SM)
    .width(Length::Fill);

    let cancel_button = button(text(ctx.i18n.tr("coordinate-entry-cancel-button")))
        .on_press(Message::Cancel)
        .padding([spacing::XS, spacing::MD])
        .style(iced::widget::button::secondary);

    let confirm_button = button(text(ctx.i18n.tr("coordinate-entry-confirm-button")))
        .on_press(Message::Confirm)
        .padding([spacing::XS, spacing::MD])
        .style(iced::widget::button::primary);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(cancel_button)
        .push(confirm_button);

    let form = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(latitude_label)
        .push(latitude_input)
        .push(longitude_label)
        .push(longitude_input)
        .push(actions);

    let panel = container(form)
        .padding(spacing::LG)
        .max_width(sizing::PANEL_MAX_WIDTH)
        .style(theme::panel_style);

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(spacing::MD)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(state: &mut State, latitude: &str, longitude: &str) {
        update(state, Message::LatitudeInputChanged(latitude.to_string()));
        update(state, Message::LongitudeInputChanged(longitude.to_string()));
    }

    #[test]
    fn confirm_returns_exact_field_contents() {
        let mut state = State::new();
        enter(&mut state, "51.5074", "-0.1278");

        match update(&mut state, Message::Confirm) {
            Event::Submitted(fields) => {
                assert_eq!(fields.latitude, "51.5074");
                assert_eq!(fields.longitude, "-0.1278");
            }
            _ => panic!("expected Submitted event"),
        }
    }

    #[test]
    fn confirm_passes_through_empty_and_non_numeric_text() {
        let mut state = State::new();
        enter(&mut state, "", "abc");

        match update(&mut state, Message::Confirm) {
            Event::Submitted(fields) => {
                assert_eq!(fields.latitude, "");
                assert_eq!(fields.longitude, "abc");
            }
            _ => panic!("expected Submitted event"),
        }
    }

    #[test]
    fn confirm_preserves_surrounding_whitespace() {
        let mut state = State::new();
        enter(&mut state, "  48.8566 ", "\t2.3522");

        match update(&mut state, Message::Confirm) {
            Event::Submitted(fields) => {
                assert_eq!(fields.latitude, "  48.8566 ");
                assert_eq!(fields.longitude, "\t2.3522");
            }
            _ => panic!("expected Submitted event"),
        }
    }

    #[test]
    fn editing_a_field_replaces_its_previous_contents() {
        let mut state = State::new();
        enter(&mut state, "1", "2");
        enter(&mut state, "10", "20");

        match update(&mut state, Message::Confirm) {
            Event::Submitted(fields) => {
                assert_eq!(fields.latitude, "10");
                assert_eq!(fields.longitude, "20");
            }
            _ => panic!("expected Submitted event"),
        }
    }

    #[test]
    fn field_edits_emit_no_event() {
        let mut state = State::new();
        let event = update(&mut state, Message::LatitudeInputChanged("5".to_string()));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn cancel_dismisses_without_payload() {
        let mut state = State::new();
        enter(&mut state, "51.5074", "-0.1278");

        let event = update(&mut state, Message::Cancel);
        assert!(matches!(event, Event::Dismissed));
    }

    #[test]
    fn new_screen_starts_with_empty_fields() {
        let mut state = State::new();
        match update(&mut state, Message::Confirm) {
            Event::Submitted(fields) => {
                assert_eq!(fields.latitude, "");
                assert_eq!(fields.longitude, "");
            }
            _ => panic!("expected Submitted event"),
        }
    }
}
