// SPDX-License-Identifier: MPL-2.0
//! Contact screen: a local message draft handed to the notification
//! collaborator on submit. There is no delivery backend; the draft is
//! validated for presence only.

use crate::content::ConductorProfile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// The contact form draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl State {
    /// Presence-only validation: every field must be non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.body]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Clears all fields back to the initial draft.
    pub fn reset(&mut self) {
        *self = State::default();
    }
}

/// Messages emitted by the contact screen.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    BodyChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A complete draft was submitted.
    Submitted(State),
    /// Submit was pressed with at least one blank field.
    Incomplete,
}

/// Process a contact message against the draft state.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::SubjectChanged(value) => {
            state.subject = value;
            Event::None
        }
        Message::BodyChanged(value) => {
            state.body = value;
            Event::None
        }
        Message::Submit => {
            if state.is_complete() {
                let draft = state.clone();
                state.reset();
                Event::Submitted(draft)
            } else {
                Event::Incomplete
            }
        }
    }
}

/// Render the contact screen.
pub fn view<'a>(
    state: &'a State,
    profile: &'a ConductorProfile,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH / 2.0);

    content = content.push(
        Text::new(i18n.tr("contact-title"))
            .size(typography::TITLE)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    );

    content = content.push(
        Text::new(&profile.contact_email)
            .size(typography::CAPTION)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GOLD_500),
            }),
    );

    content = content
        .push(
            text_input(&i18n.tr("contact-name"), &state.name)
                .on_input(Message::NameChanged)
                .padding(spacing::SM)
                .size(typography::BODY),
        )
        .push(
            text_input(&i18n.tr("contact-email"), &state.email)
                .on_input(Message::EmailChanged)
                .padding(spacing::SM)
                .size(typography::BODY),
        )
        .push(
            text_input(&i18n.tr("contact-subject"), &state.subject)
                .on_input(Message::SubjectChanged)
                .padding(spacing::SM)
                .size(typography::BODY),
        )
        .push(
            text_input(&i18n.tr("contact-message"), &state.body)
                .on_input(Message::BodyChanged)
                .padding(spacing::SM)
                .size(typography::BODY),
        );

    content = content.push(
        Container::new(
            button(Text::new(i18n.tr("contact-send")).size(typography::BODY))
                .on_press(Message::Submit)
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::primary),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center),
    );

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        State {
            name: "Ada".to_string(),
            email: "ada@example.invalid".to_string(),
            subject: "Booking".to_string(),
            body: "Hello".to_string(),
        }
    }

    #[test]
    fn incomplete_submit_keeps_draft() {
        let mut state = State {
            body: String::new(),
            ..filled()
        };
        let before = state.clone();
        let event = update(&mut state, Message::Submit);
        assert!(matches!(event, Event::Incomplete));
        assert_eq!(state, before);
    }

    #[test]
    fn whitespace_only_field_is_incomplete() {
        let mut state = State {
            subject: "   ".to_string(),
            ..filled()
        };
        assert!(!state.is_complete());
    }

    #[test]
    fn complete_submit_resets_and_reports_draft() {
        let mut state = filled();
        let event = update(&mut state, Message::Submit);
        match event {
            Event::Submitted(draft) => assert_eq!(draft, filled()),
            _ => panic!("expected submission"),
        }
        assert_eq!(state, State::default());
    }

    #[test]
    fn field_edits_update_draft() {
        let mut state = State::default();
        update(&mut state, Message::NameChanged("Ada".to_string()));
        update(&mut state, Message::EmailChanged("a@b.invalid".to_string()));
        assert_eq!(state.name, "Ada");
        assert_eq!(state.email, "a@b.invalid");
    }
}
