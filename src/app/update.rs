// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers for navbar, media, and contact messages. Locale switching
//! lives here because it touches several domains at once: the i18n
//! bundles, the persisted config, and the gallery state, which is
//! rebuilt from the newly selected dataset.

use super::{App, Message};
use crate::config;
use crate::gallery::GalleryState;
use crate::ui::notifications::Notification;
use crate::ui::{contact, home, media, navbar};
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Processes one top-level message.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => handle_navbar(app, msg),
        Message::Home(home::Message::Explore(screen)) => {
            app.screen = screen;
            Task::none()
        }
        Message::Media(msg) => {
            media::update(&mut app.gallery, msg);
            Task::none()
        }
        Message::Contact(msg) => handle_contact(app, msg),
        Message::Notification(msg) => {
            app.notifications.update(msg);
            Task::none()
        }
        Message::Tick => {
            app.notifications.tick();
            Task::none()
        }
    }
}

fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::Navigate(screen) => {
            app.screen = screen;
        }
        navbar::Event::SwitchLocale(locale) => switch_locale(app, locale),
    }
    Task::none()
}

fn switch_locale(app: &mut App, locale: LanguageIdentifier) {
    if *app.i18n.current_locale() == locale {
        return;
    }

    app.i18n.set_locale(locale.clone());

    if !app.content.has_locale(&locale) {
        app.notifications.push(
            Notification::warning("notification-content-fallback")
                .with_arg("locale", locale.to_string()),
        );
    }

    // The media lists may differ per dataset; rebuild the browsing
    // state with its defaults, as a remount would.
    app.gallery = GalleryState::from_profile(app.content.profile(&locale));

    app.config.language = Some(locale.to_string());
    if let Some(path) = app.config_path.clone() {
        if config::save_to_path(&app.config, &path).is_err() {
            app.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}

fn handle_contact(app: &mut App, message: contact::Message) -> Task<Message> {
    match contact::update(&mut app.contact, message) {
        contact::Event::None => {}
        contact::Event::Submitted(_draft) => {
            // No delivery backend; the toast is the boundary.
            app.notifications
                .push(Notification::success("notification-contact-sent"));
        }
        contact::Event::Incomplete => {
            app.notifications
                .push(Notification::warning("notification-contact-incomplete"));
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Screen;
    use crate::gallery::MediaTab;
    use crate::ui::media::Message as MediaMessage;

    fn app() -> App {
        App::for_tests()
    }

    #[test]
    fn navigation_switches_screen() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Navbar(navbar::Message::Navigate(Screen::Concerts)),
        );
        assert_eq!(app.screen, Screen::Concerts);
    }

    #[test]
    fn media_messages_reach_the_state_machine() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Media(MediaMessage::SelectTab(MediaTab::Photos)),
        );
        assert_eq!(app.gallery.active_tab(), MediaTab::Photos);
    }

    #[test]
    fn incomplete_contact_submission_raises_warning() {
        let mut app = app();
        let _ = update(&mut app, Message::Contact(contact::Message::Submit));
        assert!(!app.notifications.is_empty());
        assert_eq!(app.contact, contact::State::default());
    }

    #[test]
    fn complete_contact_submission_resets_draft() {
        let mut app = app();
        for msg in [
            contact::Message::NameChanged("Ada".into()),
            contact::Message::EmailChanged("ada@example.invalid".into()),
            contact::Message::SubjectChanged("Booking".into()),
            contact::Message::BodyChanged("Hello".into()),
            contact::Message::Submit,
        ] {
            let _ = update(&mut app, Message::Contact(msg));
        }
        assert_eq!(app.contact, contact::State::default());
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn locale_switch_rebuilds_gallery_with_defaults() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Media(MediaMessage::SelectTab(MediaTab::Photos)),
        );
        let _ = update(
            &mut app,
            Message::Media(MediaMessage::SetVideoFilter("Symphony".to_string())),
        );

        let greek: LanguageIdentifier = "el".parse().unwrap();
        switch_locale(&mut app, greek.clone());

        assert_eq!(*app.i18n.current_locale(), greek);
        assert_eq!(app.gallery.active_tab(), MediaTab::Videos);
        assert!(!app.gallery.video_filter().is_active());
    }

    #[test]
    fn locale_switch_preserves_contact_draft() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Contact(contact::Message::NameChanged("Ada".into())),
        );
        switch_locale(&mut app, "el".parse().unwrap());
        assert_eq!(app.contact.name, "Ada");
    }
}
