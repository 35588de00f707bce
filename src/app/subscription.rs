// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only live on the media screen (Escape closes
//! overlays, the arrow keys step the lightbox), and the notification
//! tick only runs while toasts are showing, so an idle window subscribes
//! to nothing.

use super::{App, Message, Screen};
use crate::config::defaults::NOTIFICATION_TICK_MS;
use crate::gallery::Direction;
use crate::ui::media;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the subscription set for the current application state.
pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if app.screen == Screen::Media {
        subscriptions.push(event::listen_with(|event, _status, _window| {
            if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = event {
                return match key {
                    Key::Named(Named::Escape) => {
                        Some(Message::Media(media::Message::CloseOverlays))
                    }
                    Key::Named(Named::ArrowLeft) => {
                        Some(Message::Media(media::Message::StepImage(Direction::Previous)))
                    }
                    Key::Named(Named::ArrowRight) => {
                        Some(Message::Media(media::Message::StepImage(Direction::Next)))
                    }
                    _ => None,
                };
            }
            None
        }));
    }

    if !app.notifications.is_empty() {
        subscriptions.push(
            time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(|_| Message::Tick),
        );
    }

    Subscription::batch(subscriptions)
}
