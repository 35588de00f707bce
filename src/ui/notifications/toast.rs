// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are small cards with a severity-colored accent border and a
//! dismiss button, stacked in the top-right corner of the window.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};

/// Renders the visible notifications as a stacked column, anchored
/// top-right over the main content.
pub fn view<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let mut stack = Column::new().spacing(spacing::SM).width(sizing::TOAST_WIDTH);
    for notification in manager.visible() {
        stack = stack.push(toast(notification, i18n));
    }

    Container::new(stack)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::MD)
        .into()
}

fn toast<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let message_text = if notification.message_args().is_empty() {
        i18n.tr(notification.message_key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    };

    let message_widget = Text::new(message_text)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let notification_id = notification.id();
    let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::Dismiss(notification_id))
        .padding(spacing::XXS)
        .style(crate::ui::styles::button::link(false));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .padding(spacing::SM)
        .style(move |theme: &Theme| {
            let palette_ext = theme.extended_palette();
            container::Style {
                background: Some(Background::Color(palette_ext.background.weak.color)),
                border: Border {
                    color: accent,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                shadow: shadow::MD,
                ..Default::default()
            }
        })
        .into()
}
