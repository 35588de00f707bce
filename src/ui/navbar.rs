// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the top bar shown on every screen: the
//! conductor's name (acting as the home link), one link per screen,
//! and the language switcher.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Currently active screen, for link highlighting.
    pub active: Screen,
    /// Conductor name shown as the wordmark / home link.
    pub name: &'a str,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    SwitchLocale(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
    SwitchLocale(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::SwitchLocale(locale) => Event::SwitchLocale(locale),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let wordmark = button(Text::new(ctx.name).size(typography::HEADING))
        .on_press(Message::Navigate(Screen::Home))
        .padding(spacing::XS)
        .style(styles::button::link(ctx.active == Screen::Home));

    let mut links = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center);
    for screen in [
        Screen::Biography,
        Screen::Media,
        Screen::Concerts,
        Screen::Contact,
    ] {
        links = links.push(
            button(Text::new(ctx.i18n.tr(screen.i18n_key())).size(typography::BODY))
                .on_press(Message::Navigate(screen))
                .padding(spacing::XS)
                .style(styles::button::link(ctx.active == screen)),
        );
    }

    let mut switcher = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center);
    let current = ctx.i18n.current_locale().clone();
    for (index, locale) in ctx.i18n.available_locales.iter().enumerate() {
        if index > 0 {
            switcher = switcher.push(Text::new("|").size(typography::CAPTION));
        }
        switcher = switcher.push(
            button(Text::new(locale_label(locale)).size(typography::CAPTION))
                .on_press(Message::SwitchLocale(locale.clone()))
                .padding(spacing::XS)
                .style(styles::button::link(*locale == current)),
        );
    }

    let bar = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(wordmark)
        .push(
            Container::new(links)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(switcher);

    Container::new(bar)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .into()
}

/// Display label for a locale button; languages name themselves.
fn locale_label(locale: &LanguageIdentifier) -> String {
    match locale.language.as_str() {
        "el" => "ΕΛ".to_string(),
        other => other.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_maps_navigation() {
        let event = update(Message::Navigate(Screen::Media));
        assert!(matches!(event, Event::Navigate(Screen::Media)));
    }

    #[test]
    fn update_maps_locale_switch() {
        let greek: LanguageIdentifier = "el".parse().unwrap();
        let event = update(Message::SwitchLocale(greek.clone()));
        match event {
            Event::SwitchLocale(locale) => assert_eq!(locale, greek),
            Event::Navigate(_) => panic!("expected locale switch"),
        }
    }

    #[test]
    fn greek_locale_uses_native_label() {
        let greek: LanguageIdentifier = "el".parse().unwrap();
        assert_eq!(locale_label(&greek), "ΕΛ");
        let english: LanguageIdentifier = "en".parse().unwrap();
        assert_eq!(locale_label(&english), "EN");
    }
}
