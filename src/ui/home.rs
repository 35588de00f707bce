// SPDX-License-Identifier: MPL-2.0
//! Home screen: hero presentation, affiliations, and social links.

use crate::app::Screen;
use crate::content::ConductorProfile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Theme,
};
use std::path::PathBuf;

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    Explore(Screen),
}

/// Render the home screen.
pub fn view<'a>(profile: &'a ConductorProfile, i18n: &'a I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Center);

    content = content.push(hero(profile, i18n));

    if !profile.affiliations.is_empty() {
        content = content.push(affiliations(profile, i18n));
    }

    if !profile.social_links.is_empty() {
        content = content.push(social_links(profile));
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL),
    )
    .into()
}

fn hero<'a>(profile: &'a ConductorProfile, i18n: &'a I18n) -> Element<'a, Message> {
    let mut hero = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center);

    hero = hero.push(
        Image::new(Handle::from_path(PathBuf::from(&profile.hero_image)))
            .width(Length::Fill)
            .height(320.0)
            .content_fit(ContentFit::Cover),
    );

    hero = hero.push(Text::new(&profile.name).size(typography::DISPLAY));

    if let Some(tagline) = &profile.tagline {
        hero = hero.push(
            Text::new(tagline)
                .size(typography::SUBHEADING)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GOLD_500),
                }),
        );
    }

    hero = hero.push(
        Text::new(&profile.biography_short)
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    );

    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(i18n.tr("home-explore-media")).size(typography::BODY))
                .on_press(Message::Explore(Screen::Media))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("home-full-biography")).size(typography::BODY))
                .on_press(Message::Explore(Screen::Biography))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::tab(false)),
        )
        .push(
            button(Text::new(i18n.tr("nav-concerts")).size(typography::BODY))
                .on_press(Message::Explore(Screen::Concerts))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::tab(false)),
        );

    hero.push(actions).into()
}

fn affiliations<'a>(profile: &'a ConductorProfile, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("affiliations-title")).size(typography::HEADING));

    let mut row = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
    for affiliation in &profile.affiliations {
        let card = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new(&affiliation.name).size(typography::SUBHEADING))
            .push(
                Text::new(&affiliation.role)
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::GRAY_400),
                    }),
            );
        row = row.push(
            Container::new(card)
                .padding(spacing::MD)
                .style(styles::container::card),
        );
    }

    column = column.push(row);
    column.into()
}

fn social_links(profile: &ConductorProfile) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::MD).align_y(Vertical::Center);
    for link in &profile.social_links {
        let entry = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new(link.platform.label()).size(typography::CAPTION))
            .push(
                Text::new(&link.url)
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::GRAY_400),
                    }),
            );
        row = row.push(entry);
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
