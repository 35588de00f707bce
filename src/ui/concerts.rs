// SPDX-License-Identifier: MPL-2.0
//! Concerts screen: upcoming and past engagements.

use crate::content::{Concert, ConductorProfile};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::widget::{scrollable, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Splits concerts into (upcoming, past) by their flag, ordering
/// upcoming soonest-first and past most-recent-first. Unparseable dates
/// sort after parseable ones, keeping their relative order.
pub fn partition(concerts: &[Concert]) -> (Vec<&Concert>, Vec<&Concert>) {
    let mut upcoming: Vec<&Concert> = concerts.iter().filter(|c| c.upcoming).collect();
    let mut past: Vec<&Concert> = concerts.iter().filter(|c| !c.upcoming).collect();

    upcoming.sort_by_key(|concert| match parse_date(&concert.date) {
        Some(date) => (0, date),
        None => (1, NaiveDate::MAX),
    });
    past.sort_by_key(|concert| match parse_date(&concert.date) {
        Some(date) => (0, std::cmp::Reverse(date)),
        None => (1, std::cmp::Reverse(NaiveDate::MIN)),
    });

    (upcoming, past)
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Render the concerts screen. Emits no messages.
pub fn view<'a, Message: 'a>(
    profile: &'a ConductorProfile,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let (upcoming, past) = partition(&profile.concerts);

    let mut content = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    content = content.push(
        Text::new(i18n.tr("concerts-title"))
            .size(typography::TITLE)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    );

    if !upcoming.is_empty() {
        content = content.push(section(i18n, "concerts-upcoming", &upcoming));
    }
    if !past.is_empty() {
        content = content.push(section(i18n, "concerts-past", &past));
    }
    if profile.concerts.is_empty() {
        content = content.push(
            Text::new(i18n.tr("concerts-empty"))
                .size(typography::BODY)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL),
    )
    .into()
}

fn section<'a, Message: 'a>(
    i18n: &'a I18n,
    title_key: &str,
    concerts: &[&'a Concert],
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).push(
        Text::new(i18n.tr(title_key))
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GOLD_500),
            }),
    );

    for concert in concerts {
        column = column.push(card(i18n, *concert));
    }

    column.into()
}

fn card<'a, Message: 'a>(i18n: &'a I18n, concert: &'a Concert) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(&concert.title)
                .size(typography::SUBHEADING)
                .width(Length::Fill),
        )
        .push(
            Text::new(i18n.tr(concert.kind.i18n_key()))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GOLD_500),
                }),
        );

    let mut details = Column::new().spacing(spacing::XS).push(header).push(
        Text::new(format!(
            "{} · {} · {}",
            concert.date, concert.venue, concert.organization
        ))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        }),
    );

    if let Some(description) = &concert.description {
        details = details.push(Text::new(description).size(typography::BODY));
    }

    if !concert.programme.is_empty() {
        let mut programme = Column::new().spacing(spacing::XXS).push(
            Text::new(i18n.tr("concerts-programme")).size(typography::CAPTION),
        );
        for piece in &concert.programme {
            programme = programme.push(Text::new(piece).size(typography::CAPTION));
        }
        details = details.push(programme);
    }

    Container::new(details)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
