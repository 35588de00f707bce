// SPDX-License-Identifier: MPL-2.0
//! Biography screen: long-form sections and press quotes.

use crate::content::ConductorProfile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{scrollable, text, Column, Container, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length, Theme};
use std::path::PathBuf;

/// Render the biography screen. Emits no messages; the view is generic
/// over the parent's message type.
pub fn view<'a, Message: 'a>(
    profile: &'a ConductorProfile,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    content = content.push(
        Text::new(i18n.tr("biography-title"))
            .size(typography::TITLE)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    );

    content = content.push(Text::new(&profile.biography).size(typography::BODY));

    for section in &profile.biography_sections {
        let mut block = Column::new().spacing(spacing::SM);
        block = block.push(Text::new(&section.title).size(typography::HEADING));
        if let Some(image) = &section.image {
            block = block.push(
                Image::new(Handle::from_path(PathBuf::from(image)))
                    .width(Length::Fill)
                    .height(220.0)
                    .content_fit(ContentFit::Cover),
            );
        }
        block = block.push(Text::new(&section.content).size(typography::BODY));
        content = content.push(block);
    }

    if !profile.press_quotes.is_empty() {
        let mut quotes = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("press-title")).size(typography::HEADING));

        for press_quote in &profile.press_quotes {
            let attribution = match &press_quote.year {
                Some(year) => format!("{}, {}", press_quote.source, year),
                None => press_quote.source.clone(),
            };
            let block = Column::new()
                .spacing(spacing::XS)
                .push(Text::new(&press_quote.quote).size(typography::SUBHEADING))
                .push(
                    Text::new(attribution)
                        .size(typography::CAPTION)
                        .style(|_theme: &Theme| text::Style {
                            color: Some(palette::GRAY_400),
                        }),
                );
            quotes = quotes.push(
                Container::new(block)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(styles::container::quote),
            );
        }
        content = content.push(quotes);
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL),
    )
    .into()
}
