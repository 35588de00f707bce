// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay presenting a single selected video.

use super::Message;
use crate::content::Video;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, center, mouse_area, opaque, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Theme,
};
use std::path::PathBuf;

/// Render the video modal. Clicking the backdrop or the close control
/// emits [`Message::CloseVideo`]; clicks on the card itself do not fall
/// through.
pub fn view<'a>(video: &'a Video, i18n: &'a I18n) -> Element<'a, Message> {
    let close_button = button(icons::sized(
        icons::colored(icons::cross(), palette::WHITE),
        sizing::ICON_MD,
    ))
    .on_press(Message::CloseVideo)
    .padding(spacing::XS)
    .style(styles::button::overlay(palette::WHITE, 0.3, 0.5));

    let mut card = Column::new()
        .spacing(spacing::SM)
        .width(640.0)
        .align_x(Horizontal::Center)
        .push(
            Row::new()
                .width(Length::Fill)
                .align_y(Vertical::Center)
                .push(Container::new(Text::new("")).width(Length::Fill))
                .push(close_button),
        )
        .push(
            Image::new(Handle::from_path(PathBuf::from(&video.thumbnail)))
                .width(Length::Fill)
                .height(360.0)
                .content_fit(ContentFit::Cover),
        )
        .push(Text::new(&video.title).size(typography::HEADING));

    if let Some(subtitle) = &video.subtitle {
        card = card.push(Text::new(subtitle).size(typography::SUBHEADING));
    }

    let mut meta = Vec::new();
    if let Some(ensemble) = &video.ensemble {
        meta.push(ensemble.clone());
    }
    if let Some(duration) = &video.duration {
        meta.push(duration.clone());
    }
    if !meta.is_empty() {
        card = card.push(
            Text::new(meta.join(" · "))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_200),
                }),
        );
    }

    card = card.push(
        Container::new(
            Text::new(format!("{}: {}", i18n.tr("modal-watch-at"), video.url))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GOLD_400),
                }),
        )
        .padding([spacing::XS, spacing::SM])
        .style(styles::overlay::indicator(radius::SM)),
    );

    let backdrop = mouse_area(
        Container::new(center(opaque(card)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseVideo);

    opaque(backdrop)
}
