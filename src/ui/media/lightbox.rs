// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox overlay for a single gallery image, with
//! circular prev/next navigation over the filtered photo sequence.

use super::Message;
use crate::gallery::{Direction, LightboxInfo};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};
use std::path::PathBuf;

/// Render the image lightbox from a state snapshot.
///
/// Prev/next arrows are omitted entirely when the filtered sequence
/// holds at most one photo; the counter always reflects "position /
/// total" of that sequence.
pub fn view<'a>(info: LightboxInfo<'a>, i18n: &'a I18n) -> Element<'a, Message> {
    let close_button = button(icons::sized(
        icons::colored(icons::cross(), palette::WHITE),
        sizing::ICON_MD,
    ))
    .on_press(Message::CloseImage)
    .padding(spacing::XS)
    .style(styles::button::overlay(palette::WHITE, 0.3, 0.5));

    let picture = Image::new(Handle::from_path(PathBuf::from(&info.image.src)))
        .width(Length::Fill)
        .height(460.0)
        .content_fit(ContentFit::Contain);

    let mut viewer = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .width(760.0);

    if info.total > 1 {
        viewer = viewer.push(arrow(icons::chevron_left(), Direction::Previous));
    }
    viewer = viewer.push(picture);
    if info.total > 1 {
        viewer = viewer.push(arrow(icons::chevron_right(), Direction::Next));
    }

    let mut card = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Row::new()
                .width(760.0)
                .align_y(Vertical::Center)
                .push(Container::new(Text::new("")).width(Length::Fill))
                .push(close_button),
        )
        .push(viewer);

    if let Some(caption) = &info.image.caption {
        card = card.push(
            Container::new(Text::new(caption).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::indicator(radius::MD)),
        );
    }

    let position = info.position.to_string();
    let total = info.total.to_string();
    card = card.push(
        Container::new(
            Text::new(i18n.tr_with_args(
                "lightbox-counter",
                &[("position", position.as_str()), ("total", total.as_str())],
            ))
            .size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::PILL)),
    );

    let backdrop = mouse_area(
        Container::new(center(opaque(card)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseImage);

    opaque(backdrop)
}

fn arrow(icon: iced::widget::Svg<'static>, direction: Direction) -> Element<'static, Message> {
    button(icons::sized(
        icons::colored(icon, palette::WHITE),
        sizing::ICON_LG,
    ))
    .on_press(Message::StepImage(direction))
    .padding(spacing::SM)
    .style(styles::button::overlay(palette::WHITE, 0.25, 0.45))
    .into()
}
