// SPDX-License-Identifier: MPL-2.0
//! Media screen: video and photo browsing.
//!
//! The screen is a thin shell over [`GalleryState`]: every interaction
//! maps onto one state-machine transition, and the view re-reads the
//! derived state (categories, filtered sequences, overlay selections)
//! on every render. The modal and lightbox overlays themselves are
//! rendered by the application root so they can sit above the navbar.

pub mod lightbox;
pub mod video_modal;

use crate::content::{GalleryImage, Video};
use crate::gallery::{CategoryFilter, Direction, GalleryState, MediaTab};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Theme,
};
use std::path::PathBuf;

/// Thumbnails per grid row.
const GRID_COLUMNS: usize = 3;

/// Messages emitted by the media screen and its overlays.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(MediaTab),
    /// A chip label was clicked on the video tab.
    SetVideoFilter(String),
    /// A chip label was clicked on the photo tab.
    SetPhotoFilter(String),
    /// Thumbnail activation, by position in the filtered video list.
    OpenVideo(usize),
    /// Thumbnail activation, by position in the filtered photo list.
    OpenImage(usize),
    CloseVideo,
    CloseImage,
    StepImage(Direction),
    /// Escape: close whichever overlay is open.
    CloseOverlays,
}

/// Applies a media-screen message to the gallery state machine.
pub fn update(gallery: &mut GalleryState, message: Message) {
    match message {
        Message::SelectTab(tab) => gallery.select_tab(tab),
        Message::SetVideoFilter(label) => {
            gallery.set_video_filter(CategoryFilter::from_label(&label));
        }
        Message::SetPhotoFilter(label) => {
            gallery.set_photo_filter(CategoryFilter::from_label(&label));
        }
        Message::OpenVideo(index) => {
            let video = gallery.filtered_videos().get(index).map(|v| (*v).clone());
            if let Some(video) = video {
                gallery.open_video(video);
            }
        }
        Message::OpenImage(index) => {
            let image = gallery.filtered_photos().get(index).map(|p| (*p).clone());
            if let Some(image) = image {
                gallery.open_image(image, index);
            }
        }
        Message::CloseVideo => gallery.close_video(),
        Message::CloseImage => gallery.close_image(),
        Message::StepImage(direction) => gallery.step_image(direction),
        Message::CloseOverlays => gallery.close_overlays(),
    }
}

/// Render the media screen (without overlays).
pub fn view<'a>(gallery: &'a GalleryState, i18n: &'a I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Center);

    content = content.push(
        Text::new(i18n.tr("media-title"))
            .size(typography::TITLE)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    );

    content = content.push(tabs(gallery, i18n));

    content = match gallery.active_tab() {
        MediaTab::Videos => content
            .push(chips(
                gallery.video_categories(),
                gallery.video_filter(),
                Message::SetVideoFilter,
            ))
            .push(video_grid(gallery, i18n)),
        MediaTab::Photos => content
            .push(chips(
                gallery.photo_categories(),
                gallery.photo_filter(),
                Message::SetPhotoFilter,
            ))
            .push(photo_grid(gallery, i18n)),
    };

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL),
    )
    .into()
}

fn tabs<'a>(gallery: &GalleryState, i18n: &'a I18n) -> Element<'a, Message> {
    let active = gallery.active_tab();

    let tab_button = |icon, key: &str, tab: MediaTab| {
        button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::sized(icon, sizing::ICON_SM))
                .push(Text::new(i18n.tr(key)).size(typography::BODY)),
        )
        .on_press(Message::SelectTab(tab))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::tab(active == tab))
    };

    Row::new()
        .spacing(spacing::SM)
        .push(tab_button(icons::film(), "media-tab-videos", MediaTab::Videos))
        .push(tab_button(
            icons::camera(),
            "media-tab-photos",
            MediaTab::Photos,
        ))
        .into()
}

/// Category chip row; hidden when only the catch-all exists.
fn chips<'a>(
    categories: Vec<String>,
    selected: &CategoryFilter,
    to_message: fn(String) -> Message,
) -> Element<'a, Message> {
    if categories.len() <= 1 {
        return Row::new().into();
    }

    let mut row = Row::new().spacing(spacing::XS);
    for category in categories {
        let is_selected = selected.label() == category;
        row = row.push(
            button(Text::new(category.clone()).size(typography::CAPTION))
                .on_press(to_message(category))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::chip(is_selected)),
        );
    }
    row.into()
}

fn video_grid<'a>(gallery: &'a GalleryState, i18n: &'a I18n) -> Element<'a, Message> {
    let filtered = gallery.filtered_videos();
    if filtered.is_empty() {
        return empty_state(i18n, "media-empty-videos");
    }

    let mut grid = Column::new().spacing(spacing::MD).width(Length::Fill);
    for (row_index, chunk) in filtered.chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);
        for (offset, video) in chunk.iter().enumerate() {
            row = row.push(video_card(*video, row_index * GRID_COLUMNS + offset));
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn video_card(video: &Video, index: usize) -> Element<'_, Message> {
    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(
            Image::new(Handle::from_path(PathBuf::from(&video.thumbnail)))
                .width(Length::Fill)
                .height(sizing::VIDEO_THUMB_HEIGHT)
                .content_fit(ContentFit::Cover),
        )
        .push(Text::new(&video.title).size(typography::SUBHEADING));

    if let Some(subtitle) = &video.subtitle {
        details = details.push(Text::new(subtitle).size(typography::CAPTION));
    }

    let mut meta = Vec::new();
    if let Some(duration) = &video.duration {
        meta.push(duration.clone());
    }
    if let Some(ensemble) = &video.ensemble {
        meta.push(ensemble.clone());
    }
    if !meta.is_empty() {
        details = details.push(
            Text::new(meta.join(" · "))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );
    }

    button(
        Container::new(details.padding(spacing::SM))
            .style(styles::container::card)
            .width(Length::Fill),
    )
    .on_press(Message::OpenVideo(index))
    .padding(0.0)
    .width(Length::FillPortion(1))
    .style(styles::button::thumbnail)
    .into()
}

fn photo_grid<'a>(gallery: &'a GalleryState, i18n: &'a I18n) -> Element<'a, Message> {
    let filtered = gallery.filtered_photos();
    if filtered.is_empty() {
        return empty_state(i18n, "media-empty-photos");
    }

    let mut grid = Column::new().spacing(spacing::MD).width(Length::Fill);
    for (row_index, chunk) in filtered.chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);
        for (offset, photo) in chunk.iter().enumerate() {
            row = row.push(photo_card(*photo, row_index * GRID_COLUMNS + offset));
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn photo_card(photo: &GalleryImage, index: usize) -> Element<'_, Message> {
    let mut details = Column::new().spacing(spacing::XXS).push(
        Image::new(Handle::from_path(PathBuf::from(&photo.src)))
            .width(Length::Fill)
            .height(sizing::PHOTO_THUMB_HEIGHT)
            .content_fit(ContentFit::Cover),
    );

    if let Some(caption) = &photo.caption {
        details = details.push(Text::new(caption).size(typography::CAPTION));
    }
    if let Some(category) = &photo.category {
        details = details.push(
            Text::new(category)
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );
    }

    button(
        Container::new(details.padding(spacing::SM))
            .style(styles::container::card)
            .width(Length::Fill),
    )
    .on_press(Message::OpenImage(index))
    .padding(0.0)
    .width(Length::FillPortion(1))
    .style(styles::button::thumbnail)
    .into()
}

fn empty_state<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr(key))
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_400),
            }),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::XXL)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, category: Option<&str>) -> Video {
        Video {
            id: id.to_string(),
            title: id.to_string(),
            thumbnail: format!("{id}.jpg"),
            url: format!("https://example.invalid/{id}"),
            category: category.map(str::to_string),
            ..Video::default()
        }
    }

    fn image(id: &str, category: Option<&str>) -> GalleryImage {
        GalleryImage {
            id: id.to_string(),
            src: format!("{id}.jpg"),
            alt: id.to_string(),
            caption: None,
            category: category.map(str::to_string),
        }
    }

    fn state() -> GalleryState {
        GalleryState::new(
            vec![video("v1", Some("Symphony")), video("v2", Some("Opera"))],
            vec![image("p1", Some("Portrait")), image("p2", Some("Event"))],
        )
    }

    #[test]
    fn open_video_resolves_filtered_position() {
        let mut gallery = state();
        update(&mut gallery, Message::SetVideoFilter("Opera".to_string()));
        update(&mut gallery, Message::OpenVideo(0));
        assert_eq!(gallery.modal().map(|v| v.id.as_str()), Some("v2"));
    }

    #[test]
    fn open_video_out_of_range_is_ignored() {
        let mut gallery = state();
        update(&mut gallery, Message::OpenVideo(17));
        assert!(gallery.modal().is_none());
    }

    #[test]
    fn open_image_captures_index() {
        let mut gallery = state();
        update(&mut gallery, Message::OpenImage(1));
        let selection = gallery.lightbox().expect("lightbox should open");
        assert_eq!(selection.index, 1);
        assert_eq!(selection.image.id, "p2");
    }

    #[test]
    fn close_overlays_clears_both() {
        let mut gallery = state();
        update(&mut gallery, Message::OpenVideo(0));
        update(&mut gallery, Message::OpenImage(0));
        update(&mut gallery, Message::CloseOverlays);
        assert!(gallery.modal().is_none());
        assert!(gallery.lightbox().is_none());
    }

    #[test]
    fn chip_label_all_clears_filter() {
        let mut gallery = state();
        update(&mut gallery, Message::SetPhotoFilter("Portrait".to_string()));
        assert!(gallery.photo_filter().is_active());
        update(&mut gallery, Message::SetPhotoFilter("all".to_string()));
        assert!(!gallery.photo_filter().is_active());
    }

    #[test]
    fn step_message_walks_the_filtered_sequence() {
        let mut gallery = state();
        update(&mut gallery, Message::OpenImage(0));
        update(&mut gallery, Message::StepImage(Direction::Next));
        assert_eq!(gallery.lightbox().map(|s| s.index), Some(1));
        update(&mut gallery, Message::StepImage(Direction::Next));
        assert_eq!(gallery.lightbox().map(|s| s.index), Some(0));
    }
}
