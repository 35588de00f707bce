// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar plus the current screen, then stacks overlays on
//! top: the media screen's video modal or image lightbox, and the toast
//! layer.

use super::{Message, Screen};
use crate::content::ConductorProfile;
use crate::gallery::GalleryState;
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Manager;
use crate::ui::{biography, concerts, contact, home, media, notifications};
use iced::widget::{Column, Container, Stack};
use iced::{alignment::Horizontal, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub profile: &'a ConductorProfile,
    pub gallery: &'a GalleryState,
    pub contact: &'a contact::State,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(ctx.profile, ctx.i18n).map(Message::Home),
        Screen::Biography => biography::view(ctx.profile, ctx.i18n),
        Screen::Media => media::view(ctx.gallery, ctx.i18n).map(Message::Media),
        Screen::Concerts => concerts::view(ctx.profile, ctx.i18n),
        Screen::Contact => {
            contact::view(ctx.contact, ctx.profile, ctx.i18n).map(Message::Contact)
        }
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        name: &ctx.profile.name,
    })
    .map(Message::Navbar);

    let base = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    // Overlays belong to the media screen, but an open overlay is
    // deliberately independent of the active tab and screen; only the
    // media screen can reach them through normal flow.
    if ctx.screen == Screen::Media {
        if let Some(video) = ctx.gallery.modal() {
            layers = layers.push(media::video_modal::view(video, ctx.i18n).map(Message::Media));
        }
        if let Some(info) = ctx.gallery.lightbox_info() {
            layers = layers.push(media::lightbox::view(info, ctx.i18n).map(Message::Media));
        }
    }

    if !ctx.notifications.is_empty() {
        layers = layers.push(
            Container::new(
                notifications::view(ctx.notifications, ctx.i18n).map(Message::Notification),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Right),
        );
    }

    layers.into()
}
