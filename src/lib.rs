// SPDX-License-Identifier: MPL-2.0
//! `podium` is a bilingual press-kit and media browser for a
//! classical-music conductor, built with the Iced GUI framework.
//!
//! It presents a hero screen, biography, concert listings, a contact
//! form, and a media gallery with category filtering, a video modal,
//! and a circular-navigation image lightbox, localized in English and
//! Greek with Fluent.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
