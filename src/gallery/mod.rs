// SPDX-License-Identifier: MPL-2.0
//! Media gallery browsing core.
//!
//! This module owns everything the media screen needs that is not
//! rendering: deriving category labels ([`categories`]), narrowing item
//! lists to a category ([`filter`]), and the browsing state machine
//! itself ([`state`]) with its tab, per-tab filters, video modal, and
//! circular lightbox navigation.
//!
//! Everything here is pure, synchronous, in-memory computation over the
//! immutable Content Store data; the UI layer maps clicks and key
//! presses onto the transitions and re-reads the derived state on every
//! render.

pub mod categories;
pub mod filter;
pub mod state;

pub use categories::{categories_of, ALL_CATEGORY};
pub use filter::{by_category, CategoryFilter};
pub use state::{Direction, GalleryState, LightboxInfo, LightboxSelection, MediaTab};

use crate::content::{GalleryImage, Video};

/// Capability shared by every browsable media entity.
///
/// Identity is the `id`; navigation, however, is positional (index in
/// the current filtered ordered sequence), so the trait only needs to
/// expose what categorization and filtering consume.
pub trait MediaItem {
    fn id(&self) -> &str;
    fn category(&self) -> Option<&str>;
}

impl MediaItem for Video {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl MediaItem for GalleryImage {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
