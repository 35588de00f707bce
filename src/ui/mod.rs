// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each screen follows the same shape: a `Message` enum for its
//! interactions, an `update` that maps messages onto state (returning
//! an `Event` when the parent must react), and a `view` that renders
//! from borrowed state.

pub mod biography;
pub mod concerts;
pub mod contact;
pub mod design_tokens;
pub mod home;
pub mod icons;
pub mod media;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
