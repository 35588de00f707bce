// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! The contact form, configuration warnings, and content fallbacks all
//! report through this module rather than a log file; feedback the user
//! cannot see is feedback that did not happen.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view;
