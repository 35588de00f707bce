// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Fallback locale used when neither CLI, config, nor the OS locale
/// matches an available translation.
pub const DEFAULT_LOCALE: &str = "en";

/// Interval between notification auto-dismiss checks, in milliseconds.
pub const NOTIFICATION_TICK_MS: u64 = 250;
