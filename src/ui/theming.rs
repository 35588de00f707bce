// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.

use serde::{Deserialize, Serialize};

/// User-selectable theme mode, persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the OS preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves whether this mode renders dark.
    ///
    /// For `System`, the OS preference is detected; detection errors
    /// default to dark, which is the friendlier failure for a media
    /// browser.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The Iced theme for this mode.
    #[must_use]
    pub fn theme(&self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn serializes_kebab_case() {
        #[derive(Serialize)]
        struct Wrapper {
            theme_mode: ThemeMode,
        }
        let toml = toml::to_string(&Wrapper {
            theme_mode: ThemeMode::System,
        })
        .expect("serialize");
        assert!(toml.contains("theme_mode = \"system\""));
    }
}
