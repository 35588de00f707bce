// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Biography,
    Media,
    Concerts,
    Contact,
}

impl Screen {
    /// Returns the i18n message key for this screen's navigation label.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Screen::Home => "nav-home",
            Screen::Biography => "nav-biography",
            Screen::Media => "nav-media",
            Screen::Concerts => "nav-concerts",
            Screen::Contact => "nav-contact",
        }
    }
}
