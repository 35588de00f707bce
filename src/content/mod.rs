// SPDX-License-Identifier: MPL-2.0
//! The Content Store: immutable, locale-keyed conductor datasets.
//!
//! One TOML document per locale is embedded at compile time under
//! `assets/content/`. The store is loaded whole at startup and never
//! mutated; lookups for a locale without a dataset fall back to the
//! default locale so the UI always has a complete profile to render.

pub mod types;

pub use types::{
    Affiliation, BiographySection, Concert, ConcertKind, ConductorProfile, GalleryImage,
    PressQuote, SocialLink, SocialPlatform, Video,
};

use crate::config::defaults::DEFAULT_LOCALE;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Dataset;

/// All locale datasets, loaded once at startup.
#[derive(Debug)]
pub struct ContentStore {
    profiles: HashMap<LanguageIdentifier, ConductorProfile>,
    default_locale: LanguageIdentifier,
}

impl ContentStore {
    /// Loads every embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the default locale's dataset is missing or does
    /// not parse; other locales are skipped with a fallback at lookup time.
    pub fn load() -> Result<Self> {
        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .map_err(|_| Error::Content("invalid default locale".to_string()))?;
        let mut profiles = HashMap::new();

        for file in Dataset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".toml") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Dataset::get(filename) {
                        let text = String::from_utf8_lossy(content.data.as_ref()).to_string();
                        match toml::from_str::<ConductorProfile>(&text) {
                            Ok(profile) => {
                                profiles.insert(locale, profile);
                            }
                            Err(err) if locale == default_locale => {
                                return Err(Error::Content(format!(
                                    "default dataset {}: {}",
                                    filename, err
                                )));
                            }
                            Err(_) => {
                                // Non-default dataset is unusable; lookups
                                // for this locale fall back to the default.
                            }
                        }
                    }
                }
            }
        }

        if !profiles.contains_key(&default_locale) {
            return Err(Error::Content(format!(
                "no dataset for default locale {}",
                default_locale
            )));
        }

        Ok(Self {
            profiles,
            default_locale,
        })
    }

    /// A store holding only an empty default profile. Used as a last-resort
    /// stand-in so the application can still open a window and report the
    /// load failure.
    #[must_use]
    pub fn fallback() -> Self {
        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let mut profiles = HashMap::new();
        profiles.insert(default_locale.clone(), ConductorProfile::default());
        Self {
            profiles,
            default_locale,
        }
    }

    /// Returns the profile for `locale`, falling back to the default
    /// locale's profile when no dataset exists for it.
    #[must_use]
    pub fn profile(&self, locale: &LanguageIdentifier) -> &ConductorProfile {
        self.profiles
            .get(locale)
            .or_else(|| self.profiles.get(&self.default_locale))
            .expect("default profile is a load invariant")
    }

    /// Whether a dataset was loaded for `locale` itself (no fallback).
    #[must_use]
    pub fn has_locale(&self, locale: &LanguageIdentifier) -> bool {
        self.profiles.contains_key(locale)
    }

    #[must_use]
    pub fn default_locale(&self) -> &LanguageIdentifier {
        &self.default_locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_datasets_load() {
        let store = ContentStore::load().expect("embedded datasets should parse");
        assert!(store.has_locale(&"en".parse().unwrap()));
        assert!(store.has_locale(&"el".parse().unwrap()));
    }

    #[test]
    fn default_dataset_has_media() {
        let store = ContentStore::load().expect("embedded datasets should parse");
        let profile = store.profile(&"en".parse().unwrap());
        assert!(!profile.videos.is_empty());
        assert!(!profile.gallery.is_empty());
        assert!(!profile.name.is_empty());
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let store = ContentStore::load().expect("embedded datasets should parse");
        let unknown: LanguageIdentifier = "fr".parse().unwrap();
        assert!(!store.has_locale(&unknown));
        assert_eq!(store.profile(&unknown), store.profile(store.default_locale()));
    }

    #[test]
    fn localized_datasets_share_entity_ids() {
        let store = ContentStore::load().expect("embedded datasets should parse");
        let en = store.profile(&"en".parse().unwrap());
        let el = store.profile(&"el".parse().unwrap());
        let en_ids: Vec<&str> = en.videos.iter().map(|v| v.id.as_str()).collect();
        let el_ids: Vec<&str> = el.videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(en_ids, el_ids);
    }

    #[test]
    fn fallback_store_always_resolves() {
        let store = ContentStore::fallback();
        let profile = store.profile(&"el".parse().unwrap());
        assert!(profile.videos.is_empty());
    }
}
