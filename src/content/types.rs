// SPDX-License-Identifier: MPL-2.0
//! Entity types for the conductor's content dataset.
//!
//! All types are plain immutable records deserialized from the embedded
//! per-locale TOML documents. Nothing here is ever mutated after load.

use serde::Deserialize;

/// A performance video.
///
/// `url` typically points at a streaming embed; playback itself is not a
/// concern of this application, only presentation of the entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub thumbnail: String,
    pub url: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub ensemble: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A photograph in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Repertoire class of a concert entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConcertKind {
    Opera,
    #[default]
    Symphony,
    Ballet,
    Chamber,
    Contemporary,
    Recording,
}

impl ConcertKind {
    /// Returns the i18n message key for this kind's display label.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ConcertKind::Opera => "concert-kind-opera",
            ConcertKind::Symphony => "concert-kind-symphony",
            ConcertKind::Ballet => "concert-kind-ballet",
            ConcertKind::Chamber => "concert-kind-chamber",
            ConcertKind::Contemporary => "concert-kind-contemporary",
            ConcertKind::Recording => "concert-kind-recording",
        }
    }
}

/// A concert listing, upcoming or past.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Concert {
    pub id: String,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub organization_logo: Option<String>,
    #[serde(default)]
    pub kind: ConcertKind,
    /// Concert date in `YYYY-MM-DD` form.
    pub date: String,
    pub venue: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub programme: Vec<String>,
    #[serde(default)]
    pub upcoming: bool,
}

/// A titled section of the long-form biography.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct BiographySection {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A press quote shown on the biography screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct PressQuote {
    pub quote: String,
    pub source: String,
    #[serde(default)]
    pub year: Option<String>,
}

/// An orchestra, ensemble, or institution the conductor is affiliated with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Affiliation {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SocialPlatform {
    Instagram,
    Youtube,
    Facebook,
    Twitter,
    Linkedin,
    #[default]
    Email,
}

impl SocialPlatform {
    /// Short display label; platform names are not translated.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Root record of one locale's dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ConductorProfile {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub hero_image: String,
    pub biography_short: String,
    pub biography: String,
    #[serde(default)]
    pub biography_sections: Vec<BiographySection>,
    #[serde(default)]
    pub press_quotes: Vec<PressQuote>,
    #[serde(default)]
    pub concerts: Vec<Concert>,
    #[serde(default)]
    pub videos: Vec<Video>,
    /// Photo gallery; absent in a dataset is the same as empty.
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub affiliations: Vec<Affiliation>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    pub contact_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concert_kind_parses_kebab_case() {
        let concert: Concert = toml::from_str(
            r#"
            id = "c1"
            title = "Winterreise"
            organization = "City Opera"
            kind = "chamber"
            date = "2025-11-02"
            venue = "Recital Hall"
            "#,
        )
        .expect("concert should parse");
        assert_eq!(concert.kind, ConcertKind::Chamber);
        assert!(!concert.upcoming);
        assert!(concert.programme.is_empty());
    }

    #[test]
    fn video_optional_fields_default_to_none() {
        let video: Video = toml::from_str(
            r#"
            id = "v1"
            title = "Symphony No. 5"
            thumbnail = "thumb.jpg"
            url = "https://example.invalid/embed/1"
            "#,
        )
        .expect("video should parse");
        assert!(video.subtitle.is_none());
        assert!(video.category.is_none());
    }

    #[test]
    fn profile_without_gallery_has_empty_gallery() {
        let profile: ConductorProfile = toml::from_str(
            r#"
            name = "Test Conductor"
            hero_image = "hero.jpg"
            biography_short = "short"
            biography = "long"
            contact_email = "test@example.invalid"
            "#,
        )
        .expect("profile should parse");
        assert!(profile.gallery.is_empty());
        assert!(profile.videos.is_empty());
    }
}
