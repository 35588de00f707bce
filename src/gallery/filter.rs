// SPDX-License-Identifier: MPL-2.0
//! Category filtering for media lists.

use super::categories::ALL_CATEGORY;
use super::MediaItem;

/// The active filter selection of one tab.
///
/// A selection naming a category that no longer exists in the data is
/// not an error; it simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Catch-all: every item matches.
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Category(String),
}

impl CategoryFilter {
    /// Builds a selection from a chip label, mapping the catch-all label
    /// back to [`CategoryFilter::All`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }

    /// The chip label for this selection.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORY,
            CategoryFilter::Category(category) => category,
        }
    }

    /// Returns `true` if this selection narrows the list (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, CategoryFilter::All)
    }

    /// Returns `true` if `item` matches this selection.
    #[must_use]
    pub fn matches<T: MediaItem>(&self, item: &T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => item.category() == Some(category.as_str()),
        }
    }
}

/// Returns the ordered subsequence of `items` matching `selection`.
///
/// With [`CategoryFilter::All`] every item is returned, in order. Pure
/// and deterministic; safe to call on every render.
#[must_use]
pub fn by_category<'a, T: MediaItem>(items: &'a [T], selection: &CategoryFilter) -> Vec<&'a T> {
    items.iter().filter(|item| selection.matches(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Video;

    fn video(id: &str, category: Option<&str>) -> Video {
        Video {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: None,
            thumbnail: format!("{id}.jpg"),
            url: format!("https://example.invalid/{id}"),
            duration: None,
            ensemble: None,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn all_returns_every_item_in_order() {
        let items = vec![
            video("a", Some("Symphony")),
            video("b", None),
            video("c", Some("Opera")),
        ];
        let filtered = by_category(&items, &CategoryFilter::All);
        let ids: Vec<&str> = filtered.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn concrete_selection_keeps_only_exact_matches() {
        let items = vec![
            video("a", Some("Symphony")),
            video("b", Some("Opera")),
            video("c", Some("Symphony")),
        ];
        let filtered = by_category(&items, &CategoryFilter::from_label("Symphony"));
        let ids: Vec<&str> = filtered.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn match_is_case_sensitive() {
        let items = vec![video("a", Some("Symphony"))];
        let filtered = by_category(&items, &CategoryFilter::from_label("symphony"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn stale_selection_yields_empty_result() {
        let items = vec![video("a", Some("Symphony"))];
        let filtered = by_category(&items, &CategoryFilter::from_label("Ballet"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn from_label_round_trips() {
        assert_eq!(CategoryFilter::from_label("all"), CategoryFilter::All);
        assert!(!CategoryFilter::from_label("all").is_active());
        let concrete = CategoryFilter::from_label("Portrait");
        assert!(concrete.is_active());
        assert_eq!(concrete.label(), "Portrait");
    }
}
