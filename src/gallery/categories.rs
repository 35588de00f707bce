// SPDX-License-Identifier: MPL-2.0
//! Category index derivation.

use super::MediaItem;

/// The catch-all category label, always offered first.
pub const ALL_CATEGORY: &str = "all";

/// Returns the ordered category labels present in `items`.
///
/// The result always starts with [`ALL_CATEGORY`]; the remaining labels
/// are the distinct, non-empty categories in order of first appearance,
/// each exactly once. Items without a category contribute nothing.
#[must_use]
pub fn categories_of<T: MediaItem>(items: &[T]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for item in items {
        if let Some(category) = item.category() {
            if !category.is_empty() && !categories.iter().any(|known| known == category) {
                categories.push(category.to_string());
            }
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GalleryImage;

    fn image(id: &str, category: Option<&str>) -> GalleryImage {
        GalleryImage {
            id: id.to_string(),
            src: format!("{id}.jpg"),
            alt: id.to_string(),
            caption: None,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn empty_list_yields_only_all() {
        let items: Vec<GalleryImage> = Vec::new();
        assert_eq!(categories_of(&items), vec![ALL_CATEGORY.to_string()]);
    }

    #[test]
    fn all_is_always_first() {
        let items = vec![image("a", Some("Performance"))];
        assert_eq!(categories_of(&items)[0], ALL_CATEGORY);
    }

    #[test]
    fn preserves_first_seen_order_without_duplicates() {
        let items = vec![
            image("a", Some("Performance")),
            image("b", Some("Portrait")),
            image("c", Some("Performance")),
            image("d", Some("Rehearsal")),
        ];
        assert_eq!(
            categories_of(&items),
            vec!["all", "Performance", "Portrait", "Rehearsal"]
        );
    }

    #[test]
    fn skips_missing_and_empty_categories() {
        let items = vec![
            image("a", None),
            image("b", Some("")),
            image("c", Some("Event")),
        ];
        assert_eq!(categories_of(&items), vec!["all", "Event"]);
    }

    #[test]
    fn categories_are_case_sensitive() {
        let items = vec![image("a", Some("portrait")), image("b", Some("Portrait"))];
        assert_eq!(categories_of(&items), vec!["all", "portrait", "Portrait"]);
    }
}
