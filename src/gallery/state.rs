// SPDX-License-Identifier: MPL-2.0
//! Browsing state machine for the media screen.
//!
//! `GalleryState` is the single source of truth for which tab is
//! active, which category filter each tab has selected, which video is
//! open in the modal, and which image is open in the lightbox together
//! with its position in the currently filtered photo sequence.
//!
//! All transitions run to completion synchronously; nothing here
//! suspends or fails. The one guarded edge is stepping the lightbox
//! while the filtered photo list is empty, which is a no-op instead of
//! a division by zero.

use super::categories::categories_of;
use super::filter::{by_category, CategoryFilter};
use crate::content::{ConductorProfile, GalleryImage, Video};

/// Top-level mode switch of the media screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaTab {
    #[default]
    Videos,
    Photos,
}

/// Lightbox stepping direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The image currently open in the lightbox and its position in the
/// filtered photo sequence at the time it was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxSelection {
    pub image: GalleryImage,
    pub index: usize,
}

/// Read-only snapshot of the lightbox for rendering.
///
/// Contains everything the overlay needs without direct access to the
/// photo list: the selected image, the 1-based position, and the total
/// filtered-photo count for the "position / total" counter. Prev/next
/// controls should be suppressed when `total <= 1`.
#[derive(Debug, Clone, Copy)]
pub struct LightboxInfo<'a> {
    pub image: &'a GalleryImage,
    pub position: usize,
    pub total: usize,
}

/// Browsing state for the media screen.
///
/// Owns immutable copies of the video and photo lists of the active
/// dataset; swapping datasets (a locale switch) rebuilds the state with
/// its defaults, mirroring a remount.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    videos: Vec<Video>,
    photos: Vec<GalleryImage>,
    active_tab: MediaTab,
    video_filter: CategoryFilter,
    photo_filter: CategoryFilter,
    modal: Option<Video>,
    lightbox: Option<LightboxSelection>,
}

impl GalleryState {
    /// Creates the initial state: videos tab, both filters on the
    /// catch-all, no overlay open.
    #[must_use]
    pub fn new(videos: Vec<Video>, photos: Vec<GalleryImage>) -> Self {
        Self {
            videos,
            photos,
            active_tab: MediaTab::default(),
            video_filter: CategoryFilter::default(),
            photo_filter: CategoryFilter::default(),
            modal: None,
            lightbox: None,
        }
    }

    /// Builds a fresh state from a profile's media lists.
    #[must_use]
    pub fn from_profile(profile: &ConductorProfile) -> Self {
        Self::new(profile.videos.clone(), profile.gallery.clone())
    }

    #[must_use]
    pub fn active_tab(&self) -> MediaTab {
        self.active_tab
    }

    /// Switches the active tab. Filters and any open overlay are left
    /// untouched; they are independent of tab visibility.
    pub fn select_tab(&mut self, tab: MediaTab) {
        self.active_tab = tab;
    }

    #[must_use]
    pub fn video_filter(&self) -> &CategoryFilter {
        &self.video_filter
    }

    #[must_use]
    pub fn photo_filter(&self) -> &CategoryFilter {
        &self.photo_filter
    }

    /// Replaces the video tab's filter selection. The photo filter and
    /// any open overlay are unaffected.
    pub fn set_video_filter(&mut self, selection: CategoryFilter) {
        self.video_filter = selection;
    }

    /// Replaces the photo tab's filter selection. Does not close an
    /// open lightbox; stepping re-derives against the new sequence.
    pub fn set_photo_filter(&mut self, selection: CategoryFilter) {
        self.photo_filter = selection;
    }

    /// Ordered category chips for the video tab, catch-all first.
    #[must_use]
    pub fn video_categories(&self) -> Vec<String> {
        categories_of(&self.videos)
    }

    /// Ordered category chips for the photo tab, catch-all first.
    #[must_use]
    pub fn photo_categories(&self) -> Vec<String> {
        categories_of(&self.photos)
    }

    /// The video sequence narrowed by the current video filter.
    #[must_use]
    pub fn filtered_videos(&self) -> Vec<&Video> {
        by_category(&self.videos, &self.video_filter)
    }

    /// The photo sequence narrowed by the current photo filter.
    #[must_use]
    pub fn filtered_photos(&self) -> Vec<&GalleryImage> {
        by_category(&self.photos, &self.photo_filter)
    }

    #[must_use]
    pub fn modal(&self) -> Option<&Video> {
        self.modal.as_ref()
    }

    /// Opens the video modal on `video`.
    pub fn open_video(&mut self, video: Video) {
        self.modal = Some(video);
    }

    /// Closes the video modal. Filters and tab are untouched.
    pub fn close_video(&mut self) {
        self.modal = None;
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&LightboxSelection> {
        self.lightbox.as_ref()
    }

    /// Opens the lightbox on `image`, where `index` is the image's
    /// position in the currently filtered photo sequence as rendered by
    /// the caller.
    pub fn open_image(&mut self, image: GalleryImage, index: usize) {
        self.lightbox = Some(LightboxSelection { image, index });
    }

    /// Closes the lightbox. Filters and tab are untouched.
    pub fn close_image(&mut self) {
        self.lightbox = None;
    }

    /// Closes whichever overlays are open (escape / backdrop).
    pub fn close_overlays(&mut self) {
        self.modal = None;
        self.lightbox = None;
    }

    /// Steps the lightbox selection with wraparound over the current
    /// filtered photo sequence.
    ///
    /// No-op when the lightbox is closed or the filtered sequence is
    /// empty (everything filtered out from under an open lightbox); in
    /// the latter case the lightbox stays on its last known image. A
    /// stale index is stepped modulo the current length rather than
    /// rejected.
    pub fn step_image(&mut self, direction: Direction) {
        let Some(selection) = &self.lightbox else {
            return;
        };

        let photos = by_category(&self.photos, &self.photo_filter);
        let length = photos.len();
        if length == 0 {
            return;
        }

        let index = match direction {
            Direction::Next => (selection.index + 1) % length,
            Direction::Previous => (selection.index + length - 1) % length,
        };

        self.lightbox = Some(LightboxSelection {
            image: photos[index].clone(),
            index,
        });
    }

    /// Snapshot of the lightbox for rendering, or `None` when closed.
    #[must_use]
    pub fn lightbox_info(&self) -> Option<LightboxInfo<'_>> {
        self.lightbox.as_ref().map(|selection| LightboxInfo {
            image: &selection.image,
            position: selection.index + 1,
            total: self.filtered_photos().len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn image(id: &str, category: Option<&str>) -> GalleryImage {
        GalleryImage {
            id: id.to_string(),
            src: format!("{id}.jpg"),
            alt: id.to_string(),
            caption: None,
            category: category.map(str::to_string),
        }
    }

    fn performance_portrait_state() -> GalleryState {
        GalleryState::new(
            vec![video("v1", Some("Symphony"))],
            vec![
                image("a", Some("Performance")),
                image("b", Some("Portrait")),
                image("c", Some("Performance")),
            ],
        )
    }

    #[test]
    fn initial_state_has_defaults() {
        let state = performance_portrait_state();
        assert_eq!(state.active_tab(), MediaTab::Videos);
        assert!(!state.video_filter().is_active());
        assert!(!state.photo_filter().is_active());
        assert!(state.modal().is_none());
        assert!(state.lightbox().is_none());
    }

    #[test]
    fn filtered_navigation_walkthrough() {
        // Filter to Performance, open the first match, step twice.
        let mut state = performance_portrait_state();
        assert_eq!(
            state.photo_categories(),
            vec!["all", "Performance", "Portrait"]
        );

        state.set_photo_filter(CategoryFilter::from_label("Performance"));
        let filtered: Vec<&str> = state
            .filtered_photos()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(filtered, vec!["a", "c"]);

        let first = state.filtered_photos()[0].clone();
        state.open_image(first, 0);

        state.step_image(Direction::Next);
        let selection = state.lightbox().expect("lightbox should stay open");
        assert_eq!(selection.image.id, "c");
        assert_eq!(selection.index, 1);

        state.step_image(Direction::Next);
        let selection = state.lightbox().expect("lightbox should stay open");
        assert_eq!(selection.image.id, "a");
        assert_eq!(selection.index, 0);
    }

    #[test]
    fn step_next_then_previous_round_trips() {
        let mut state = performance_portrait_state();
        let first = state.photos[0].clone();
        state.open_image(first, 0);

        state.step_image(Direction::Next);
        state.step_image(Direction::Previous);
        assert_eq!(state.lightbox().map(|s| s.index), Some(0));
    }

    #[test]
    fn stepping_next_n_times_closes_the_cycle() {
        let mut state = performance_portrait_state();
        let count = state.filtered_photos().len();
        let first = state.photos[0].clone();
        state.open_image(first, 0);

        for _ in 0..count {
            state.step_image(Direction::Next);
        }
        assert_eq!(state.lightbox().map(|s| s.index), Some(0));
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut state = performance_portrait_state();
        let first = state.photos[0].clone();
        state.open_image(first, 0);

        state.step_image(Direction::Previous);
        let selection = state.lightbox().expect("lightbox should stay open");
        assert_eq!(selection.index, 2);
        assert_eq!(selection.image.id, "c");
    }

    #[test]
    fn step_on_empty_filtered_list_is_a_no_op() {
        let mut state = performance_portrait_state();
        let first = state.photos[0].clone();
        state.open_image(first.clone(), 0);

        // Filter everything out from under the open lightbox.
        state.set_photo_filter(CategoryFilter::from_label("Nonexistent"));
        assert!(state.filtered_photos().is_empty());

        state.step_image(Direction::Next);
        let selection = state.lightbox().expect("lightbox should stay open");
        assert_eq!(selection.image, first);
        assert_eq!(selection.index, 0);
    }

    #[test]
    fn step_with_stale_index_recomputes_modulo_current_length() {
        let mut state = performance_portrait_state();
        let last = state.photos[2].clone();
        state.open_image(last, 2);

        // Narrow to Portrait: the open selection's index now exceeds
        // the filtered length; stepping must still land in bounds.
        state.set_photo_filter(CategoryFilter::from_label("Portrait"));
        state.step_image(Direction::Next);
        let selection = state.lightbox().expect("lightbox should stay open");
        assert_eq!(selection.index, 0);
        assert_eq!(selection.image.id, "b");
    }

    #[test]
    fn tab_switch_keeps_overlays_and_filters() {
        let mut state = performance_portrait_state();
        state.set_video_filter(CategoryFilter::from_label("Symphony"));
        let first_video = state.videos[0].clone();
        state.open_video(first_video);

        state.select_tab(MediaTab::Photos);
        assert_eq!(state.active_tab(), MediaTab::Photos);
        assert!(state.modal().is_some());
        assert!(state.video_filter().is_active());
    }

    #[test]
    fn filters_are_independent_per_tab() {
        let mut state = performance_portrait_state();
        state.set_video_filter(CategoryFilter::from_label("Symphony"));
        assert!(!state.photo_filter().is_active());

        state.set_photo_filter(CategoryFilter::from_label("Portrait"));
        assert_eq!(state.video_filter().label(), "Symphony");
    }

    #[test]
    fn closing_overlays_never_touches_filters_or_tab() {
        let mut state = performance_portrait_state();
        state.select_tab(MediaTab::Photos);
        state.set_photo_filter(CategoryFilter::from_label("Performance"));
        let first = state.photos[0].clone();
        state.open_image(first, 0);

        state.close_overlays();
        assert!(state.lightbox().is_none());
        assert_eq!(state.active_tab(), MediaTab::Photos);
        assert_eq!(state.photo_filter().label(), "Performance");
    }

    #[test]
    fn stale_video_filter_yields_empty_list() {
        let mut state = performance_portrait_state();
        state.set_video_filter(CategoryFilter::from_label("Ballet"));
        assert!(state.filtered_videos().is_empty());
        assert_eq!(state.video_categories(), vec!["all", "Symphony"]);
    }

    #[test]
    fn lightbox_info_reports_position_and_total() {
        let mut state = performance_portrait_state();
        state.set_photo_filter(CategoryFilter::from_label("Performance"));
        let first = state.filtered_photos()[0].clone();
        state.open_image(first, 0);
        state.step_image(Direction::Next);

        let info = state.lightbox_info().expect("lightbox is open");
        assert_eq!(info.position, 2);
        assert_eq!(info.total, 2);
        assert_eq!(info.image.id, "c");
    }

    #[test]
    fn single_image_steps_back_to_itself() {
        let mut state = GalleryState::new(Vec::new(), vec![image("only", Some("Portrait"))]);
        let only = state.photos[0].clone();
        state.open_image(only.clone(), 0);

        state.step_image(Direction::Next);
        assert_eq!(state.lightbox().map(|s| s.index), Some(0));
        state.step_image(Direction::Previous);
        assert_eq!(
            state.lightbox().map(|s| s.image.clone()),
            Some(only)
        );
    }

    #[test]
    fn step_with_closed_lightbox_is_a_no_op() {
        let mut state = performance_portrait_state();
        state.step_image(Direction::Next);
        assert!(state.lightbox().is_none());
    }
}
