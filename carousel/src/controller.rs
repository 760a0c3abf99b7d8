//! The carousel controller.
//!
//! [`Carousel`] is the single owner of "which shot is selected". Views never
//! keep their own copy of the index; they ask the controller (or one of the
//! projections in [`crate::projection`]) every time they render.

use crate::index::{step_index, wrap_index};
use crate::shot::Shot;

/// Ordered, immutable list of shots plus the selected position.
///
/// `selected` is `Some` exactly when `shots` is non-empty, and always a
/// valid index into `shots`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Carousel {
    shots: Vec<Shot>,
    selected: Option<usize>,
}

impl Carousel {
    /// Create a controller over `shots`, selecting the first one.
    ///
    /// An empty list yields a controller with no selection; every
    /// navigation call on it is a no-op.
    pub fn new(shots: Vec<Shot>) -> Self {
        let selected = if shots.is_empty() { None } else { Some(0) };
        Self { shots, selected }
    }

    /// Number of shots.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// True when there is nothing to select.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// The full ordered sequence, for enumerating dots and thumbnails.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Selected position, `None` for an empty carousel.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected shot, `None` for an empty carousel.
    pub fn current(&self) -> Option<&Shot> {
        self.selected.and_then(|idx| self.shots.get(idx))
    }

    /// Whether `index` is the selected position.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Advance one shot, wrapping from the last back to the first.
    pub fn next(&mut self) {
        self.step(1);
    }

    /// Go back one shot, wrapping from the first to the last.
    pub fn previous(&mut self) {
        self.step(-1);
    }

    /// Jump to `requested`, wrapping negative and out-of-range values.
    ///
    /// `go_to(-1)` selects the last shot; `go_to(len)` selects the first.
    pub fn go_to(&mut self, requested: i64) {
        if let Some(target) = wrap_index(requested, self.shots.len()) {
            self.set(target);
        }
    }

    /// Jump to an enumerated position (a dot or thumbnail), wrapping like
    /// [`Carousel::go_to`].
    pub fn select(&mut self, position: usize) {
        if !self.shots.is_empty() {
            self.set(position % self.shots.len());
        }
    }

    fn step(&mut self, delta: i64) {
        let Some(from) = self.selected else {
            return;
        };
        if let Some(target) = step_index(from, delta, self.shots.len()) {
            self.set(target);
        }
    }

    fn set(&mut self, target: usize) {
        tracing::trace!(from = ?self.selected, to = target, "carousel selection changed");
        self.selected = Some(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shots(n: usize) -> Vec<Shot> {
        (0..n)
            .map(|i| {
                Shot::new(
                    format!("shot-{i}"),
                    format!("Shot {i}"),
                    format!("Subtitle {i}"),
                    format!("screens/{i}.png"),
                )
            })
            .collect()
    }

    #[test]
    fn starts_at_first_shot() {
        let carousel = Carousel::new(shots(3));
        assert_eq!(carousel.selected_index(), Some(0));
        assert_eq!(carousel.current().map(|s| s.key.as_str()), Some("shot-0"));
        assert_eq!(carousel.len(), 3);
        assert!(!carousel.is_empty());
    }

    #[test]
    fn empty_carousel_has_no_selection() {
        let mut carousel = Carousel::new(Vec::new());
        assert!(carousel.is_empty());
        assert_eq!(carousel.current(), None);

        carousel.next();
        carousel.previous();
        carousel.go_to(5);
        carousel.go_to(-3);
        carousel.select(2);

        assert_eq!(carousel.selected_index(), None);
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel, Carousel::default());
    }

    #[test]
    fn next_and_previous_wrap_at_the_ends() {
        let mut carousel = Carousel::new(shots(3));
        carousel.previous();
        assert_eq!(carousel.selected_index(), Some(2));
        carousel.next();
        assert_eq!(carousel.selected_index(), Some(0));
    }

    #[test]
    fn single_shot_stays_put() {
        let mut carousel = Carousel::new(shots(1));
        carousel.next();
        assert_eq!(carousel.selected_index(), Some(0));
        carousel.previous();
        assert_eq!(carousel.selected_index(), Some(0));
        carousel.go_to(-42);
        assert_eq!(carousel.selected_index(), Some(0));
    }

    #[test]
    fn select_wraps_overflowing_positions() {
        let mut carousel = Carousel::new(shots(4));
        carousel.select(2);
        assert_eq!(carousel.selected_index(), Some(2));
        carousel.select(9);
        assert_eq!(carousel.selected_index(), Some(1));
        assert!(carousel.is_selected(1));
        assert!(!carousel.is_selected(2));
    }

    #[test]
    fn shots_keep_their_order() {
        let mut carousel = Carousel::new(shots(3));
        carousel.go_to(2);
        let keys: Vec<&str> = carousel.shots().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["shot-0", "shot-1", "shot-2"]);
    }
}
