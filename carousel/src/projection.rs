//! Read-only view models derived from a [`Carousel`].
//!
//! Each function here is a pure projection of `(shots, selected_index)`.
//! Results are owned so a UI closure can hold them past the borrow.

use std::fmt;

use crate::controller::Carousel;
use crate::shot::Shot;

/// `Step N / total` label for the walkthrough header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLabel {
    /// 1-based position of the selected shot
    pub position: usize,
    /// Number of shots
    pub total: usize,
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} / {}", self.position, self.total)
    }
}

/// One indicator dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    /// Position the dot jumps to
    pub index: usize,
    /// Key of the shot at that position
    pub key: String,
    /// `Go to <title>`
    pub aria_label: String,
    /// Whether this dot marks the selected shot
    pub active: bool,
}

/// One cell of the thumbnail grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Position the cell jumps to
    pub index: usize,
    /// The shot rendered in the cell
    pub shot: Shot,
    /// Whether this cell marks the selected shot
    pub active: bool,
}

impl Carousel {
    /// The shot for the large preview panel.
    pub fn preview(&self) -> Option<Shot> {
        self.current().cloned()
    }

    /// Step label, `None` for an empty carousel.
    pub fn step_label(&self) -> Option<StepLabel> {
        self.selected_index().map(|idx| StepLabel {
            position: idx + 1,
            total: self.len(),
        })
    }

    /// One dot per shot, in order.
    pub fn dots(&self) -> Vec<Dot> {
        self.shots()
            .iter()
            .enumerate()
            .map(|(index, shot)| Dot {
                index,
                key: shot.key.clone(),
                aria_label: shot.jump_label(),
                active: self.is_selected(index),
            })
            .collect()
    }

    /// One thumbnail per shot, in order.
    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        self.shots()
            .iter()
            .enumerate()
            .map(|(index, shot)| Thumbnail {
                index,
                shot: shot.clone(),
                active: self.is_selected(index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn carousel() -> Carousel {
        Carousel::new(vec![
            Shot::new("home", "Home", "Match creation.", "screens/home.png"),
            Shot::new("fixtures", "Fixtures", "Upcoming matches.", "screens/fixturelist.png"),
            Shot::new("scan", "Scan teamsheet", "Upload a photo.", "screens/scanpage.png"),
        ])
    }

    #[test]
    fn step_label_is_one_based() {
        let mut c = carousel();
        assert_eq!(c.step_label().map(|s| s.to_string()), Some("Step 1 / 3".to_string()));
        c.previous();
        assert_eq!(c.step_label(), Some(StepLabel { position: 3, total: 3 }));
    }

    #[test]
    fn dots_mark_only_the_selected_shot() {
        let mut c = carousel();
        c.go_to(1);
        assert_eq!(
            c.dots(),
            vec![
                Dot {
                    index: 0,
                    key: "home".into(),
                    aria_label: "Go to Home".into(),
                    active: false,
                },
                Dot {
                    index: 1,
                    key: "fixtures".into(),
                    aria_label: "Go to Fixtures".into(),
                    active: true,
                },
                Dot {
                    index: 2,
                    key: "scan".into(),
                    aria_label: "Go to Scan teamsheet".into(),
                    active: false,
                },
            ]
        );
    }

    #[test]
    fn thumbnails_follow_the_preview() {
        let mut c = carousel();
        c.next();
        c.next();
        let active: Vec<usize> = c
            .thumbnails()
            .into_iter()
            .filter(|t| t.active)
            .map(|t| t.index)
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(c.preview().map(|s| s.key), Some("scan".to_string()));
    }

    #[test]
    fn empty_projections_are_empty() {
        let c = Carousel::new(Vec::new());
        assert_eq!(c.preview(), None);
        assert_eq!(c.step_label(), None);
        assert!(c.dots().is_empty());
        assert!(c.thumbnails().is_empty());
    }
}
