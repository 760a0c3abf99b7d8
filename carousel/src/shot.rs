//! Carousel entries.

use serde::Deserialize;

/// One screen in the carousel.
///
/// `image` is an opaque asset reference; the page decides how to load it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Shot {
    /// Unique key, stable across renders
    pub key: String,
    /// Display title
    pub title: String,
    /// One-line description shown under the title
    pub subtitle: String,
    /// Image path relative to the site root
    pub image: String,
}

impl Shot {
    /// Build a shot from its four fields.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            image: image.into(),
        }
    }

    /// Accessible label for controls that jump to this shot.
    pub fn jump_label(&self) -> String {
        format!("Go to {}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_label_uses_title() {
        let shot = Shot::new("scan", "Scan teamsheet", "Upload.", "screens/scanpage.png");
        assert_eq!(shot.jump_label(), "Go to Scan teamsheet");
    }
}
