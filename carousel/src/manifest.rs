//! Shot manifest support.
//!
//! The landing page keeps its screens in `shots.toml`:
//!
//! ```toml
//! [[shot]]
//! key = "home"
//! title = "Home"
//! subtitle = "Instant Teamsheet Scanning and Match Creation."
//! image = "screens/home.png"
//! ```

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::controller::Carousel;
use crate::shot::Shot;

/// Reasons a manifest is rejected.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The text is not valid TOML or does not match the schema.
    #[error("failed to parse shot manifest: {0}")]
    Parse(#[from] toml::de::Error),
    /// A shot has a blank key.
    #[error("shot #{position} has an empty key")]
    EmptyKey {
        /// 0-based position in the manifest
        position: usize,
    },
    /// Two shots share a key.
    #[error("duplicate shot key `{key}`")]
    DuplicateKey {
        /// The repeated key
        key: String,
    },
    /// A shot has no image reference.
    #[error("shot `{key}` has no image")]
    MissingImage {
        /// Key of the offending shot
        key: String,
    },
}

/// Ordered list of shots, as written in `shots.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShotManifest {
    /// Shots in display order
    #[serde(rename = "shot")]
    pub shots: Vec<Shot>,
}

impl ShotManifest {
    /// Parse and validate a manifest.
    ///
    /// An empty document is valid and yields no shots.
    pub fn from_toml_str(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(content)?;
        if let Err(err) = manifest.validate() {
            tracing::warn!(error = %err, "rejected shot manifest");
            return Err(err);
        }
        tracing::debug!(shots = manifest.shots.len(), "loaded shot manifest");
        Ok(manifest)
    }

    /// Check key uniqueness and required fields.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();
        for (position, shot) in self.shots.iter().enumerate() {
            if shot.key.trim().is_empty() {
                return Err(ManifestError::EmptyKey { position });
            }
            if !seen.insert(shot.key.as_str()) {
                return Err(ManifestError::DuplicateKey {
                    key: shot.key.clone(),
                });
            }
            if shot.image.trim().is_empty() {
                return Err(ManifestError::MissingImage {
                    key: shot.key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Hand the shots to a fresh controller.
    pub fn into_carousel(self) -> Carousel {
        Carousel::new(self.shots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SHOTS: &str = r#"
[[shot]]
key = "home"
title = "Home"
subtitle = "Match creation."
image = "screens/home.png"

[[shot]]
key = "fixtures"
title = "Fixtures"
subtitle = "Upcoming matches."
image = "screens/fixturelist.png"
"#;

    #[test]
    fn parses_shots_in_order() {
        let manifest = ShotManifest::from_toml_str(TWO_SHOTS).expect("valid manifest");
        let keys: Vec<&str> = manifest.shots.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["home", "fixtures"]);
        assert_eq!(manifest.shots[1].image, "screens/fixturelist.png");
    }

    #[test]
    fn empty_document_is_an_empty_carousel() {
        let carousel = ShotManifest::from_toml_str("")
            .expect("empty manifest")
            .into_carousel();
        assert!(carousel.is_empty());
        assert_eq!(carousel.current(), None);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let doubled = format!("{TWO_SHOTS}{}", TWO_SHOTS.replace("fixtures", "home"));
        let err = ShotManifest::from_toml_str(&doubled).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateKey { ref key } if key == "home"));
    }

    #[test]
    fn rejects_empty_key() {
        let content = TWO_SHOTS.replacen("key = \"fixtures\"", "key = \"  \"", 1);
        let err = ShotManifest::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, ManifestError::EmptyKey { position: 1 }));
        assert_eq!(err.to_string(), "shot #1 has an empty key");
    }

    #[test]
    fn rejects_missing_image() {
        let content = TWO_SHOTS.replacen("image = \"screens/home.png\"", "image = \"\"", 1);
        let err = ShotManifest::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, ManifestError::MissingImage { ref key } if key == "home"));
    }

    #[test]
    fn rejects_schema_mismatch() {
        let err = ShotManifest::from_toml_str("[[shot]]\nkey = \"home\"\n").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }
}
