//! # scoutable-carousel
//!
//! Screens carousel model for the Scoutable landing page.
//!
//! The page shows the same list of app screens in several places at once: a
//! large preview, a strip of indicator dots, a grid of thumbnails and a
//! `Step N / total` label. All of them are projections of one
//! [`Carousel`], which owns the only piece of mutable state: the selected
//! index.
//!
//! ## Quick Start
//!
//! ```rust
//! use scoutable_carousel::{Carousel, Shot};
//!
//! let mut carousel = Carousel::new(vec![
//!     Shot::new("home", "Home", "Match creation.", "screens/home.png"),
//!     Shot::new("fixtures", "Fixtures", "Upcoming matches.", "screens/fixturelist.png"),
//! ]);
//!
//! carousel.previous();
//! assert_eq!(carousel.selected_index(), Some(1));
//! assert_eq!(carousel.step_label().map(|s| s.to_string()), Some("Step 2 / 2".into()));
//!
//! carousel.go_to(-2);
//! assert_eq!(carousel.current().map(|s| s.key.as_str()), Some("home"));
//! ```
//!
//! ## Architecture
//!
//! - [`shot`] - the immutable carousel entry
//! - [`index`] - wraparound index arithmetic
//! - [`controller`] - the [`Carousel`] state and its navigation operations
//! - [`projection`] - read-only view models (dots, thumbnails, step label)
//! - [`manifest`] - loading the shot list from `shots.toml`

#![warn(missing_docs)]

pub mod controller;
pub mod index;
pub mod manifest;
pub mod projection;
pub mod shot;

pub use controller::Carousel;
pub use manifest::{ManifestError, ShotManifest};
pub use projection::{Dot, StepLabel, Thumbnail};
pub use shot::Shot;
