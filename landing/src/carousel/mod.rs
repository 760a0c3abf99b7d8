//! Reactive wrapper around the carousel controller.
//!
//! The page owns a single [`CarouselHandle`]; every view takes a copy of it
//! and reads through it inside reactive closures. No view stores the
//! selected index itself.

mod views;

pub use views::{CarouselRegion, DotStrip, PrevNext, PreviewImage, StepLabelText, ThumbnailGrid};

use leptos::prelude::*;
use scoutable_carousel::{Carousel, Dot, Shot, Thumbnail};

#[derive(Debug, Clone, Copy)]
pub struct CarouselHandle {
    state: RwSignal<Carousel>,
}

impl CarouselHandle {
    pub fn new(carousel: Carousel) -> Self {
        Self {
            state: RwSignal::new(carousel),
        }
    }

    pub fn next(&self) {
        self.state.update(Carousel::next);
    }

    pub fn previous(&self) {
        self.state.update(Carousel::previous);
    }

    pub fn go_to(&self, requested: i64) {
        self.state.update(|c| c.go_to(requested));
    }

    pub fn select(&self, position: usize) {
        self.state.update(|c| c.select(position));
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(Carousel::is_empty)
    }

    pub fn preview(&self) -> Option<Shot> {
        self.state.with(Carousel::preview)
    }

    pub fn step_label(&self) -> Option<String> {
        self.state.with(|c| c.step_label().map(|s| s.to_string()))
    }

    pub fn dots(&self) -> Vec<Dot> {
        self.state.with(Carousel::dots)
    }

    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        self.state.with(Carousel::thumbnails)
    }
}
