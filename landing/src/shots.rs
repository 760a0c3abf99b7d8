//! The page's shot list, compiled in from `shots.toml`.

use scoutable_carousel::{Carousel, ShotManifest};
use wasm_bindgen::JsValue;

const SHOTS_TOML: &str = include_str!("../shots.toml");

/// Build the page carousel. A broken manifest degrades to an empty carousel.
pub fn load_carousel() -> Carousel {
    match ShotManifest::from_toml_str(SHOTS_TOML) {
        Ok(manifest) => {
            web_sys::console::debug_1(&JsValue::from_str(&format!(
                "[scoutable][shots] {} screens loaded",
                manifest.shots.len()
            )));
            manifest.into_carousel()
        }
        Err(err) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "[scoutable][shots] {err}; rendering without screens"
            )));
            Carousel::default()
        }
    }
}
