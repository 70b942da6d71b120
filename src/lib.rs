use wasm_bindgen::prelude::*;

pub mod animation;
pub mod api;
pub mod camera;
pub mod config;
pub mod math;
pub mod particles;
pub mod render;
pub mod scene;
pub mod scheduler;
pub mod scroll;
pub mod store;
pub mod story;
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;

pub use config::SceneConfig;
pub use web::{CastleExperience, HeroParallaxBinding, MagicCursor, MagicStore, MagicalIntro, PortalExperience};

/// Panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init (hot reload) keeps the first logger
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Clamped scroll progress for a rect, for pages that drive their own scroll handling
#[wasm_bindgen(js_name = scrollProgress)]
pub fn scroll_progress(top: f32, height: f32, viewport_height: f32, formula: &str) -> f32 {
    let formula = match formula {
        "sticky_range" => scroll::ProgressFormula::StickyRange,
        "viewport_entry" => scroll::ProgressFormula::ViewportEntry,
        _ => scroll::ProgressFormula::SectionTop,
    };
    scroll::ScrollTracker::new(formula).on_scroll(Some(scroll::ElementGeometry::new(top, height)), viewport_height)
}
