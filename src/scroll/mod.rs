//! Scroll progress tracking

mod tracker;

pub use tracker::{ElementGeometry, ProgressFormula, ScrollTracker};
