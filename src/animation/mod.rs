//! Animation module for easing, scroll-linked ranges and entrance timelines
//!
//! Everything here is pure and frame-rate independent; callers feed in
//! progress or elapsed time and read values back.

mod easing;
mod entrance;
mod range;
mod timeline;

pub use easing::{Easing, ease};
pub use entrance::EntranceStyle;
pub use range::{map_range, HeroParallax};
pub use timeline::{Timeline, Tween, TweenState};
