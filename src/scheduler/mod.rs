//! Per-frame driver shared by every scene

mod frame;

pub use frame::{FrameInput, FrameScheduler, Scene, SchedulerState};
