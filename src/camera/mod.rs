//! Scroll-driven camera

mod rig;

pub use rig::{CameraPose, CameraRig};
