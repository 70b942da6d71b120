use crate::particles::{SparkleTrail, TrailConfig};
use crate::scheduler::{FrameInput, Scene};

/// Pointer-following sparkle trail
pub struct CursorScene {
    trail: SparkleTrail,
    pointer: Option<(f32, f32)>,
}

impl CursorScene {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            trail: SparkleTrail::new(config),
            pointer: None,
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
    }

    /// Pointer left the window
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    pub fn trail(&self) -> &SparkleTrail {
        &self.trail
    }
}

impl Scene for CursorScene {
    fn update(&mut self, input: &FrameInput) {
        self.trail.spawn(input.timestamp_ms, self.pointer);
        self.trail.step();
    }
}
