//! Portal transition: a vortex that pulls for a fixed time, then fades

use crate::animation::{Easing, ease};
use crate::config::PortalConfig;
use crate::particles::VortexField;
use crate::scheduler::{FrameInput, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalPhase {
    /// Vortex running, transition not yet complete
    Opening,
    /// Completion fired, fading out
    Closing,
    Done,
}

const FADE_IN_SECS: f32 = 1.0;
const RING_GROW_SECS: f32 = 2.0;

pub struct PortalScene {
    vortex: VortexField,
    phase: PortalPhase,
    elapsed: f32,
    duration: f32,
    fade_out: f32,
    completion_pending: bool,
}

impl PortalScene {
    pub fn new(config: &PortalConfig) -> Result<Self, String> {
        Ok(Self {
            vortex: VortexField::new(config.vortex.clone())?,
            phase: PortalPhase::Opening,
            elapsed: 0.0,
            duration: config.duration_secs,
            fade_out: config.fade_out_secs.max(0.0),
            completion_pending: false,
        })
    }

    pub fn phase(&self) -> PortalPhase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn vortex(&self) -> &VortexField {
        &self.vortex
    }

    /// True exactly once, on the first call after the vortex has run its course
    pub fn take_completion(&mut self) -> bool {
        std::mem::take(&mut self.completion_pending)
    }

    /// Overlay opacity: fades in on open, out after completion
    pub fn opacity(&self) -> f32 {
        match self.phase {
            PortalPhase::Opening => ease(self.elapsed / FADE_IN_SECS, Easing::EaseInOut),
            PortalPhase::Closing => {
                if self.fade_out <= 0.0 {
                    0.0
                } else {
                    1.0 - ease((self.elapsed - self.duration) / self.fade_out, Easing::EaseInOut)
                }
            }
            PortalPhase::Done => 0.0,
        }
    }

    /// Glowing ring size as a fraction of the viewport
    pub fn ring_scale(&self) -> f32 {
        ease(self.elapsed / RING_GROW_SECS, Easing::EaseIn)
    }
}

impl Scene for PortalScene {
    fn update(&mut self, input: &FrameInput) {
        if self.phase == PortalPhase::Done {
            return;
        }

        self.elapsed += input.dt;
        self.vortex.update(input.dt);

        if self.phase == PortalPhase::Opening && self.elapsed >= self.duration {
            self.phase = PortalPhase::Closing;
            self.completion_pending = true;
        }
        if self.phase == PortalPhase::Closing && self.elapsed >= self.duration + self.fade_out {
            self.phase = PortalPhase::Done;
        }
    }
}
