//! Scroll-linked value ranges for the parallax hero

/// Map `value` from `input` onto `output`, clamped at both ends
pub fn map_range(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let (in0, in1) = input;
    let (out0, out1) = output;
    if (in1 - in0).abs() <= f32::EPSILON {
        return if value < in0 { out0 } else { out1 };
    }
    let t = ((value - in0) / (in1 - in0)).clamp(0.0, 1.0);
    out0 * (1.0 - t) + out1 * t
}

/// Values the hero section derives from its scroll progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub castle_scale: f32,
    pub castle_opacity: f32,
    pub text_opacity: f32,
    pub text_offset_y: f32,
}

impl HeroParallax {
    pub fn at(progress: f32) -> Self {
        // The castle only fades at the very end so the camera clips through it
        Self {
            castle_scale: map_range(progress, (0.0, 1.0), (1.0, 25.0)),
            castle_opacity: map_range(progress, (0.8, 1.0), (1.0, 0.0)),
            text_opacity: map_range(progress, (0.0, 0.3), (1.0, 0.0)),
            text_offset_y: map_range(progress, (0.0, 0.3), (0.0, -50.0)),
        }
    }
}
