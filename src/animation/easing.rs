//! Easing curves shared by the camera and the intro timeline

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation, used for plain fades
    Linear,
    /// Slow start, accelerate
    EaseIn,
    /// Fast start, decelerate (GSAP `power2.out`)
    EaseOut,
    /// Smooth ease-in-out
    EaseInOut,
    /// Camera fly-in curve
    #[default]
    EaseOutCubic,
    /// Overshoot then settle (GSAP `back.out(1.7)`)
    BackOut,
}

const BACK_OVERSHOOT: f32 = 1.7;

/// Eased value of `t`, which is clamped to [0, 1] first
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - inv * inv,
        Easing::EaseInOut if t < 0.5 => 2.0 * t * t,
        Easing::EaseInOut => 1.0 - 2.0 * inv * inv,
        Easing::EaseOutCubic => 1.0 - inv.powi(3),
        Easing::BackOut => {
            let u = t - 1.0;
            1.0 + (BACK_OVERSHOOT + 1.0) * u.powi(3) + BACK_OVERSHOOT * u * u
        }
    }
}
