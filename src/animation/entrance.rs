//! How each intro element looks for a given tween value

use super::range::map_range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceStyle {
    pub opacity: f32,
    /// Pixels below the resting position
    pub translate_y: f32,
    pub scale: f32,
    pub letter_spacing_em: Option<f32>,
}

impl EntranceStyle {
    /// Style for intro element `id` at eased value `v`
    ///
    /// The overlay fades out; everything else rises into place.
    pub fn for_tween(id: &str, v: f32) -> Self {
        let rise = |from: f32| from * (1.0 - v);
        let visible = v.clamp(0.0, 1.0);
        let base = Self {
            opacity: visible,
            translate_y: 0.0,
            scale: 1.0,
            letter_spacing_em: None,
        };

        match id {
            "overlay" => Self { opacity: 1.0 - visible, ..base },
            "subtitle" => Self { translate_y: rise(30.0), ..base },
            "title" => Self {
                translate_y: rise(60.0),
                letter_spacing_em: Some(map_range(visible, (0.0, 1.0), (0.4, 0.08))),
                ..base
            },
            "description" => Self { translate_y: rise(20.0), ..base },
            // BackOut overshoots, so scale may briefly pass 1
            "cta" => Self {
                translate_y: rise(20.0),
                scale: 0.9 + 0.1 * v,
                ..base
            },
            _ => base,
        }
    }

    pub fn transform_css(&self) -> String {
        format!("translateY({:.2}px) scale({:.4})", self.translate_y, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_fades_out() {
        assert_eq!(EntranceStyle::for_tween("overlay", 0.0).opacity, 1.0);
        assert_eq!(EntranceStyle::for_tween("overlay", 1.0).opacity, 0.0);
    }

    #[test]
    fn test_title_rises_and_tightens() {
        let start = EntranceStyle::for_tween("title", 0.0);
        assert_eq!(start.translate_y, 60.0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.letter_spacing_em, Some(0.4));

        let end = EntranceStyle::for_tween("title", 1.0);
        assert_eq!(end.translate_y, 0.0);
        assert_eq!(end.opacity, 1.0);
        assert_eq!(end.letter_spacing_em, Some(0.08));
    }

    #[test]
    fn test_cta_scales_up() {
        assert_eq!(EntranceStyle::for_tween("cta", 0.0).scale, 0.9);
        assert!((EntranceStyle::for_tween("cta", 1.0).scale - 1.0).abs() < 1e-6);
        // Overshoot never pushes opacity past 1
        assert_eq!(EntranceStyle::for_tween("cta", 1.1).opacity, 1.0);
    }

    #[test]
    fn test_transform_css() {
        let style = EntranceStyle::for_tween("subtitle", 0.5);
        assert_eq!(style.transform_css(), "translateY(15.00px) scale(1.0000)");
    }
}
