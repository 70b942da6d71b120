//! 2D canvas drawing for the cursor trail

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;
use crate::particles::{SparkleShape, TrailSparkle};

const STAR_INNER_RATIO: f32 = 0.4;
const WAND_GLOW_RADIUS: f64 = 20.0;
const WAND_CORE_RADIUS: f64 = 4.0;

/// Outline of a 4-point star centered on the origin, alternating outer and inner vertices
pub fn star_points(outer: f32) -> [(f32, f32); 8] {
    let inner = outer * STAR_INNER_RATIO;
    let mut points = [(0.0, 0.0); 8];
    for i in 0..4 {
        let angle = i as f32 * FRAC_PI_2;
        points[i * 2] = (angle.cos() * outer, angle.sin() * outer);
        let mid = angle + FRAC_PI_4;
        points[i * 2 + 1] = (mid.cos() * inner, mid.sin() * inner);
    }
    points
}

pub struct TrailPainter {
    ctx: CanvasRenderingContext2d,
}

impl TrailPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Redraw the whole overlay: sparkles first, then the wand tip on top
    pub fn paint(
        &self,
        width: f64,
        height: f64,
        sparkles: &[TrailSparkle],
        pointer: Option<(f32, f32)>,
    ) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width, height);

        for sparkle in sparkles {
            self.ctx.set_global_alpha(sparkle.alpha.clamp(0.0, 1.0) as f64);
            match sparkle.shape {
                SparkleShape::Star => self.star(sparkle)?,
                SparkleShape::Circle => self.glow_dot(sparkle)?,
            }
        }
        self.ctx.set_global_alpha(1.0);

        if let Some((x, y)) = pointer.filter(|(x, y)| *x > 0.0 && *y > 0.0) {
            self.wand_tip(x as f64, y as f64)?;
        }
        Ok(())
    }

    fn star(&self, s: &TrailSparkle) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(s.x as f64, s.y as f64)?;
        ctx.rotate(s.rotation.to_radians() as f64)?;
        ctx.set_fill_style_str(s.color_css());

        ctx.begin_path();
        for (x, y) in star_points(s.size) {
            ctx.line_to(x as f64, y as f64);
        }
        ctx.close_path();
        ctx.fill();
        ctx.restore();
        Ok(())
    }

    fn glow_dot(&self, s: &TrailSparkle) -> Result<(), JsValue> {
        let (x, y, r) = (s.x as f64, s.y as f64, s.size.max(0.0) as f64);
        let gradient = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
        gradient.add_color_stop(0.0, s.color_css())?;
        gradient.add_color_stop(0.4, s.color_css())?;
        gradient.add_color_stop(1.0, "transparent")?;
        self.disc(x, y, r, &gradient)
    }

    fn wand_tip(&self, x: f64, y: f64) -> Result<(), JsValue> {
        let outer = self.ctx.create_radial_gradient(x, y, 0.0, x, y, WAND_GLOW_RADIUS)?;
        outer.add_color_stop(0.0, "rgba(251, 191, 36, 0.3)")?;
        outer.add_color_stop(0.5, "rgba(167, 139, 250, 0.1)")?;
        outer.add_color_stop(1.0, "transparent")?;
        self.disc(x, y, WAND_GLOW_RADIUS, &outer)?;

        let core = self.ctx.create_radial_gradient(x, y, 0.0, x, y, WAND_CORE_RADIUS)?;
        core.add_color_stop(0.0, "rgba(255, 255, 255, 0.9)")?;
        core.add_color_stop(1.0, "rgba(251, 191, 36, 0.4)")?;
        self.disc(x, y, WAND_CORE_RADIUS, &core)
    }

    fn disc(&self, x: f64, y: f64, r: f64, fill: &web_sys::CanvasGradient) -> Result<(), JsValue> {
        self.ctx.set_fill_style_canvas_gradient(fill);
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, TAU as f64)?;
        self.ctx.fill();
        Ok(())
    }
}
