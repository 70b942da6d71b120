use serde::Deserialize;

/// Bounding rect of the tracked element, relative to the viewport top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    pub top: f32,
    pub height: f32,
}

impl ElementGeometry {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// How scroll position is turned into progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressFormula {
    /// 0 when the section top reaches the viewport top, 1 when its bottom does
    #[default]
    SectionTop,
    /// Sticky section: 0 at "start start", 1 at "end end"
    StickyRange,
    /// Time in view: 0 when the top enters at the bottom, 1 when the bottom leaves at the top
    ViewportEntry,
}

impl ProgressFormula {
    /// Unclamped progress, or `None` when the geometry can't produce one
    pub fn raw(&self, geometry: ElementGeometry, viewport_height: f32) -> Option<f32> {
        let (numerator, span) = match self {
            ProgressFormula::SectionTop => (-geometry.top, geometry.height),
            ProgressFormula::StickyRange => (-geometry.top, geometry.height - viewport_height),
            ProgressFormula::ViewportEntry => {
                (viewport_height - geometry.top, viewport_height + geometry.height)
            }
        };

        let raw = numerator / span;
        if span > 0.0 && raw.is_finite() {
            Some(raw)
        } else {
            None
        }
    }
}

/// Publishes normalized scroll progress for one tracked element
///
/// The tracker owns the progress scalar; the frame loop only reads it.
/// Once unmounted it ignores every further sample.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    formula: ProgressFormula,
    progress: f32,
    mounted: bool,
}

impl ScrollTracker {
    pub fn new(formula: ProgressFormula) -> Self {
        Self {
            formula,
            progress: 0.0,
            mounted: true,
        }
    }

    pub fn formula(&self) -> ProgressFormula {
        self.formula
    }

    /// Current progress, always within [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Recompute progress from a scroll or resize sample
    ///
    /// A missing element, degenerate geometry or an unmounted tracker leave
    /// the previous value untouched.
    pub fn on_scroll(&mut self, geometry: Option<ElementGeometry>, viewport_height: f32) -> f32 {
        if !self.mounted {
            return self.progress;
        }
        let Some(geometry) = geometry else {
            return self.progress;
        };
        if let Some(raw) = self.formula.raw(geometry, viewport_height) {
            self.progress = raw.clamp(0.0, 1.0);
        }
        self.progress
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ProgressFormula::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 800.0;

    #[test]
    fn test_section_above_viewport_reads_one() {
        let mut tracker = ScrollTracker::new(ProgressFormula::SectionTop);
        let p = tracker.on_scroll(Some(ElementGeometry::new(-5000.0, 1600.0)), VIEWPORT);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_section_below_viewport_reads_zero() {
        let mut tracker = ScrollTracker::new(ProgressFormula::SectionTop);
        tracker.on_scroll(Some(ElementGeometry::new(-800.0, 1600.0)), VIEWPORT);
        let p = tracker.on_scroll(Some(ElementGeometry::new(2400.0, 1600.0)), VIEWPORT);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_section_midway() {
        let mut tracker = ScrollTracker::new(ProgressFormula::SectionTop);
        let p = tracker.on_scroll(Some(ElementGeometry::new(-400.0, 1600.0)), VIEWPORT);
        assert!((p - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_progress_follows_scroll_backwards() {
        let mut tracker = ScrollTracker::new(ProgressFormula::SectionTop);
        tracker.on_scroll(Some(ElementGeometry::new(-1200.0, 1600.0)), VIEWPORT);
        let back = tracker.on_scroll(Some(ElementGeometry::new(-400.0, 1600.0)), VIEWPORT);
        assert!((back - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_every_formula_clamps() {
        for formula in [
            ProgressFormula::SectionTop,
            ProgressFormula::StickyRange,
            ProgressFormula::ViewportEntry,
        ] {
            let mut tracker = ScrollTracker::new(formula);
            for top in [-1.0e6, -10_000.0, -2400.0, 0.0, 799.0, 10_000.0, 1.0e6] {
                let p = tracker.on_scroll(Some(ElementGeometry::new(top, 2400.0)), VIEWPORT);
                assert!((0.0..=1.0).contains(&p), "{:?} gave {} at top {}", formula, p, top);
            }
            assert_eq!(tracker.on_scroll(Some(ElementGeometry::new(-1.0e6, 2400.0)), VIEWPORT), 1.0);
            assert_eq!(tracker.on_scroll(Some(ElementGeometry::new(1.0e6, 2400.0)), VIEWPORT), 0.0);
        }
    }

    #[test]
    fn test_sticky_range() {
        let mut tracker = ScrollTracker::new(ProgressFormula::StickyRange);
        // 300vh section, scrolled one viewport in: 800 / (2400 - 800)
        let p = tracker.on_scroll(Some(ElementGeometry::new(-800.0, 2400.0)), VIEWPORT);
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_entry() {
        let mut tracker = ScrollTracker::new(ProgressFormula::ViewportEntry);
        assert_eq!(tracker.on_scroll(Some(ElementGeometry::new(VIEWPORT, 400.0)), VIEWPORT), 0.0);
        assert_eq!(tracker.on_scroll(Some(ElementGeometry::new(-400.0, 400.0)), VIEWPORT), 1.0);
    }

    #[test]
    fn test_missing_element_is_noop() {
        let mut tracker = ScrollTracker::new(ProgressFormula::SectionTop);
        tracker.on_scroll(Some(ElementGeometry::new(-400.0, 1600.0)), VIEWPORT);
        let p = tracker.on_scroll(None, VIEWPORT);
        assert!((p - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_geometry_is_noop() {
        let mut tracker = ScrollTracker::new(ProgressFormula::SectionTop);
        tracker.on_scroll(Some(ElementGeometry::new(-400.0, 1600.0)), VIEWPORT);
        tracker.on_scroll(Some(ElementGeometry::new(-400.0, 0.0)), VIEWPORT);
        assert!((tracker.progress() - 0.25).abs() < 1e-6);

        // Sticky section no taller than the viewport has no scroll range
        let mut sticky = ScrollTracker::new(ProgressFormula::StickyRange);
        assert_eq!(sticky.on_scroll(Some(ElementGeometry::new(-10.0, VIEWPORT)), VIEWPORT), 0.0);
    }

    #[test]
    fn test_unmounted_tracker_ignores_samples() {
        let mut tracker = ScrollTracker::new(ProgressFormula::SectionTop);
        tracker.on_scroll(Some(ElementGeometry::new(-400.0, 1600.0)), VIEWPORT);
        tracker.unmount();
        let p = tracker.on_scroll(Some(ElementGeometry::new(-5000.0, 1600.0)), VIEWPORT);
        assert!((p - 0.25).abs() < 1e-6);
        assert!(!tracker.is_mounted());
    }
}
