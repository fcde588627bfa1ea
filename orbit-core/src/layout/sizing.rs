// Node diameter and spacing, both proportional to the canvas.

use super::{Canvas, LayoutConfig};

/// Linear map from weight to diameter for one canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SizeScale {
    /// Diameter at weight zero.
    pub base: f64,
    /// Diameter at the heaviest weight. Never below `base`.
    pub max: f64,
    /// No node is wider than the shorter canvas side.
    limit: f64,
}

impl SizeScale {
    pub fn new(canvas: Canvas, cfg: &LayoutConfig) -> Self {
        let base = cfg.min_base_size.max(canvas.width * cfg.base_size_ratio).max(0.0);
        let max = cfg.max_size_cap.min(canvas.width * cfg.max_size_ratio);
        Self {
            base,
            // Narrow canvases would otherwise shrink heavier nodes.
            max: max.max(base),
            limit: canvas.min_side(),
        }
    }

    pub fn size_for(&self, weight: f64, max_weight: f64) -> f64 {
        let size = if max_weight > 0.0 {
            self.base + (self.max - self.base) * (weight / max_weight)
        } else {
            self.base
        };
        size.min(self.limit)
    }
}

/// Minimum gap between node edges.
pub fn spacing(canvas: Canvas, cfg: &LayoutConfig) -> f64 {
    cfg.min_spacing.max(canvas.min_side() * cfg.spacing_ratio).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_width_scale() {
        let scale = SizeScale::new(Canvas::new(390.0, 420.0), &LayoutConfig::default());
        assert_eq!(scale.base, 48.0);
        assert!((scale.max - 109.2).abs() < 1e-9);
    }

    #[test]
    fn test_wide_canvas_caps_sizes() {
        let scale = SizeScale::new(Canvas::new(1000.0, 900.0), &LayoutConfig::default());
        // base = 0.12 * 1000 = 120, cap = 120
        assert_eq!(scale.base, 120.0);
        assert_eq!(scale.max, 120.0);
        assert_eq!(scale.size_for(10.0, 10.0), 120.0);
    }

    #[test]
    fn test_max_never_below_base() {
        let scale = SizeScale::new(Canvas::new(100.0, 400.0), &LayoutConfig::default());
        assert_eq!(scale.base, 48.0);
        assert_eq!(scale.max, 48.0);
    }

    #[test]
    fn test_size_interpolates_weight() {
        let scale = SizeScale::new(Canvas::new(400.0, 400.0), &LayoutConfig::default());
        assert_eq!(scale.size_for(0.0, 10.0), 48.0);
        assert!((scale.size_for(5.0, 10.0) - 80.0).abs() < 1e-9);
        assert!((scale.size_for(10.0, 10.0) - 112.0).abs() < 1e-9);
        assert_eq!(scale.size_for(0.0, 0.0), 48.0);
    }

    #[test]
    fn test_huge_weights_do_not_overflow_size() {
        let scale = SizeScale::new(Canvas::new(400.0, 400.0), &LayoutConfig::default());
        assert!((scale.size_for(f64::MAX, f64::MAX) - 112.0).abs() < 1e-9);
        assert!((scale.size_for(f64::MAX / 2.0, f64::MAX) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_size_limited_by_canvas() {
        let scale = SizeScale::new(Canvas::new(30.0, 20.0), &LayoutConfig::default());
        assert_eq!(scale.size_for(1.0, 1.0), 20.0);
    }

    #[test]
    fn test_spacing() {
        let cfg = LayoutConfig::default();
        assert_eq!(spacing(Canvas::new(400.0, 400.0), &cfg), 36.0);
        assert_eq!(spacing(Canvas::new(1000.0, 900.0), &cfg), 72.0);
    }
}
