// Golden-angle spiral ("sunflower") positions.
//
// Used when the jitter search cannot find a free spot. Rank i of n sits at
// angle i * GOLDEN_ANGLE and radius proportional to sqrt(i + 1), so heavier
// nodes stay near the center and the rest fill outwards without clustering.

use std::f64::consts::PI;

use super::{clamp, Canvas, LayoutConfig, PointF};

/// π(3 − √5) ≈ 2.399963 rad.
pub const GOLDEN_ANGLE: f64 = PI * (3.0 - 2.236_067_977_499_79);

/// Spiral position for rank `rank` of `count`, kept fully inside the canvas.
pub fn fallback_position(
    rank: usize,
    count: usize,
    size: f64,
    spacing: f64,
    canvas: Canvas,
    cfg: &LayoutConfig,
) -> PointF {
    let radius_limit = (canvas.min_side() / 2.0 - size / 2.0 - spacing).max(0.0);
    let ratio = if count <= 1 {
        0.0
    } else {
        ((rank + 1) as f64).sqrt() / (count as f64).sqrt()
    };
    let radius = clamp(ratio * radius_limit, 0.0, radius_limit);
    let angle = rank as f64 * GOLDEN_ANGLE;

    // Shift later ranks right and earlier ones left to break the symmetry.
    let offset = if count <= 1 {
        0.0
    } else {
        rank as f64 / (count - 1) as f64 - 0.5
    };

    let center = canvas.center();
    let half = size / 2.0;
    PointF {
        x: clamp(
            center.x + radius * angle.cos() + offset * canvas.width * cfg.spiral_offset_ratio,
            half,
            canvas.width - half,
        ),
        y: clamp(center.y + radius * angle.sin(), half, canvas.height - half),
    }
}
