// Seeded jitter placement.
//
// Each node draws candidate centers from its own seeded stream and takes the
// first one that keeps clear of every node placed before it. Placement is
// greedy: earlier (heavier) nodes never move to make room for later ones.

use super::{clamp, Canvas, PointF};
use crate::rng::SeededRng;

/// Number of candidate positions to try per node.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 80;

/// Region a node center may occupy: inset by spacing, with room for the label
/// below, and never closer to an edge than half the node.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interior {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Interior {
    pub fn new(canvas: Canvas, size: f64, spacing: f64, label_buffer: f64) -> Self {
        let half = size / 2.0;

        let min_x = spacing + half;
        let max_x = min_x.max(canvas.width - spacing - half);
        let min_y = spacing + half;
        let max_y = min_y.max(canvas.height - spacing - half - label_buffer);

        // Padding gives way to the hard bounds on canvases too small for it.
        let min_x = clamp(min_x, half, canvas.width - half);
        let min_y = clamp(min_y, half, canvas.height - half);
        Self {
            min_x,
            max_x: clamp(max_x, min_x, canvas.width - half),
            min_y,
            max_y: clamp(max_y, min_y, canvas.height - half),
        }
    }

    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }

    pub fn clamp(&self, p: PointF) -> PointF {
        PointF {
            x: clamp(p.x, self.min_x, self.max_x),
            y: clamp(p.y, self.min_y, self.max_y),
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct PlacedNode {
    center: PointF,
    size: f64,
}

/// Nodes committed so far, in placement order.
#[derive(Debug, Clone)]
pub struct PlacedNodes {
    /// Required gap between node edges.
    spacing: f64,
    nodes: Vec<PlacedNode>,
}

impl PlacedNodes {
    pub fn new(spacing: f64) -> Self {
        Self { spacing, nodes: Vec::new() }
    }

    pub fn insert(&mut self, center: PointF, size: f64) {
        self.nodes.push(PlacedNode { center, size });
    }

    /// Whether a node of `size` at `center` comes closer than the spacing to any placed node.
    pub fn overlaps_any(&self, center: PointF, size: f64) -> bool {
        self.nodes.iter().any(|other| {
            let min_distance = (size + other.size) / 2.0 + self.spacing;
            center.distance(&other.center) < min_distance
        })
    }

    /// Draw up to `MAX_PLACEMENT_ATTEMPTS` candidates from the stream for `seed`
    /// and return the first that overlaps nothing.
    pub fn find_free_spot(&self, seed: &str, size: f64, interior: &Interior) -> Option<PointF> {
        let mut rng = SeededRng::new(seed);
        let (w, h) = (interior.width(), interior.height());
        (0..MAX_PLACEMENT_ATTEMPTS)
            .map(|_| {
                let x = rng.range(interior.min_x, w);
                let y = rng.range(interior.min_y, h);
                PointF { x, y }
            })
            .find(|&candidate| !self.overlaps_any(candidate, size))
    }
}
