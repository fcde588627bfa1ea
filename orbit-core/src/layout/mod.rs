// orbit layout
//
// Sizes and places contact nodes inside a bounded canvas.
//
// Goals:
// - Deterministic: per-node seeded randomness, no global generator, no time budgets
// - Weight-driven: heavier contacts are larger and pick their spot first
// - Soft anti-overlap: greedy placement, nodes are never moved once placed
// - Total: every input produces an in-bounds layout, nothing panics
//
// Submodules:
// - sizing: canvas-proportional node diameter and spacing
// - spiral: golden-angle fallback positions
// - placement: seeded jitter search against already placed nodes
//
// Output:
// - One LayoutNode per entity, in rank order (heaviest first).

use serde::{Deserialize, Serialize};

mod placement;
mod sizing;
mod spiral;

use placement::{Interior, PlacedNodes};
use sizing::SizeScale;

pub use spiral::GOLDEN_ANGLE;

/// Seed prefix for entities without a name.
const PLACEHOLDER_NAME: &str = "node";

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub fn distance(&self, other: &PointF) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A contact to lay out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Conversation weight. Negative, NaN and infinite values count as zero.
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self { name: name.into(), weight, image_ref: None }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    fn seed_name(&self) -> &str {
        if self.name.is_empty() { PLACEHOLDER_NAME } else { &self.name }
    }
}

/// Pixel dimensions of the area nodes are placed in.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// Minimum height of the graph area on narrow viewports.
    pub const MIN_GRAPH_HEIGHT: f64 = 420.0;
    /// Graph height as a fraction of viewport width.
    pub const GRAPH_HEIGHT_RATIO: f64 = 0.9;

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Canvas for a viewport of the given width: full width, and a height
    /// that grows with the width but never drops below `MIN_GRAPH_HEIGHT`.
    pub fn for_viewport_width(width: f64) -> Self {
        let width = sanitize_dimension(width);
        Self {
            width,
            height: (width * Self::GRAPH_HEIGHT_RATIO).max(Self::MIN_GRAPH_HEIGHT),
        }
    }

    pub fn center(&self) -> PointF {
        PointF { x: self.width / 2.0, y: self.height / 2.0 }
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Replace non-finite and non-positive dimensions with 1px.
    fn sanitized(self) -> Self {
        Self {
            width: sanitize_dimension(self.width),
            height: sanitize_dimension(self.height),
        }
    }
}

/// How ties in weight are ranked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Equal weights keep their input order.
    #[default]
    InputOrder,
    /// Equal weights are ranked by name, then input order. Output no longer
    /// depends on the order entities are passed in.
    Name,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Smallest node diameter, regardless of canvas width.
    pub min_base_size: f64,
    /// Node diameter for zero weight, as a fraction of canvas width.
    pub base_size_ratio: f64,
    /// Largest node diameter, regardless of canvas width.
    pub max_size_cap: f64,
    /// Node diameter for the heaviest contact, as a fraction of canvas width.
    pub max_size_ratio: f64,
    /// Smallest gap between node edges.
    pub min_spacing: f64,
    /// Gap between node edges as a fraction of the shorter canvas side.
    pub spacing_ratio: f64,
    /// Height reserved under each node for its label.
    pub label_buffer: f64,
    /// Horizontal spread of spiral positions by rank, as a fraction of canvas width.
    pub spiral_offset_ratio: f64,
    pub tie_break: TieBreak,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_base_size: 48.0,
            base_size_ratio: 0.12,
            max_size_cap: 120.0,
            max_size_ratio: 0.28,
            min_spacing: 36.0,
            spacing_ratio: 0.08,
            label_buffer: 52.0,
            spiral_offset_ratio: 0.18,
            tie_break: TieBreak::InputOrder,
        }
    }
}

/// Which step produced a node's final position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// A seeded candidate cleared every placed node.
    Jittered,
    /// The search ran out of attempts; the spiral position was used.
    Spiral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Diameter in pixels.
    pub size: f64,
    /// Center.
    pub x: f64,
    pub y: f64,
    /// Percent of total weight, rounded.
    pub share: u32,
    /// Position in the weight ordering, 0 = heaviest.
    pub rank: usize,
    pub placement: Placement,
}

impl LayoutNode {
    pub fn center(&self) -> PointF {
        PointF { x: self.x, y: self.y }
    }
}

/// Layout with the default configuration.
pub fn layout(entities: &[Entity], canvas: Canvas) -> Vec<LayoutNode> {
    layout_with_config(entities, canvas, &LayoutConfig::default())
}

pub fn layout_with_config(
    entities: &[Entity],
    canvas: Canvas,
    cfg: &LayoutConfig,
) -> Vec<LayoutNode> {
    if entities.is_empty() {
        return Vec::new();
    }

    let canvas = canvas.sanitized();
    let ranked = rank_entities(entities, cfg.tie_break);
    let n = ranked.len();

    let max_weight = ranked[0].1;
    // Summed relative to the heaviest weight so huge weights cannot overflow.
    let relative_total: f64 = ranked.iter().map(|&(_, w)| relative(w, max_weight)).sum();

    let scale = SizeScale::new(canvas, cfg);
    let spacing = sizing::spacing(canvas, cfg);
    let mut placed = PlacedNodes::new(spacing);

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (entity, weight))| {
            let size = scale.size_for(weight, max_weight);
            let fallback = spiral::fallback_position(rank, n, size, spacing, canvas, cfg);
            let interior = Interior::new(canvas, size, spacing, cfg.label_buffer);

            let seed = format!("{}-{}", entity.seed_name(), rank);
            let (pos, placement) = match placed.find_free_spot(&seed, size, &interior) {
                Some(candidate) => (candidate, Placement::Jittered),
                None => (fallback, Placement::Spiral),
            };
            // Clamping may push a node back into a neighbour; it is not re-checked.
            let pos = interior.clamp(pos);
            placed.insert(pos, size);

            LayoutNode {
                name: entity.name.clone(),
                image_ref: entity.image_ref.clone(),
                size,
                x: pos.x,
                y: pos.y,
                share: share_of(relative(weight, max_weight), relative_total),
                rank,
                placement,
            }
        })
        .collect()
}

/// Entities with sanitized weights, heaviest first.
fn rank_entities(entities: &[Entity], tie_break: TieBreak) -> Vec<(&Entity, f64)> {
    let mut ranked: Vec<(&Entity, f64)> = entities
        .iter()
        .map(|e| (e, sanitize_weight(e.weight)))
        .collect();
    // `sort_by` is stable, so InputOrder needs no explicit index.
    match tie_break {
        TieBreak::InputOrder => ranked.sort_by(|a, b| b.1.total_cmp(&a.1)),
        TieBreak::Name => {
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)))
        }
    }
    ranked
}

/// `weight` as a fraction of `max_weight`, 0 when nothing has weight.
fn relative(weight: f64, max_weight: f64) -> f64 {
    if max_weight > 0.0 { weight / max_weight } else { 0.0 }
}

fn share_of(relative_weight: f64, relative_total: f64) -> u32 {
    if relative_total > 0.0 {
        (relative_weight / relative_total * 100.0).round() as u32
    } else {
        0
    }
}

pub(crate) fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 { weight } else { 0.0 }
}

fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 1.0 }
}

/// `value` limited to `[min, max]`. The lower bound wins if the range is empty.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}
