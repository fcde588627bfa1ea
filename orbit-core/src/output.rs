//! Output types for the JS frontend.
//!
//! People records come in as JSON, get weighed and laid out, and go back out as
//! these structs serialized to JSON for rendering the contact orbit.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::layout::{
    layout_with_config, sanitize_weight, Canvas, Entity, LayoutConfig, LayoutNode, Placement,
};
use crate::weight::compute_weight;

/// Shown in place of an image when the name is empty.
const UNKNOWN_MONOGRAM: &str = "?";

/// A person record as the people endpoint returns it, optionally enriched with
/// a precomputed weight or the raw conversation history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonInput {
    pub name: Option<String>,
    pub image_url: Option<String>,
    /// Takes precedence over `conversation` when present.
    pub weight: Option<f64>,
    pub conversation: Option<Value>,
}

impl PersonInput {
    /// Read a record field by field. Fields of the wrong type are treated as
    /// missing, and anything that is not an object is an empty record.
    pub fn from_value(record: &Value) -> Self {
        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: text("name"),
            image_url: text("image_url"),
            weight: record
                .get("weight")
                .or_else(|| record.get("conversationWeight"))
                .and_then(Value::as_f64),
            conversation: record.get("conversation").cloned(),
        }
    }

    /// Explicit weight if it is a usable number, otherwise the turn count of
    /// the attached history.
    pub fn resolved_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() => sanitize_weight(w),
            _ => self.conversation.as_ref().map(compute_weight).unwrap_or(0) as f64,
        }
    }

    pub fn to_entity(&self) -> Entity {
        Entity {
            name: self.name.clone().unwrap_or_default(),
            weight: self.resolved_weight(),
            image_ref: self.image_url.clone(),
        }
    }
}

/// A node ready for the frontend to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeOutput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub size: f64,
    /// Center
    pub x: f64,
    pub y: f64,
    /// Top-left corner, for absolutely positioned views
    pub left: f64,
    pub top: f64,
    pub share: u32,
    /// Initial letter to show when there is no image
    pub monogram: String,
    pub placement: Placement,
}

impl From<LayoutNode> for NodeOutput {
    fn from(node: LayoutNode) -> Self {
        let half = node.size / 2.0;
        Self {
            monogram: monogram(&node.name),
            left: node.x - half,
            top: node.y - half,
            name: node.name,
            image_url: node.image_ref,
            size: node.size,
            x: node.x,
            y: node.y,
            share: node.share,
            placement: node.placement,
        }
    }
}

/// Summary figures for the orbit header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitStats {
    pub people: usize,
    /// Sum of all weights, i.e. message turns logged.
    pub turns: f64,
}

/// Error information for the frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub line: usize,   // 1-based line number, 0 if unknown
    pub column: usize, // 1-based column number, 0 if unknown
}

/// The combined output sent to the frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitOutput {
    pub canvas: Canvas,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    pub stats: OrbitStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl OrbitOutput {
    pub fn from_error(canvas: Canvas, error: ErrorInfo) -> Self {
        Self {
            canvas,
            nodes: Vec::new(),
            stats: OrbitStats { people: 0, turns: 0.0 },
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    pub line: usize,
    pub column: usize,
    pub msg: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input error at {}:{}: {}", self.line, self.column, self.msg)
    }
}
impl std::error::Error for InputError {}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        Self { line: e.line(), column: e.column(), msg: e.to_string() }
    }
}

impl From<InputError> for ErrorInfo {
    fn from(e: InputError) -> Self {
        Self { message: e.msg, line: e.line, column: e.column }
    }
}

/// Parse a JSON array of people records. Only text that is not JSON, or not
/// an array, is an error; malformed records become empty ones.
pub fn parse_people(json: &str) -> Result<Vec<PersonInput>, InputError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(records) => Ok(records.iter().map(PersonInput::from_value).collect()),
        _ => Err(InputError {
            line: 0,
            column: 0,
            msg: "expected an array of people".to_string(),
        }),
    }
}

/// Lay out people and package the result for rendering.
pub fn build_output(people: &[PersonInput], canvas: Canvas, cfg: &LayoutConfig) -> OrbitOutput {
    let entities: Vec<Entity> = people.iter().map(PersonInput::to_entity).collect();
    let turns = entities.iter().map(|e| e.weight).sum();
    let nodes = layout_with_config(&entities, canvas, cfg)
        .into_iter()
        .map(NodeOutput::from)
        .collect();

    OrbitOutput {
        canvas,
        nodes,
        stats: OrbitStats { people: people.len(), turns },
        error: None,
    }
}

fn monogram(name: &str) -> String {
    match name.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => UNKNOWN_MONOGRAM.to_string(),
    }
}
