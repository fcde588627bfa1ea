//! Orbit core: sizing and placement for the contact orbit view.
//!
//! - `weight`: conversation history -> message turn count
//! - `layout`: weights + canvas -> node sizes, positions and shares
//! - `output`: people records -> render payload for the frontend
//! - `wasm`: JavaScript bindings

pub mod layout;
pub mod output;
pub mod rng;
mod wasm;
pub mod weight;

pub use layout::{
    layout, layout_with_config, Canvas, Entity, LayoutConfig, LayoutNode, Placement, TieBreak,
};
pub use output::{build_output, parse_people, OrbitOutput, PersonInput};
pub use rng::{make_rng, SeededRng};
pub use weight::{compute_weight, weight_from_response};
