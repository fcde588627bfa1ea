//! WASM bindings for the orbit-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;

use crate::layout::{Canvas, LayoutConfig};
use crate::output::{build_output, parse_people, ErrorInfo, OrbitOutput, PersonInput};
use crate::weight::compute_weight_str;

/// Viewport width used when there is no `window` to ask.
const DEFAULT_VIEWPORT_WIDTH: f64 = 390.0;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    pub fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Lay out people (JSON array) on a `width` x `height` canvas.
/// Returns an `OrbitOutput` as JSON; parse failures are reported in its `error` field.
#[wasm_bindgen]
pub fn compute_orbit(people_json: &str, width: f64, height: f64) -> String {
    orbit_json(people_json, Canvas::new(width, height), &LayoutConfig::default())
}

/// Same as `compute_orbit`, with the canvas height derived from the viewport width.
#[wasm_bindgen]
pub fn compute_orbit_for_width(people_json: &str, width: f64) -> String {
    orbit_json(people_json, Canvas::for_viewport_width(width), &LayoutConfig::default())
}

/// Lay out people with a partial `LayoutConfig` (JSON object). Missing fields
/// keep their defaults; an unparsable config falls back to the defaults entirely.
#[wasm_bindgen]
pub fn compute_orbit_with_config(
    people_json: &str,
    config_json: &str,
    width: f64,
    height: f64,
) -> String {
    let cfg = match serde_json::from_str::<LayoutConfig>(config_json) {
        Ok(cfg) => cfg,
        Err(e) => {
            console_warn(&format!("Invalid layout config, using defaults: {}", e));
            LayoutConfig::default()
        }
    };
    orbit_json(people_json, Canvas::new(width, height), &cfg)
}

/// Lay out people on a canvas sized from the browser window.
#[wasm_bindgen]
pub fn compute_orbit_for_window(people_json: &str) -> String {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| {
            console_warn("No window width available, using default viewport");
            DEFAULT_VIEWPORT_WIDTH
        });
    compute_orbit_for_width(people_json, width)
}

/// Number of message turns in a conversation history (JSON). Malformed input is 0.
#[wasm_bindgen]
pub fn conversation_weight(conversation_json: &str) -> u32 {
    compute_weight_str(conversation_json).try_into().unwrap_or(u32::MAX)
}

/// Graph area height for a viewport width.
#[wasm_bindgen]
pub fn graph_height(width: f64) -> f64 {
    Canvas::for_viewport_width(width).height
}

fn orbit_json(people_json: &str, canvas: Canvas, cfg: &LayoutConfig) -> String {
    let output = match parse_people(people_json) {
        Ok(people) => {
            warn_unnamed(&people);
            build_output(&people, canvas, cfg)
        }
        Err(e) => {
            console_error(&format!("Error parsing people: {}", e));
            OrbitOutput::from_error(canvas, ErrorInfo::from(e))
        }
    };
    serde_json::to_string(&output).unwrap_or_else(|e| {
        console_error(&format!("Error serializing layout: {}", e));
        "{\"error\": {\"message\": \"Serialization error\", \"line\": 0, \"column\": 0}}".to_string()
    })
}

fn warn_unnamed(people: &[PersonInput]) {
    let unnamed = people
        .iter()
        .filter(|p| p.name.as_deref().is_none_or(str::is_empty))
        .count();
    if unnamed > 0 {
        console_warn(&format!(
            "{} people without a name; laid out with placeholder seeds",
            unnamed
        ));
    }
}
