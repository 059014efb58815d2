// segdisplay/src/config.rs
//
// Page and resource configuration

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Where resources live and which page elements to bind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentConfig {
    /// Pattern dictionary (JSON object of name -> segment map)
    pub patterns_path: String,

    /// Displayed-content text: default query and display count source
    pub displayed_path: String,

    /// SVG template inlined into every display
    pub svg_template_path: String,

    /// Fixed display count. None = length of the displayed content.
    pub display_count: Option<usize>,

    /// Element that receives the display containers
    pub wrapper_id: String,

    /// Text input holding the query
    pub input_id: String,

    /// Button that triggers a search
    pub button_id: String,

    /// Element showing status text
    pub result_id: String,

    /// Class toggled on lit segments
    pub active_class: String,

    /// Let clicks toggle individual segments
    pub interactive_segments: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            patterns_path: "./src/patterns.json".to_string(),
            displayed_path: "../displayed.txt".to_string(),
            svg_template_path: "./src/PEKSEG.svg".to_string(),
            display_count: None,
            wrapper_id: "svg-container-wrapper".to_string(),
            input_id: "search-query".to_string(),
            button_id: "search-pattern".to_string(),
            result_id: "search-result".to_string(),
            active_class: "active".to_string(),
            interactive_segments: false,
        }
    }
}

impl SegmentConfig {
    /// Read from a JS object; `undefined` and `null` give the defaults
    pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))
    }
}
