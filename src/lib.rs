//! SegDisplay: SVG segmented-display search widget
//!
//! Lights the segments of SVG displays by matching each character of a query
//! against a dictionary of named segment patterns.
//!
//! # Architecture
//! - `loader.rs` - Resource Loader: patterns.json, displayed.txt, SVG template
//! - `patterns.rs` - PatternDictionary / SegmentMap (ordered, JSON-backed)
//! - `segments.rs` - Segment and display naming, template scanning
//! - `matcher.rs` - Pattern Matcher: first name containing a character
//! - `display.rs` - Display Renderer: apply a pattern, clear all displays
//! - `search.rs` - Search Controller: round-robin a query over the displays
//! - `renderer/` - Renderer seam (DOM and headless implementations)
//! - `context.rs` - AppContext: dictionary + display count, read-only
//! - `config.rs` - SegmentConfig: resource paths and element ids
//! - `app.rs` - SegmentDisplayApp: WASM entry point
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { SegmentDisplayApp } from 'segdisplay';
//!
//! await init();
//!
//! const app = new SegmentDisplayApp({ patternsPath: './src/patterns.json' });
//! await app.start();               // builds displays, runs displayed.txt as the query
//!
//! const report = app.search('hi'); // { query, outcomes: [{ character, displayId, pattern }], message }
//! console.log(app.patternNames());
//! ```

pub mod app;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod loader;
pub mod log;
pub mod matcher;
pub mod patterns;
pub mod renderer;
pub mod search;
pub mod segments;

pub use app::SegmentDisplayApp;
pub use config::SegmentConfig;
pub use context::AppContext;
pub use display::{clear_display, update_display_with_pattern};
pub use error::LoadError;
pub use matcher::find_pattern_for_character;
pub use patterns::{PatternDictionary, SegmentMap};
pub use renderer::{DomRenderer, HeadlessRenderer, Renderer};
pub use search::{CharacterOutcome, SearchController, SearchReport};

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("segdisplay v{}", env!("CARGO_PKG_VERSION"))
}
