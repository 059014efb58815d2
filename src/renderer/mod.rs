//! Renderer: the presentation seam
//!
//! Matching and search logic talk to the page only through [`Renderer`].
//! - `dom.rs` - DomRenderer: browser DOM via web-sys
//! - `headless.rs` - HeadlessRenderer: in-memory displays for tests and non-browser hosts

pub mod dom;
pub mod headless;

pub use dom::DomRenderer;
pub use headless::HeadlessRenderer;

use crate::error::LoadError;

/// Presentation operations used by the display factory and search controller
pub trait Renderer {
    /// Create the container for a 1-based display index
    fn create_display(&mut self, display_id: usize);

    /// Inline the SVG template into a display and number its segments.
    /// Returns the number of segments found.
    fn install_template(&mut self, display_id: usize, svg: &str) -> Result<usize, LoadError>;

    /// Display indices in creation order
    fn display_ids(&self) -> Vec<usize>;

    /// Segment identifiers of one display, in document order
    fn segment_ids(&self, display_id: usize) -> Vec<String>;

    fn set_segment_active(&mut self, display_id: usize, segment_id: &str, active: bool);

    /// Raw value of the query input
    fn read_query(&self) -> String;

    /// Replace the results area text
    fn write_result(&mut self, text: &str);
}
