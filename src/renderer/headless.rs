//! HeadlessRenderer: displays held in memory

use std::collections::BTreeMap;

use crate::error::LoadError;
use crate::renderer::Renderer;
use crate::segments::{segment_id, SegmentScanner};

/// One in-memory display: segment ids with their active flag
#[derive(Debug, Clone, Default)]
pub struct HeadlessDisplay {
    segments: Vec<(String, bool)>,
}

impl HeadlessDisplay {
    pub fn is_active(&self, segment_id: &str) -> bool {
        self.segments
            .iter()
            .any(|(id, active)| id == segment_id && *active)
    }

    /// Active segment ids in document order
    pub fn active_segments(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|(_, active)| *active)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

/// Renderer that keeps displays, input and result text in memory
#[derive(Default)]
pub struct HeadlessRenderer {
    displays: BTreeMap<usize, HeadlessDisplay>,
    scanner: SegmentScanner,
    query: String,
    result: Option<String>,
    result_writes: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with `count` displays of `segments` segments each
    pub fn with_displays(count: usize, segments: usize) -> Self {
        let mut renderer = Self::new();
        for display_id in 1..=count {
            renderer.create_display(display_id);
            if let Some(display) = renderer.displays.get_mut(&display_id) {
                display.segments = (0..segments).map(|i| (segment_id(i), false)).collect();
            }
        }
        renderer
    }

    pub fn display(&self, display_id: usize) -> Option<&HeadlessDisplay> {
        self.displays.get(&display_id)
    }

    /// Simulate typing into the query input
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Number of times the results area has been written
    pub fn result_writes(&self) -> usize {
        self.result_writes
    }

    /// Active ids of every display, keyed by display index
    pub fn snapshot(&self) -> BTreeMap<usize, Vec<String>> {
        self.displays
            .iter()
            .map(|(&id, d)| (id, d.active_segments().into_iter().map(String::from).collect()))
            .collect()
    }
}

impl Renderer for HeadlessRenderer {
    fn create_display(&mut self, display_id: usize) {
        self.displays.entry(display_id).or_default();
    }

    fn install_template(&mut self, display_id: usize, svg: &str) -> Result<usize, LoadError> {
        let count = self.scanner.count(svg);
        let display = self
            .displays
            .get_mut(&display_id)
            .ok_or_else(|| LoadError::Missing(format!("display {}", display_id)))?;
        display.segments = (0..count).map(|i| (segment_id(i), false)).collect();
        Ok(count)
    }

    fn display_ids(&self) -> Vec<usize> {
        self.displays.keys().copied().collect()
    }

    fn segment_ids(&self, display_id: usize) -> Vec<String> {
        self.displays
            .get(&display_id)
            .map(|d| d.segments.iter().map(|(id, _)| id.clone()).collect())
            .unwrap_or_default()
    }

    fn set_segment_active(&mut self, display_id: usize, segment_id: &str, active: bool) {
        if let Some(display) = self.displays.get_mut(&display_id) {
            for (id, flag) in display.segments.iter_mut() {
                if id == segment_id {
                    *flag = active;
                }
            }
        }
    }

    fn read_query(&self) -> String {
        self.query.clone()
    }

    fn write_result(&mut self, text: &str) {
        self.result = Some(text.to_string());
        self.result_writes += 1;
    }
}
