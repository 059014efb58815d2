//! Application context, built once during initialization and read-only after

use unicode_segmentation::UnicodeSegmentation;

use crate::patterns::PatternDictionary;

/// Pattern dictionary and display count shared by the search controller
#[derive(Debug, Clone)]
pub struct AppContext {
    patterns: PatternDictionary,
    number_of_displays: usize,
}

impl AppContext {
    /// A count of 0 is raised to 1 so round-robin stays defined
    pub fn new(patterns: PatternDictionary, number_of_displays: usize) -> Self {
        Self {
            patterns,
            number_of_displays: number_of_displays.max(1),
        }
    }

    /// Explicit count if given, else the character length of the displayed
    /// content. Missing or empty content gives 1.
    pub fn resolve_display_count(explicit: Option<usize>, displayed: Option<&str>) -> usize {
        explicit
            .unwrap_or_else(|| displayed.map_or(0, |text| text.graphemes(true).count()))
            .max(1)
    }

    pub fn patterns(&self) -> &PatternDictionary {
        &self.patterns
    }

    pub fn number_of_displays(&self) -> usize {
        self.number_of_displays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_from_displayed_content() {
        assert_eq!(AppContext::resolve_display_count(None, Some("hi")), 2);
        assert_eq!(AppContext::resolve_display_count(None, Some("hello world")), 11);
    }

    #[test]
    fn test_count_is_in_grapheme_clusters() {
        assert_eq!(AppContext::resolve_display_count(None, Some("e\u{301}")), 1);
        assert_eq!(AppContext::resolve_display_count(None, Some("a\u{1F600}")), 2);
    }

    #[test]
    fn test_explicit_count_wins() {
        assert_eq!(AppContext::resolve_display_count(Some(6), Some("hi")), 6);
        assert_eq!(AppContext::resolve_display_count(Some(3), None), 3);
    }

    #[test]
    fn test_count_never_zero() {
        assert_eq!(AppContext::resolve_display_count(None, None), 1);
        assert_eq!(AppContext::resolve_display_count(None, Some("")), 1);
        assert_eq!(AppContext::resolve_display_count(Some(0), None), 1);
        assert_eq!(AppContext::new(PatternDictionary::new(), 0).number_of_displays(), 1);
    }
}
