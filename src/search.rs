//! Search Controller: runs a query across the displays
//!
//! Each character of the query goes to display `(i mod N) + 1`, is matched
//! against the pattern names and, on a hit, is drawn on that display. Displays
//! are cleared once per search, not per character: a display that receives
//! several characters shows the last one that matched. The results area is
//! overwritten for every character, so only the last outcome stays visible.
//! The full run is returned as a [`SearchReport`].
//!
//! Characters are extended grapheme clusters, not UTF-16 code units, both
//! here and in the display count, so an emoji or a combining sequence takes
//! one display instead of two or more.

use std::rc::Rc;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::context::AppContext;
use crate::display::{clear_display, update_display_with_pattern};
use crate::loader::normalize_text;
use crate::log;
use crate::matcher::find_pattern_for_character;
use crate::renderer::Renderer;

const COMPONENT: &str = "SearchController";

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query.";
pub const NO_MATCH_MESSAGE: &str = "No matching configuration found.";

pub fn found_message(pattern_name: &str) -> String {
    format!("Found configuration: {}", pattern_name)
}

/// 1-based display for the character at 0-based `index`
pub fn target_display(index: usize, total_displays: usize) -> usize {
    index % total_displays.max(1) + 1
}

// =============================================================================
// Report
// =============================================================================

/// What happened to one character
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterOutcome {
    pub character: String,
    pub display_id: usize,
    /// Matched pattern name, None when nothing matched
    pub pattern: Option<String>,
}

/// Result of one search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub query: String,
    pub outcomes: Vec<CharacterOutcome>,
    /// Text left in the results area
    pub message: String,
}

impl SearchReport {
    pub fn matched_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.pattern.is_some()).count()
    }
}

// =============================================================================
// Controller
// =============================================================================

pub struct SearchController {
    context: Rc<AppContext>,
}

impl SearchController {
    pub fn new(context: Rc<AppContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Search using the current value of the query input
    pub fn run_from_input<R: Renderer + ?Sized>(&self, renderer: &mut R) -> SearchReport {
        let query = normalize_text(&renderer.read_query());
        self.handle_search(renderer, &query)
    }

    /// Run `query` (already normalized) against the displays
    pub fn handle_search<R: Renderer + ?Sized>(&self, renderer: &mut R, query: &str) -> SearchReport {
        if query.is_empty() {
            renderer.write_result(EMPTY_QUERY_MESSAGE);
            return SearchReport {
                query: String::new(),
                outcomes: Vec::new(),
                message: EMPTY_QUERY_MESSAGE.to_string(),
            };
        }

        clear_display(renderer);

        let total_displays = self.context.number_of_displays();
        let patterns = self.context.patterns();
        let mut outcomes = Vec::new();
        let mut message = String::new();

        for (index, character) in query.graphemes(true).enumerate() {
            let display_id = target_display(index, total_displays);
            let matched = find_pattern_for_character(patterns, character);

            message = match matched.and_then(|name| patterns.get(name).map(|s| (name, s))) {
                Some((name, segments)) => {
                    update_display_with_pattern(renderer, segments, display_id);
                    found_message(name)
                }
                None => NO_MATCH_MESSAGE.to_string(),
            };
            renderer.write_result(&message);

            outcomes.push(CharacterOutcome {
                character: character.to_string(),
                display_id,
                pattern: matched.map(String::from),
            });
        }

        let report = SearchReport {
            query: query.to_string(),
            outcomes,
            message,
        };
        log::info(
            COMPONENT,
            &format!(
                "'{}': {}/{} characters matched over {} displays",
                report.query,
                report.matched_count(),
                report.outcomes.len(),
                total_displays
            ),
        );
        report
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{PatternDictionary, SegmentMap};
    use crate::renderer::HeadlessRenderer;

    fn letters() -> PatternDictionary {
        let mut dict = PatternDictionary::new();
        dict.insert("a", SegmentMap::from([("segment-0", true), ("segment-1", true)]));
        dict.insert("b", SegmentMap::from([("segment-1", true), ("segment-2", true)]));
        dict.insert("h", SegmentMap::from([("segment-3", true)]));
        dict.insert("i", SegmentMap::from([("segment-4", true)]));
        dict
    }

    fn controller(displays: usize) -> SearchController {
        SearchController::new(Rc::new(AppContext::new(letters(), displays)))
    }

    #[test]
    fn test_target_display_round_robin() {
        for total in 1..=5 {
            for i in 0..20 {
                assert_eq!(target_display(i, total), (i % total) + 1);
            }
        }
    }

    #[test]
    fn test_empty_query_prompts_and_touches_nothing() {
        let mut renderer = HeadlessRenderer::with_displays(2, 5);
        renderer.set_segment_active(1, "segment-2", true);
        let before = renderer.snapshot();

        let report = controller(2).handle_search(&mut renderer, "");

        assert_eq!(renderer.result(), Some(EMPTY_QUERY_MESSAGE));
        assert_eq!(renderer.snapshot(), before);
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn test_last_character_message_wins() {
        let mut renderer = HeadlessRenderer::with_displays(2, 5);

        let report = controller(2).handle_search(&mut renderer, "az");

        assert_eq!(renderer.result(), Some(NO_MATCH_MESSAGE));
        assert_eq!(renderer.result_writes(), 2);
        assert_eq!(report.message, NO_MATCH_MESSAGE);

        controller(2).handle_search(&mut renderer, "za");
        assert_eq!(renderer.result(), Some("Found configuration: a"));
    }

    #[test]
    fn test_characters_spread_across_displays() {
        let mut renderer = HeadlessRenderer::with_displays(2, 5);

        let report = controller(2).handle_search(&mut renderer, "hi");

        assert_eq!(renderer.display(1).unwrap().active_segments(), vec!["segment-3"]);
        assert_eq!(renderer.display(2).unwrap().active_segments(), vec!["segment-4"]);
        let displays: Vec<_> = report.outcomes.iter().map(|o| o.display_id).collect();
        assert_eq!(displays, vec![1, 2]);
        assert_eq!(report.matched_count(), 2);
    }

    #[test]
    fn test_single_display_takes_characters_in_turn() {
        let mut renderer = HeadlessRenderer::with_displays(1, 5);

        let report = controller(1).handle_search(&mut renderer, "ab");

        // Display 1 is cleared once; "b" then sets every segment, so
        // segment-0 from "a" goes dark
        assert_eq!(
            renderer.display(1).unwrap().active_segments(),
            vec!["segment-1", "segment-2"]
        );
        assert_eq!(renderer.result(), Some("Found configuration: b"));
        assert_eq!(report.outcomes[0].display_id, 1);
        assert_eq!(report.outcomes[1].display_id, 1);
    }

    #[test]
    fn test_no_match_keeps_previous_pattern_on_display() {
        let mut renderer = HeadlessRenderer::with_displays(1, 5);

        controller(1).handle_search(&mut renderer, "hz");

        // "z" matches nothing, so display 1 still shows "h"
        assert_eq!(renderer.display(1).unwrap().active_segments(), vec!["segment-3"]);
        assert_eq!(renderer.result(), Some(NO_MATCH_MESSAGE));
    }

    #[test]
    fn test_new_search_clears_previous_state() {
        let mut renderer = HeadlessRenderer::with_displays(3, 5);
        let c = controller(3);

        c.handle_search(&mut renderer, "abh");
        c.handle_search(&mut renderer, "i");

        let snapshot = renderer.snapshot();
        assert_eq!(snapshot[&1], vec!["segment-4".to_string()]);
        assert!(snapshot[&2].is_empty());
        assert!(snapshot[&3].is_empty());
    }

    #[test]
    fn test_run_from_input_normalizes() {
        let mut renderer = HeadlessRenderer::with_displays(2, 5);
        renderer.set_query("  HI \n");

        let report = controller(2).run_from_input(&mut renderer);

        assert_eq!(report.query, "hi");
        assert_eq!(renderer.result(), Some("Found configuration: i"));

        renderer.set_query("   ");
        controller(2).run_from_input(&mut renderer);
        assert_eq!(renderer.result(), Some(EMPTY_QUERY_MESSAGE));
    }

    #[test]
    fn test_grapheme_cluster_is_one_character() {
        let mut renderer = HeadlessRenderer::with_displays(2, 5);

        // "e" + combining acute, then a flag made of two regional indicators
        let report = controller(2).handle_search(&mut renderer, "e\u{301}\u{1F1E9}\u{1F1EA}h");

        let characters: Vec<_> = report.outcomes.iter().map(|o| o.character.as_str()).collect();
        assert_eq!(characters, vec!["e\u{301}", "\u{1F1E9}\u{1F1EA}", "h"]);
        let displays: Vec<_> = report.outcomes.iter().map(|o| o.display_id).collect();
        assert_eq!(displays, vec![1, 2, 1]);
        assert_eq!(renderer.display(1).unwrap().active_segments(), vec!["segment-3"]);
    }

    #[test]
    fn test_empty_dictionary_reports_no_match() {
        let c = SearchController::new(Rc::new(AppContext::new(PatternDictionary::new(), 1)));
        let mut renderer = HeadlessRenderer::with_displays(1, 3);

        let report = c.handle_search(&mut renderer, "abc");

        assert_eq!(report.matched_count(), 0);
        assert_eq!(renderer.result(), Some(NO_MATCH_MESSAGE));
    }
}
