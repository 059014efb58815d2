//! Display Renderer: applies segment maps to displays

use crate::patterns::SegmentMap;
use crate::renderer::Renderer;

/// Light the segments `pattern` marks lit on one display, darken the rest.
/// Segments the pattern does not mention go dark.
pub fn update_display_with_pattern<R: Renderer + ?Sized>(
    renderer: &mut R,
    pattern: &SegmentMap,
    display_id: usize,
) {
    for segment_id in renderer.segment_ids(display_id) {
        let active = pattern.is_lit(&segment_id);
        renderer.set_segment_active(display_id, &segment_id, active);
    }
}

/// Darken every segment of every display
pub fn clear_display<R: Renderer + ?Sized>(renderer: &mut R) {
    for display_id in renderer.display_ids() {
        for segment_id in renderer.segment_ids(display_id) {
            renderer.set_segment_active(display_id, &segment_id, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::HeadlessRenderer;

    #[test]
    fn test_update_sets_exactly_lit_segments() {
        let mut renderer = HeadlessRenderer::with_displays(2, 4);
        let pattern = SegmentMap::from([("segment-0", true), ("segment-2", true), ("segment-3", false)]);

        update_display_with_pattern(&mut renderer, &pattern, 1);

        assert_eq!(renderer.display(1).unwrap().active_segments(), vec!["segment-0", "segment-2"]);
        assert!(renderer.display(2).unwrap().active_segments().is_empty());
    }

    #[test]
    fn test_update_darkens_segments_missing_from_pattern() {
        let mut renderer = HeadlessRenderer::with_displays(1, 3);
        renderer.set_segment_active(1, "segment-1", true);

        let pattern = SegmentMap::from([("segment-0", true)]);
        update_display_with_pattern(&mut renderer, &pattern, 1);

        assert_eq!(renderer.display(1).unwrap().active_segments(), vec!["segment-0"]);
    }

    #[test]
    fn test_pattern_ids_without_segments_are_ignored() {
        let mut renderer = HeadlessRenderer::with_displays(1, 2);
        let pattern = SegmentMap::from([("segment-9", true)]);

        update_display_with_pattern(&mut renderer, &pattern, 1);

        assert!(renderer.display(1).unwrap().active_segments().is_empty());
    }

    #[test]
    fn test_clear_twice_leaves_everything_dark() {
        let mut renderer = HeadlessRenderer::with_displays(3, 5);
        let pattern = SegmentMap::from([("segment-1", true), ("segment-4", true)]);
        for id in 1..=3 {
            update_display_with_pattern(&mut renderer, &pattern, id);
        }

        clear_display(&mut renderer);
        clear_display(&mut renderer);

        assert!(renderer.snapshot().values().all(|active| active.is_empty()));
    }
}
