//! Page startup and search without a browser

use segdisplay::app::{assemble, StartupResources};
use segdisplay::loader::normalize_text;
use segdisplay::renderer::{HeadlessRenderer, Renderer};
use segdisplay::{PatternDictionary, SearchController};

const PATTERNS: &str = r#"{
    "h": {"segment-0": true, "segment-1": true, "segment-2": false},
    "i": {"segment-2": true},
    "hi there": {"segment-0": true, "segment-1": true, "segment-2": true}
}"#;

const TEMPLATE: &str = r#"<svg><g><rect/><polygon points=""/><path d=""/></g></svg>"#;

/// Start the page from a displayed-content file body
fn boot(displayed_file: &str) -> (SearchController, HeadlessRenderer) {
    let mut renderer = HeadlessRenderer::new();
    let controller = assemble(
        &mut renderer,
        None,
        StartupResources {
            displayed: Some(normalize_text(displayed_file)),
            patterns: Some(PatternDictionary::from_json(PATTERNS).unwrap()),
            svg_template: Some(TEMPLATE.to_string()),
        },
    );
    (controller, renderer)
}

#[test]
fn displayed_content_sizes_displays_and_is_the_first_query() {
    let (controller, renderer) = boot("  HI\n");

    assert_eq!(controller.context().number_of_displays(), 2);
    assert_eq!(renderer.display_ids(), vec![1, 2]);
    assert_eq!(renderer.segment_ids(1), vec!["segment-0", "segment-1", "segment-2"]);

    assert_eq!(renderer.display(1).unwrap().active_segments(), vec!["segment-0", "segment-1"]);
    assert_eq!(renderer.display(2).unwrap().active_segments(), vec!["segment-2"]);
    assert_eq!(renderer.result(), Some("Found configuration: i"));
}

#[test]
fn button_search_after_auto_run_resets_displays() {
    let (controller, mut renderer) = boot("hi");

    renderer.set_query("T");
    let report = controller.run_from_input(&mut renderer);

    // "t" only appears in "hi there"
    assert_eq!(report.outcomes[0].pattern.as_deref(), Some("hi there"));
    assert_eq!(
        renderer.display(1).unwrap().active_segments(),
        vec!["segment-0", "segment-1", "segment-2"]
    );
    assert!(renderer.display(2).unwrap().active_segments().is_empty());
}

#[test]
fn wraps_around_when_query_outgrows_displays() {
    let (controller, mut renderer) = boot("hi");

    let report = controller.handle_search(&mut renderer, "hih");

    let targets: Vec<_> = report.outcomes.iter().map(|o| o.display_id).collect();
    assert_eq!(targets, vec![1, 2, 1]);
    assert_eq!(renderer.result(), Some("Found configuration: h"));
}
