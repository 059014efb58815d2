//! DomRenderer: displays as inlined SVG inside the page
//!
//! Each display is `<div id="svg-container-N" class="svg-display">` appended
//! to the wrapper element, holding its own copy of the SVG template. Lit
//! segments carry the configured active class.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, SvgElement};

use crate::config::SegmentConfig;
use crate::error::LoadError;
use crate::log;
use crate::renderer::Renderer;
use crate::segments::{display_container_id, segment_id, DISPLAY_CLASS, SEGMENT_SELECTOR};

const COMPONENT: &str = "DomRenderer";

/// Segment-capable elements under `root`, in document order
fn segment_elements(root: &Element) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(SEGMENT_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Number the segments of one inlined SVG instance `segment-0..`
pub fn initialize_svg_segments(svg: &Element) -> Vec<Element> {
    let segments = segment_elements(svg);
    for (index, element) in segments.iter().enumerate() {
        element.set_id(&segment_id(index));
    }
    segments
}

pub struct DomRenderer {
    document: Document,
    wrapper: Element,
    input_id: String,
    result_id: String,
    active_class: String,
    interactive_segments: bool,
    displays: Vec<usize>,
    /// Click handlers for interactive segments; dropping them detaches the callbacks
    segment_listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl DomRenderer {
    /// Bind to the current document. Fails if the wrapper element is absent.
    pub fn from_config(config: &SegmentConfig) -> Result<Self, LoadError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| LoadError::Missing("document".to_string()))?;
        let wrapper = document
            .get_element_by_id(&config.wrapper_id)
            .ok_or_else(|| LoadError::Missing(format!("#{}", config.wrapper_id)))?;

        Ok(Self {
            document,
            wrapper,
            input_id: config.input_id.clone(),
            result_id: config.result_id.clone(),
            active_class: config.active_class.clone(),
            interactive_segments: config.interactive_segments,
            displays: Vec::new(),
            segment_listeners: Vec::new(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Looked up under the wrapper so two widgets on one page stay separate
    fn container(&self, display_id: usize) -> Option<Element> {
        self.wrapper
            .query_selector(&format!("#{}", display_container_id(display_id)))
            .ok()
            .flatten()
    }

    fn make_interactive(&mut self, segments: &[Element]) {
        for element in segments {
            if let Some(svg_element) = element.dyn_ref::<SvgElement>() {
                let _ = svg_element.style().set_property("cursor", "pointer");
            }

            let target = element.clone();
            let class = self.active_class.clone();
            let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let _ = target.class_list().toggle(&class);
            });

            match element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
                Ok(()) => self.segment_listeners.push(on_click),
                Err(e) => log::warn(COMPONENT, &format!("Click handler not attached: {:?}", e)),
            }
        }
    }
}

impl Renderer for DomRenderer {
    fn create_display(&mut self, display_id: usize) {
        let container = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::error(COMPONENT, &format!("Cannot create display {}: {:?}", display_id, e));
                return;
            }
        };
        container.set_id(&display_container_id(display_id));
        let _ = container.class_list().add_1(DISPLAY_CLASS);

        if let Err(e) = self.wrapper.append_child(&container) {
            log::error(COMPONENT, &format!("Cannot attach display {}: {:?}", display_id, e));
            return;
        }
        self.displays.push(display_id);
    }

    fn install_template(&mut self, display_id: usize, svg: &str) -> Result<usize, LoadError> {
        let container = self
            .container(display_id)
            .ok_or_else(|| LoadError::Missing(format!("#{}", display_container_id(display_id))))?;
        container.set_inner_html(svg);

        let root = container
            .query_selector("svg")
            .ok()
            .flatten()
            .ok_or_else(|| LoadError::Parse {
                path: "SVG template".to_string(),
                reason: "no <svg> element".to_string(),
            })?;

        let segments = initialize_svg_segments(&root);
        if self.interactive_segments {
            self.make_interactive(&segments);
        }
        Ok(segments.len())
    }

    fn display_ids(&self) -> Vec<usize> {
        self.displays.clone()
    }

    fn segment_ids(&self, display_id: usize) -> Vec<String> {
        self.container(display_id)
            .map(|container| segment_elements(&container).iter().map(|el| el.id()).collect())
            .unwrap_or_default()
    }

    fn set_segment_active(&mut self, display_id: usize, segment_id: &str, active: bool) {
        let Some(container) = self.container(display_id) else {
            return;
        };
        for element in segment_elements(&container) {
            if element.id() == segment_id {
                let _ = element.class_list().toggle_with_force(&self.active_class, active);
            }
        }
    }

    fn read_query(&self) -> String {
        self.document
            .get_element_by_id(&self.input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn write_result(&mut self, text: &str) {
        match self.document.get_element_by_id(&self.result_id) {
            Some(el) => el.set_text_content(Some(text)),
            None => log::warn(COMPONENT, &format!("#{} missing, dropped: {}", self.result_id, text)),
        }
    }
}
