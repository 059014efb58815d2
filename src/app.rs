//! SegmentDisplayApp: browser entry point
//!
//! `start()` fetches displayed content, pattern dictionary and SVG template,
//! then [`assemble`] builds the displays and runs the auto-search. Only after
//! that does the search button get its handler, so no search can see a
//! half-loaded dictionary.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::Event;

use crate::config::SegmentConfig;
use crate::context::AppContext;
use crate::loader::{self, normalize_text};
use crate::log;
use crate::patterns::PatternDictionary;
use crate::renderer::{DomRenderer, Renderer};
use crate::search::SearchController;

const COMPONENT: &str = "SegmentDisplay";

/// Everything that exists once `start()` has finished
struct Session {
    controller: Rc<SearchController>,
    renderer: Rc<RefCell<DomRenderer>>,
    _button_listener: Option<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
pub struct SegmentDisplayApp {
    config: SegmentConfig,
    started: Cell<bool>,
    session: Rc<RefCell<Option<Session>>>,
}

#[wasm_bindgen]
impl SegmentDisplayApp {
    /// Create the app from an optional config object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SegmentDisplayApp, JsValue> {
        Ok(Self {
            config: SegmentConfig::from_js(config)?,
            started: Cell::new(false),
            session: Rc::new(RefCell::new(None)),
        })
    }

    /// Load resources, build displays, run the auto-search and bind the button.
    /// Resolves to the number of displays.
    #[wasm_bindgen]
    pub fn start(&self) -> Promise {
        if self.started.replace(true) {
            return Promise::reject(&JsValue::from_str("SegmentDisplayApp already started"));
        }
        let config = self.config.clone();
        let session = Rc::clone(&self.session);

        future_to_promise(async move {
            let ready = initialize(config).await?;
            let display_count = ready.controller.context().number_of_displays();
            *session.borrow_mut() = Some(ready);
            Ok(JsValue::from(display_count as u32))
        })
    }

    /// Check if `start()` has finished
    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Search programmatically; returns the SearchReport
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        self.with_session(|session| {
            let mut renderer = session
                .renderer
                .try_borrow_mut()
                .map_err(|_| JsValue::from_str("Renderer busy"))?;
            let report = session
                .controller
                .handle_search(&mut *renderer, &normalize_text(query));
            serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
        })
    }

    /// Pattern names in matching order
    #[wasm_bindgen(js_name = patternNames)]
    pub fn pattern_names(&self) -> Result<JsValue, JsValue> {
        self.with_session(|session| {
            let names: Vec<&str> = session.controller.context().patterns().names().collect();
            serde_wasm_bindgen::to_value(&names).map_err(|e| JsValue::from_str(&e.to_string()))
        })
    }

    #[wasm_bindgen(js_name = displayCount)]
    pub fn display_count(&self) -> Result<usize, JsValue> {
        self.with_session(|session| Ok(session.controller.context().number_of_displays()))
    }

    /// The loaded dictionary with names sorted, as 4-space indented JSON
    #[wasm_bindgen(js_name = sortedPatternsJson)]
    pub fn sorted_patterns_json(&self) -> Result<String, JsValue> {
        self.with_session(|session| {
            session
                .controller
                .context()
                .patterns()
                .sorted()
                .to_pretty_json()
                .map_err(JsValue::from)
        })
    }
}

impl SegmentDisplayApp {
    fn with_session<T>(
        &self,
        f: impl FnOnce(&Session) -> Result<T, JsValue>,
    ) -> Result<T, JsValue> {
        let session = self.session.borrow();
        let session = session
            .as_ref()
            .ok_or_else(|| JsValue::from_str("SegmentDisplayApp not started"))?;
        f(session)
    }
}

/// What `start()` fetched; `None` marks a failed load
#[derive(Debug, Clone, Default)]
pub struct StartupResources {
    /// Trimmed, lower-cased displayed content
    pub displayed: Option<String>,
    pub patterns: Option<PatternDictionary>,
    pub svg_template: Option<String>,
}

/// Build the displays and run the auto-search from already fetched resources.
///
/// A failed displayed-content load runs no search (the loader has already
/// written the error text); an empty one shows the empty-query prompt. A
/// failed pattern load leaves an empty dictionary.
pub fn assemble<R: Renderer + ?Sized>(
    renderer: &mut R,
    display_count: Option<usize>,
    resources: StartupResources,
) -> SearchController {
    let number_of_displays =
        AppContext::resolve_display_count(display_count, resources.displayed.as_deref());

    for display_id in 1..=number_of_displays {
        renderer.create_display(display_id);
    }

    match resources.svg_template.as_deref() {
        Some(svg) => {
            for display_id in renderer.display_ids() {
                if let Err(e) = renderer.install_template(display_id, svg) {
                    log::error(COMPONENT, &format!("Display {}: {}", display_id, e));
                }
            }
        }
        None => log::warn(COMPONENT, "Displays created without segments"),
    }

    let patterns = resources.patterns.unwrap_or_default();
    let controller = SearchController::new(Rc::new(AppContext::new(patterns, number_of_displays)));

    if let Some(query) = resources.displayed.as_deref() {
        controller.handle_search(renderer, query);
    }

    log::info(
        COMPONENT,
        &format!(
            "Ready: {} displays, {} patterns",
            number_of_displays,
            controller.context().patterns().len()
        ),
    );
    controller
}

async fn initialize(config: SegmentConfig) -> Result<Session, JsValue> {
    let renderer = Rc::new(RefCell::new(DomRenderer::from_config(&config)?));

    let resources = StartupResources {
        displayed: loader::fetch_text(&config.displayed_path, &*renderer).await,
        patterns: loader::fetch_json(&config.patterns_path).await,
        svg_template: loader::fetch_svg(&config.svg_template_path).await,
    };

    let controller = Rc::new(assemble(
        &mut *renderer.borrow_mut(),
        config.display_count,
        resources,
    ));
    let button_listener = bind_search_button(&config.button_id, &controller, &renderer);

    Ok(Session {
        controller,
        renderer,
        _button_listener: button_listener,
    })
}

/// Attach the click handler that searches the input's value
fn bind_search_button(
    button_id: &str,
    controller: &Rc<SearchController>,
    renderer: &Rc<RefCell<DomRenderer>>,
) -> Option<Closure<dyn FnMut(Event)>> {
    let button = renderer.borrow().document().get_element_by_id(button_id);
    let Some(button) = button else {
        log::warn(COMPONENT, &format!("#{} missing, search button disabled", button_id));
        return None;
    };

    let controller = Rc::clone(controller);
    let renderer = Rc::clone(renderer);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Ok(mut renderer) = renderer.try_borrow_mut() {
            controller.run_from_input(&mut *renderer);
        }
    });

    match button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        Ok(()) => Some(on_click),
        Err(e) => {
            log::error(COMPONENT, &format!("Search button not bound: {:?}", e));
            None
        }
    }
}
