//! Resource Loader: static GETs for patterns, displayed content and the SVG template
//!
//! Failures never propagate past this module. Each fetch logs, surfaces the
//! failure the way the page expects (alert for patterns, results text for the
//! displayed content) and hands back `None`.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{describe_js_error, LoadError};
use crate::log;
use crate::patterns::PatternDictionary;
use crate::renderer::Renderer;

const COMPONENT: &str = "Loader";
const ALERT_MESSAGE: &str = "Failed to load resource.";

/// Trim and lower-case; applied to queries and the displayed content
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Prefix for text load failures shown in the results area
pub fn read_error_message(err: &LoadError) -> String {
    format!("Error reading file: {}", err)
}

/// GET `path` and return the body; non-2xx is an error
async fn fetch_body(path: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Missing("window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| LoadError::Network {
            path: path.to_string(),
            reason: describe_js_error(&e),
        })?;
    let response: Response = response.dyn_into().map_err(|_| LoadError::Network {
        path: path.to_string(),
        reason: "fetch did not return a Response".to_string(),
    })?;

    if !response.ok() {
        return Err(LoadError::Status {
            path: path.to_string(),
            status: response.status(),
        });
    }

    let body_promise = response.text().map_err(|e| LoadError::Parse {
        path: path.to_string(),
        reason: describe_js_error(&e),
    })?;
    let body = JsFuture::from(body_promise).await.map_err(|e| LoadError::Parse {
        path: path.to_string(),
        reason: describe_js_error(&e),
    })?;

    body.as_string().ok_or_else(|| LoadError::Parse {
        path: path.to_string(),
        reason: "body is not text".to_string(),
    })
}

/// Load the pattern dictionary. On failure: console error + blocking alert.
pub async fn fetch_json(path: &str) -> Option<PatternDictionary> {
    let result = match fetch_body(path).await {
        Ok(body) => PatternDictionary::from_json(&body).map_err(|e| match e {
            LoadError::Parse { reason, .. } => LoadError::Parse {
                path: path.to_string(),
                reason,
            },
            other => other,
        }),
        Err(e) => Err(e),
    };

    match result {
        Ok(patterns) => {
            log::info(COMPONENT, &format!("Loaded {} patterns from {}", patterns.len(), path));
            Some(patterns)
        }
        Err(e) => {
            log::error(COMPONENT, &format!("Error loading resource: {}", e));
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(ALERT_MESSAGE);
            }
            None
        }
    }
}

/// Load a text file, trimmed and lower-cased. On failure: console error +
/// message in the results area.
pub async fn fetch_text<R: Renderer + ?Sized>(path: &str, renderer: &RefCell<R>) -> Option<String> {
    match fetch_body(path).await {
        Ok(body) => Some(normalize_text(&body)),
        Err(e) => {
            log::error(COMPONENT, &format!("Error: {}", e));
            renderer.borrow_mut().write_result(&read_error_message(&e));
            None
        }
    }
}

/// Load the SVG template as-is
pub async fn fetch_svg(path: &str) -> Option<String> {
    match fetch_body(path).await {
        Ok(body) => Some(body),
        Err(e) => {
            log::error(COMPONENT, &format!("SVG template unavailable: {}", e));
            None
        }
    }
}
