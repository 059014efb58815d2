//! Resource and DOM errors

use wasm_bindgen::JsValue;

/// Errors raised while loading resources or binding to the page
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request never produced a response
    Network { path: String, reason: String },
    /// The server answered with a non-2xx status
    Status { path: String, status: u16 },
    /// The body could not be read or decoded
    Parse { path: String, reason: String },
    /// A required page object (window, element id) is absent
    Missing(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Network { path, reason } => write!(f, "Failed to fetch {}: {}", path, reason),
            LoadError::Status { path, status } => {
                write!(f, "File not found: {} (HTTP {})", path, status)
            }
            LoadError::Parse { path, reason } => write!(f, "Failed to parse {}: {}", path, reason),
            LoadError::Missing(what) => write!(f, "Missing page element: {}", what),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<LoadError> for JsValue {
    fn from(e: LoadError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Best-effort text for a rejected JS promise
pub(crate) fn describe_js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_path() {
        let err = LoadError::Status {
            path: "../displayed.txt".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "File not found: ../displayed.txt (HTTP 404)");
    }

    #[test]
    fn test_missing_message() {
        let err = LoadError::Missing("#search-result".to_string());
        assert!(err.to_string().contains("#search-result"));
    }
}
