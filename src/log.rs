//! Console logging with a `[Component]` prefix
//!
//! Browser builds write to the devtools console. Host builds (unit tests)
//! write to stderr, since web-sys console calls only work inside wasm32.

fn line(component: &str, message: &str) -> String {
    format!("[{}] {}", component, message)
}

#[cfg(target_arch = "wasm32")]
pub fn info(component: &str, message: &str) {
    web_sys::console::log_1(&line(component, message).into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(component: &str, message: &str) {
    web_sys::console::warn_1(&line(component, message).into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(component: &str, message: &str) {
    web_sys::console::error_1(&line(component, message).into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(component: &str, message: &str) {
    eprintln!("{}", line(component, message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(component: &str, message: &str) {
    eprintln!("WARN {}", line(component, message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(component: &str, message: &str) {
    eprintln!("ERROR {}", line(component, message));
}
