//! Backend API Bindings
//!
//! Frontend calls to the task and chat endpoints, organized by domain.

mod tasks;
mod chat;

pub use tasks::*;
pub use chat::*;

/// Absolute URL for an API path on the serving origin
pub(crate) fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, path)
}
