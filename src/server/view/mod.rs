//! Server-rendered HTML pages.
//!
//! Pages are plain `format!` templates. Every value coming from the database or the request
//! goes through [`escape`] before it is interpolated.

pub mod auth;
pub mod loading;
pub mod page;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
