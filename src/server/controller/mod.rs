//! HTTP controller endpoints.
//!
//! This module contains the Axum handlers for session authentication and the loading record
//! pages. Controllers read the session and form input, call into services, and answer with a
//! rendered page or a redirect. They use tower-sessions for session state and utoipa for
//! OpenAPI documentation.

pub mod auth;
pub mod loading;
pub mod util;

use axum::{http::StatusCode, response::IntoResponse};

use crate::server::view;

/// Fallback for paths that match no route
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        view::page::error_page("Not found", "The page you are looking for does not exist."),
    )
}
