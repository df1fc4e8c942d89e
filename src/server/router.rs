//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All pages are registered here with their OpenAPI specifications, and Swagger
//! UI is configured to document them at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with every page and the Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Redirect to the listing or the login page
/// - `GET /login`, `POST /login` - Login form and authentication
/// - `GET /logout` - Clear the session
/// - `GET /index` - Loading record listing
/// - `GET /add`, `POST /add` - Creation form and insert
/// - `GET /edit/{id}`, `POST /edit/{id}` - Edit form and update
/// - `POST /delete/{id}` - Delete a loading record
///
/// Paths matching no route answer with a 404 page.
///
/// # Returns
/// An Axum `Router<AppState>` ready to receive its state and the session layer.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Carregamento", description = "Loading status tracker pages"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session authentication"),
        (name = controller::loading::LOADING_TAG, description = "Loading record pages"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::home))
        .routes(routes!(controller::auth::login_page, controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::loading::list))
        .routes(routes!(controller::loading::add_page, controller::loading::add))
        .routes(routes!(
            controller::loading::edit_page,
            controller::loading::edit
        ))
        .routes(routes!(controller::loading::delete))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::not_found)
}
