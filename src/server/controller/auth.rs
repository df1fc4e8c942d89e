//! Login, logout and entry point handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::server::{
    error::Error,
    model::{
        app::AppState,
        session::{
            employee::SessionEmployeeCode,
            notice::{Notice, SessionNotices},
        },
    },
    service::auth::AuthService,
    view,
};

/// OpenAPI tag of the authentication pages
pub static AUTH_TAG: &str = "auth";

/// Login form as submitted by the browser
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginForm {
    /// Employee functional code
    #[serde(default)]
    pub functional_code: String,
    /// Employee password
    #[serde(default)]
    pub password: String,
}

/// Entry point redirecting to the listing or the login page
///
/// # Responses
/// - 307 (Temporary Redirect): To `/index` with an active session, to `/login` otherwise
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the listing or the login page"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn home(session: Session) -> Result<impl IntoResponse, Error> {
    let target = match SessionEmployeeCode::get(&session).await? {
        Some(_) => "/index",
        None => "/login",
    };

    Ok(Redirect::temporary(target))
}

/// Renders the login form
///
/// # Responses
/// - 200 (OK): Login form with any pending notices
/// - 303 (See Other): Already logged in, redirect to the listing
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login form", body = String, content_type = "text/html"),
        (status = 303, description = "Already logged in, redirect to the listing"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn login_page(session: Session) -> Result<Response, Error> {
    if SessionEmployeeCode::get(&session).await?.is_some() {
        return Ok(Redirect::to("/index").into_response());
    }

    let notices = SessionNotices::take(&session).await?;

    Ok(view::auth::login_page(&notices).into_response())
}

/// Authenticates an employee by functional code and password
///
/// On success the session ID is cycled and bound to the employee's functional code. On failure
/// the session is left untouched and the login form is rendered again with a notice.
///
/// # Responses
/// - 303 (See Other): Logged in, redirect to the listing
/// - 401 (Unauthorized): Unknown functional code or wrong password, login form with a notice
/// - 500 (Internal Server Error): There was an issue with the database or the session
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to the listing"),
        (status = 401, description = "Invalid credentials, login form with a notice", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    let employee = AuthService::new(&state.db)
        .login(&form.functional_code, &form.password)
        .await?;

    session.cycle_id().await?;
    SessionEmployeeCode::insert(&session, &employee.functional_code).await?;
    SessionNotices::push(&session, Notice::success("Logged in successfully.")).await?;

    Ok(Redirect::to("/index"))
}

/// Logs the employee out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the login page
/// - 500 (Internal Server Error): There was an issue writing the session
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the login page"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.clear().await;

    SessionNotices::push(&session, Notice::info("You have been logged out.")).await?;

    Ok(Redirect::temporary("/login"))
}
