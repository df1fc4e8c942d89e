//! Loading record page handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::server::{
    controller::util::{path::record_id, session::require_session},
    error::Error,
    model::{
        app::AppState,
        loading::LoadingForm,
        session::notice::{Notice, SessionNotices},
    },
    service::loading::LoadingService,
    view,
};

/// OpenAPI tag of the loading record pages
pub static LOADING_TAG: &str = "loading";

/// Lists all loading records, most recently updated first
///
/// # Responses
/// - 200 (OK): Listing page
/// - 303 (See Other): No active session, redirect to login
/// - 500 (Internal Server Error): There was an issue with the database or the session
#[utoipa::path(
    get,
    path = "/index",
    tag = LOADING_TAG,
    responses(
        (status = 200, description = "Listing page", body = String, content_type = "text/html"),
        (status = 303, description = "No active session, redirect to login"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let employee = require_session(&state, &session).await?;

    let records = LoadingService::new(&state.db).list().await?;
    let notices = SessionNotices::take(&session).await?;

    Ok(view::loading::list_page(
        &employee.functional_code,
        &notices,
        &records,
    ))
}

/// Renders the empty creation form
///
/// # Responses
/// - 200 (OK): Creation form
/// - 303 (See Other): No active session, redirect to login
/// - 500 (Internal Server Error): There was an issue with the database or the session
#[utoipa::path(
    get,
    path = "/add",
    tag = LOADING_TAG,
    responses(
        (status = 200, description = "Creation form", body = String, content_type = "text/html"),
        (status = 303, description = "No active session, redirect to login"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn add_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let employee = require_session(&state, &session).await?;

    let notices = SessionNotices::take(&session).await?;

    Ok(view::loading::add_page(&employee.functional_code, &notices))
}

/// Creates a loading record from the submitted form
///
/// # Responses
/// - 303 (See Other): Record created, redirect to the listing; or no active session, redirect to login
/// - 422 (Unprocessable Entity): Validation failed, empty creation form with a notice
/// - 500 (Internal Server Error): There was an issue with the database or the session
#[utoipa::path(
    post,
    path = "/add",
    tag = LOADING_TAG,
    request_body(content = LoadingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Record created or no active session"),
        (status = 422, description = "Validation failed, creation form with a notice", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoadingForm>,
) -> Result<Response, Error> {
    let employee = require_session(&state, &session).await?;

    match LoadingService::new(&state.db)
        .create(form, &employee.functional_code)
        .await
    {
        Ok(record) => {
            SessionNotices::push(
                &session,
                Notice::success(format!("Loading {} added.", record.plate)),
            )
            .await?;

            Ok(Redirect::to("/index").into_response())
        }
        Err(Error::LoadingError(err)) if err.is_validation() => {
            let mut notices = SessionNotices::take(&session).await?;
            notices.push(Notice::warning(err.notice_message()));

            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                view::loading::add_page(&employee.functional_code, &notices),
            )
                .into_response())
        }
        Err(err) => Err(err),
    }
}

/// Renders the edit form pre-filled with the stored record
///
/// # Responses
/// - 200 (OK): Edit form
/// - 303 (See Other): No active session, redirect to login
/// - 404 (Not Found): No loading record with that ID, or the ID is not a valid record ID
/// - 500 (Internal Server Error): There was an issue with the database or the session
#[utoipa::path(
    get,
    path = "/edit/{id}",
    tag = LOADING_TAG,
    params(("id" = i32, Path, description = "Loading record ID")),
    responses(
        (status = 200, description = "Edit form", body = String, content_type = "text/html"),
        (status = 303, description = "No active session, redirect to login"),
        (status = 404, description = "Loading record not found or invalid ID", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn edit_page(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let employee = require_session(&state, &session).await?;
    let id = record_id(path)?;

    let record = LoadingService::new(&state.db).get(id).await?;
    let notices = SessionNotices::take(&session).await?;

    Ok(view::loading::edit_page(
        &employee.functional_code,
        &notices,
        &record,
    ))
}

/// Overwrites a loading record with the submitted form
///
/// # Responses
/// - 303 (See Other): Record updated, redirect to the listing; or no active session, redirect to login
/// - 404 (Not Found): No loading record with that ID, or the ID is not a valid record ID
/// - 422 (Unprocessable Entity): Validation failed, edit form with the stored values and a notice
/// - 500 (Internal Server Error): There was an issue with the database or the session
#[utoipa::path(
    post,
    path = "/edit/{id}",
    tag = LOADING_TAG,
    params(("id" = i32, Path, description = "Loading record ID")),
    request_body(content = LoadingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Record updated or no active session"),
        (status = 404, description = "Loading record not found or invalid ID", body = String, content_type = "text/html"),
        (status = 422, description = "Validation failed, edit form with a notice", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
    Form(form): Form<LoadingForm>,
) -> Result<Response, Error> {
    let employee = require_session(&state, &session).await?;
    let id = record_id(path)?;
    let loading_service = LoadingService::new(&state.db);

    match loading_service
        .update(id, form, &employee.functional_code)
        .await
    {
        Ok(record) => {
            SessionNotices::push(
                &session,
                Notice::success(format!("Loading {} updated.", record.plate)),
            )
            .await?;

            Ok(Redirect::to("/index").into_response())
        }
        Err(Error::LoadingError(err)) if err.is_validation() => {
            let record = loading_service.get(id).await?;

            let mut notices = SessionNotices::take(&session).await?;
            notices.push(Notice::warning(err.notice_message()));

            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                view::loading::edit_page(&employee.functional_code, &notices, &record),
            )
                .into_response())
        }
        Err(err) => Err(err),
    }
}

/// Permanently deletes a loading record
///
/// # Responses
/// - 303 (See Other): Record deleted, redirect to the listing; or no active session, redirect to login
/// - 404 (Not Found): No loading record with that ID, or the ID is not a valid record ID
/// - 500 (Internal Server Error): There was an issue with the database or the session
#[utoipa::path(
    post,
    path = "/delete/{id}",
    tag = LOADING_TAG,
    params(("id" = i32, Path, description = "Loading record ID")),
    responses(
        (status = 303, description = "Record deleted or no active session"),
        (status = 404, description = "Loading record not found or invalid ID", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/html")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let employee = require_session(&state, &session).await?;
    let id = record_id(path)?;

    LoadingService::new(&state.db)
        .delete(id, &employee.functional_code)
        .await?;

    SessionNotices::push(&session, Notice::success("Loading deleted.")).await?;

    Ok(Redirect::to("/index"))
}
