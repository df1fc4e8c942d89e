//! Error types for the Carregamento server application.
//!
//! This module provides the error handling system with specialized error types for the
//! different domains (authentication, configuration, loading records). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error definitions
//! with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod loading;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{
    error::{auth::AuthError, config::ConfigError, loading::LoadingError},
    view,
};

/// Main error type for the Carregamento server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to the page or redirect shown to the employee.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Authentication errors (bad credentials, missing or stale session)
/// - Loading record errors (validation, unknown record ID)
/// - External library errors (database, sessions, password hashing, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, session gate).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Loading record error (validation, record not found).
    #[error(transparent)]
    LoadingError(#[from] LoadingError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Password hashing error (malformed hash parameters, salt generation).
    #[error(transparent)]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors know how to present themselves (login page, redirect, 404 page). Every other
/// error is logged and answered with a generic 500 page.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::LoadingError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the employee only sees a generic error page, to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            view::page::error_page("Internal server error", "Something went wrong, please try again."),
        )
            .into_response()
    }
}
