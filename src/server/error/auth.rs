//! Authentication errors and how they are answered.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::server::{model::session::notice::Notice, view};

#[derive(Error, Debug)]
/// Authentication failures, answered with the login page or a redirect to it.
pub enum AuthError {
    /// Unknown functional code or wrong password.
    #[error("Invalid functional code or password")]
    InvalidCredentials,
    /// No employee in the session.
    #[error("Employee functional code is not present in session")]
    NotLoggedIn,
    /// Session names an employee that no longer exists.
    #[error("Employee {0:?} not found in database despite having an active session")]
    EmployeeNotInDatabase(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    view::auth::login_page(&[Notice::danger(
                        "Invalid functional code or password.",
                    )]),
                )
                    .into_response()
            }
            Self::NotLoggedIn => {
                tracing::debug!("{}", self);

                Redirect::to("/login").into_response()
            }
            Self::EmployeeNotInDatabase(ref functional_code) => {
                tracing::debug!(
                    functional_code = %functional_code,
                    "{}",
                    self
                );

                Redirect::to("/login").into_response()
            }
        }
    }
}
