//! Loading record validation and lookup errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::view;

/// Loading record errors, either rejected form input or a missing record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoadingError {
    /// Plate is empty after trimming.
    #[error("Plate is required")]
    EmptyPlate,
    /// Status label outside of the fixed set.
    #[error("Unknown loading status {0:?}")]
    UnknownStatus(String),
    /// Text field longer than its column allows, counted in characters.
    #[error("{field} is longer than {max} characters")]
    TooLong {
        /// Form field name.
        field: &'static str,
        /// Maximum number of characters.
        max: usize,
    },
    /// No record with this ID.
    #[error("Loading record {0} not found")]
    NotFound(i32),
    /// Path segment that cannot be a record ID, so no record can match it.
    #[error("Loading record {0:?} not found, not a valid ID")]
    InvalidId(String),
}

impl LoadingError {
    /// Whether the error comes from rejected form input rather than a missing record
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyPlate | Self::UnknownStatus(_) | Self::TooLong { .. }
        )
    }

    /// Message shown to the employee next to the form
    pub fn notice_message(&self) -> String {
        match self {
            Self::EmptyPlate => "Plate is required.".to_string(),
            Self::UnknownStatus(_) => "Please pick one of the listed statuses.".to_string(),
            Self::TooLong { field, max } => {
                format!("{field} must be at most {max} characters.")
            }
            Self::NotFound(_) | Self::InvalidId(_) => "Loading record not found.".to_string(),
        }
    }
}

impl IntoResponse for LoadingError {
    fn into_response(self) -> Response {
        if self.is_validation() {
            tracing::debug!("{}", self);

            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                view::page::error_page("Invalid input", &self.notice_message()),
            )
                .into_response();
        }

        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            view::page::error_page("Not found", &self.notice_message()),
        )
            .into_response()
    }
}
