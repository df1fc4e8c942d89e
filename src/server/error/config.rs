//! Configuration errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
/// Invalid configuration, fatal at startup.
pub enum ConfigError {
    /// Environment variable set to a value that does not parse or is out of range.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Variable name.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
