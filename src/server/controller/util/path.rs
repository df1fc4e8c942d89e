//! Record ID extraction for `/edit/{id}` and `/delete/{id}`.

use axum::extract::{rejection::PathRejection, Path};

use crate::server::error::loading::LoadingError;

/// Resolves the record ID of a `/{action}/{id}` path
///
/// Extraction is deferred to the handler so the session gate runs first. A segment that is not
/// an `i32` (non-numeric, out of range) cannot name a stored record and is reported as not found.
///
/// # Returns
/// - `Ok(i32)`: Record ID
/// - `Err(LoadingError::InvalidId)`: Path segment is not a valid record ID
pub fn record_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, LoadingError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!("Rejected loading record path: {}", rejection.body_text());

            Err(LoadingError::InvalidId(rejection.body_text()))
        }
    }
}
