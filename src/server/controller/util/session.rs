//! Session gate for protected pages.

use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::EmployeeModel, session::employee::SessionEmployeeCode},
    service::auth::AuthService,
};

/// Resolves the employee logged into the session, gating every protected page
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The employee's session
///
/// # Returns
/// - `Ok(EmployeeModel)`: Employee found
/// - `Err(Error::AuthError(AuthError::NotLoggedIn))`: No functional code in session, answered with a redirect to login
/// - `Err(Error::AuthError(AuthError::EmployeeNotInDatabase))`: Functional code in session but employee not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn require_session(state: &AppState, session: &Session) -> Result<EmployeeModel, Error> {
    let Some(functional_code) = SessionEmployeeCode::get(session).await? else {
        return Err(AuthError::NotLoggedIn.into());
    };

    let Some(employee) = AuthService::new(&state.db)
        .get_employee(&functional_code)
        .await?
    else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for employee {} with active session but was not found in database",
            functional_code
        );

        return Err(AuthError::EmployeeNotInDatabase(functional_code).into());
    };

    Ok(employee)
}
