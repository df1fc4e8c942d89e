//! Logged-in employee stored in the session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key of the logged-in employee's functional code.
pub const SESSION_EMPLOYEE_CODE_KEY: &str = "carregamento:employee:code";

/// Functional code of the logged-in employee.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionEmployeeCode(pub String);

impl SessionEmployeeCode {
    /// Insert the logged-in employee's functional code into session
    pub async fn insert(session: &Session, functional_code: &str) -> Result<(), Error> {
        session
            .insert(
                SESSION_EMPLOYEE_CODE_KEY,
                SessionEmployeeCode(functional_code.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get the logged-in employee's functional code from session
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionEmployeeCode>(SESSION_EMPLOYEE_CODE_KEY)
            .await?
            .map(|SessionEmployeeCode(code)| code))
    }
}
