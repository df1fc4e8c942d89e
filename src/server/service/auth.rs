//! Employee authentication service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::employee::EmployeeRepository,
    error::{auth::AuthError, Error},
    model::db::EmployeeModel,
    util::password::{verify_dummy_password, verify_password},
};

/// Service verifying employee credentials and session principals.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a functional code and password pair.
    ///
    /// The functional code is trimmed before lookup; the password is used as submitted. An
    /// unknown code still pays for one Argon2 verification so it cannot be told apart by timing.
    ///
    /// # Arguments
    /// - `functional_code` - Login name typed by the employee
    /// - `password` - Password typed by the employee
    ///
    /// # Returns
    /// - `Ok(EmployeeModel)` - Credentials match a stored employee
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown code or wrong password
    /// - `Err(Error::DbErr)` - Database lookup failed
    pub async fn login(&self, functional_code: &str, password: &str) -> Result<EmployeeModel, Error> {
        let employee_repo = EmployeeRepository::new(self.db);

        let Some(employee) = employee_repo
            .find_by_functional_code(functional_code.trim())
            .await?
        else {
            verify_dummy_password(password);

            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &employee.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(functional_code = %employee.functional_code, "Employee logged in");

        Ok(employee)
    }

    /// Looks up the employee a session is bound to.
    ///
    /// # Returns
    /// - `Ok(Some(EmployeeModel))` - Employee still exists
    /// - `Ok(None)` - Employee is gone, the session should be discarded
    /// - `Err(Error::DbErr)` - Database lookup failed
    pub async fn get_employee(&self, functional_code: &str) -> Result<Option<EmployeeModel>, Error> {
        let employee_repo = EmployeeRepository::new(self.db);

        Ok(employee_repo.find_by_functional_code(functional_code).await?)
    }
}
