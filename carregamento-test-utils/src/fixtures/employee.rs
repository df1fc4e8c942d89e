use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::EmployeeModel, TestContext};

impl TestContext {
    pub fn employee<'a>(&'a mut self) -> EmployeeFixtures<'a> {
        EmployeeFixtures { setup: self }
    }
}

pub struct EmployeeFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> EmployeeFixtures<'a> {
    /// Insert an employee whose password is hashed the way the application stores it
    pub async fn insert_employee(
        &self,
        functional_code: &str,
        password: &str,
    ) -> Result<EmployeeModel, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        Ok(
            entity::prelude::Employee::insert(entity::employee::ActiveModel {
                functional_code: ActiveValue::Set(functional_code.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
