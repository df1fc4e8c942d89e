//! Employee repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::EmployeeModel;

/// Reads and writes `employee` rows.
pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    /// Creates a new instance of [`EmployeeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new employee from an already hashed password
    ///
    /// Fails with a unique constraint violation if the functional code is taken.
    pub async fn create(
        &self,
        functional_code: &str,
        password_hash: &str,
    ) -> Result<EmployeeModel, DbErr> {
        let employee = entity::employee::ActiveModel {
            functional_code: ActiveValue::Set(functional_code.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            ..Default::default()
        };

        employee.insert(self.db).await
    }

    /// Finds an employee by exact functional code
    pub async fn find_by_functional_code(
        &self,
        functional_code: &str,
    ) -> Result<Option<EmployeeModel>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::FunctionalCode.eq(functional_code))
            .one(self.db)
            .await
    }
}
