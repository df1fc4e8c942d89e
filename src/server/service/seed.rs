//! Idempotent bootstrap data.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{employee::EmployeeRepository, loading_record::LoadingRecordRepository},
    error::Error,
    model::loading::{LoadingInput, LoadingStatus},
    util::password::hash_password,
};

/// Credentials of the employee created on first startup.
#[derive(Debug, Clone)]
pub struct SeedEmployee {
    /// Functional code used as login name.
    pub functional_code: String,
    /// Plaintext password, hashed before it is stored.
    pub password: String,
}

/// What a seeding run actually wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Whether the default employee had to be created.
    pub employee_created: bool,
    /// Number of example loading records inserted.
    pub records_inserted: usize,
}

/// Example loading records inserted into an empty table.
pub fn example_records() -> Vec<LoadingInput> {
    [
        ("ABC1A23", LoadingStatus::NotArrived, "Rota A", "Cliente X", false),
        ("DEF2B34", LoadingStatus::InProgress, "Rota B", "Cliente Y", false),
        ("GHI3C45", LoadingStatus::Finished, "Rota C", "Cliente Z", true),
    ]
    .into_iter()
    .map(|(plate, status, route, destination, finalized)| LoadingInput {
        plate: plate.to_string(),
        status,
        route: Some(route.to_string()),
        destination: Some(destination.to_string()),
        finalized,
    })
    .collect()
}

/// Service creating the default employee and example records.
pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of [`SeedService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the database, safe to call on every startup.
    ///
    /// The employee is only created when no employee has its functional code, and the example
    /// records only when the loading record table is empty. Both checks and inserts share one
    /// transaction.
    ///
    /// # Arguments
    /// - `employee` - Credentials of the default employee
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - What was inserted, all zero when the database was already seeded
    /// - `Err(Error::PasswordHashError)` - Hashing the default password failed
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn run(&self, employee: &SeedEmployee) -> Result<SeedReport, Error> {
        let mut report = SeedReport::default();

        let txn = self.db.begin().await?;
        let employee_repo = EmployeeRepository::new(&txn);
        let record_repo = LoadingRecordRepository::new(&txn);

        if employee_repo
            .find_by_functional_code(&employee.functional_code)
            .await?
            .is_none()
        {
            let password_hash = hash_password(&employee.password)?;
            employee_repo
                .create(&employee.functional_code, &password_hash)
                .await?;

            report.employee_created = true;
        }

        if record_repo.count().await? == 0 {
            for input in example_records() {
                record_repo.create(&input, None).await?;
                report.records_inserted += 1;
            }
        }

        txn.commit().await?;

        Ok(report)
    }
}
