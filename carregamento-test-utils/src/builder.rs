//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_app_tables: bool,

    // Database fixtures to insert
    employees: Vec<(String, String)>,       // (functional_code, password)
    loading_records: Vec<(String, String)>, // (plate, status)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the employee and loading record tables to the test database.
    pub fn with_app_tables(mut self) -> Self {
        self.include_app_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use carregamento_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), carregamento_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Employee)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an employee with a hashed password into the database.
    ///
    /// Requires the employee table, see [`with_app_tables`](Self::with_app_tables).
    pub fn with_employee(mut self, functional_code: &str, password: &str) -> Self {
        self.employees
            .push((functional_code.to_string(), password.to_string()));
        self
    }

    /// Insert a loading record stamped with the current time.
    ///
    /// Records are inserted in call order, so later records sort first in the listing.
    pub fn with_loading_record(mut self, plate: &str, status: &str) -> Self {
        self.loading_records
            .push((plate.to_string(), status.to_string()));
        self
    }

    /// Build the test context, creating tables first and fixtures second.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context ready for use
    /// - `Err(TestError)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut tables = Vec::new();
        if self.include_app_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::Employee));
            tables.push(schema.create_table_from_entity(entity::prelude::LoadingRecord));
        }
        tables.extend(self.tables);
        context.with_tables(tables).await?;

        for (functional_code, password) in &self.employees {
            context
                .employee()
                .insert_employee(functional_code, password)
                .await?;
        }

        for (plate, status) in &self.loading_records {
            context.loading().insert_record(plate, status).await?;
        }

        Ok(context)
    }
}
