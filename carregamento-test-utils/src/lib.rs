//! Shared test setup for the carregamento crates.
//!
//! Tests describe their environment with [`TestBuilder`] (tables, employees, loading records)
//! and receive a [`TestContext`] holding an in-memory SQLite database and an in-memory session.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{MOCK_STATUS, TEST_EMPLOYEE_CODE, TEST_EMPLOYEE_PASSWORD},
        fixtures::loading::factory,
        test_setup_with_app_tables, test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
