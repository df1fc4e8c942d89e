//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, the way the router would call them,
//! and the returned responses are checked for status, redirect target and rendered notices.

mod auth;
mod loading;

use carregamento_test_utils::prelude::*;

use crate::{util::body_string, TestContextExt};

/// Build a test context with the app tables, the test employee and a logged-in session
async fn logged_in_setup() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_employee(TEST_EMPLOYEE_CODE, TEST_EMPLOYEE_PASSWORD)
        .build()
        .await?;
    test.log_in(TEST_EMPLOYEE_CODE).await;

    Ok(test)
}
