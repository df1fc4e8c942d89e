//! Standard values used across tests.

/// Functional code of the employee most tests log in as.
pub static TEST_EMPLOYEE_CODE: &str = "125039";

/// Password of [`TEST_EMPLOYEE_CODE`].
pub static TEST_EMPLOYEE_PASSWORD: &str = "125039";

/// Status label given to mock loading records.
pub static MOCK_STATUS: &str = "Em coleta";
