//! Shorthand macros for the most common test setups.

/// Build a test context with the given entity tables, or no tables at all.
///
/// ```ignore
/// let test = test_setup_with_tables!()?;
/// let test = test_setup_with_tables!(entity::prelude::Employee)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Build a test context with the employee and loading record tables.
///
/// ```ignore
/// let mut test = test_setup_with_app_tables!()?;
/// ```
#[macro_export]
macro_rules! test_setup_with_app_tables {
    () => {{
        $crate::TestBuilder::new().with_app_tables().build().await
    }};
}
