//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main carregamento crate to keep signatures consistent
//! across tests.

/// Type alias for the employee database model.
pub type EmployeeModel = entity::employee::Model;

/// Type alias for the loading record database model.
pub type LoadingRecordModel = entity::loading_record::Model;
