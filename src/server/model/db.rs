//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application. These aliases simplify type signatures and provide a single
//! point of reference for database model types.

/// Type alias for the employee database model.
///
/// # Fields (from `entity::employee::Model`)
/// - `id` - Primary key
/// - `functional_code` - Unique login name
/// - `password_hash` - Argon2 PHC string of the employee's password
pub type EmployeeModel = entity::employee::Model;

/// Type alias for the loading record database model.
///
/// # Fields (from `entity::loading_record::Model`)
/// - `id` - Primary key
/// - `plate` - Vehicle plate
/// - `status` - Stored label of a [`LoadingStatus`](crate::server::model::loading::LoadingStatus)
/// - `route` - Optional route label
/// - `destination` - Optional destination label
/// - `finalized` - Whether the delivery is finished
/// - `updated_at` - Timestamp of the last mutation
/// - `updated_by` - Functional code of the employee behind the last mutation
pub type LoadingRecordModel = entity::loading_record::Model;
