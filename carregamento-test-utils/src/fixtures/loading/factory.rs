//! Factory functions for generating mock loading record models.
//!
//! Provides pure functions creating in-memory model instances that don't require database
//! interaction, suitable for unit tests of views and conversions.

use chrono::Utc;

use crate::{constant::MOCK_STATUS, model::LoadingRecordModel};

/// Create a mock loading record model for testing.
///
/// # Arguments
/// - `id` - Record ID
/// - `plate` - Vehicle plate
///
/// # Returns
/// - `LoadingRecordModel` - A loading record with the mock status, updated now
pub fn mock_loading_record_model(id: i32, plate: &str) -> LoadingRecordModel {
    LoadingRecordModel {
        id,
        plate: plate.to_string(),
        status: MOCK_STATUS.to_string(),
        route: Some("Rota A".to_string()),
        destination: Some("Cliente X".to_string()),
        finalized: false,
        updated_at: Utc::now().naive_utc(),
        updated_by: None,
    }
}
