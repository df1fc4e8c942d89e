//! Loading record status and form input.

use std::str::FromStr;

use serde::Deserialize;
use utoipa::ToSchema;

use crate::server::error::loading::LoadingError;

/// Maximum plate length in characters, matching the `plate` column.
pub const PLATE_MAX_LEN: usize = 20;
/// Maximum route length in characters, matching the `route` column.
pub const ROUTE_MAX_LEN: usize = 100;
/// Maximum destination length in characters, matching the `destination` column.
pub const DESTINATION_MAX_LEN: usize = 200;

/// Pickup status of a loading record.
///
/// Stored as its label in the `status` column; the listed order is the order the form offers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoadingStatus {
    /// Vehicle has not arrived for pickup yet.
    #[default]
    NotArrived,
    /// Pickup in progress.
    InProgress,
    /// Pickup finished.
    Finished,
}

impl LoadingStatus {
    /// All statuses in the order they are offered to the employee.
    pub const ALL: [LoadingStatus; 3] = [Self::NotArrived, Self::InProgress, Self::Finished];

    /// Label stored in the database and shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotArrived => "Não chegou para coletar",
            Self::InProgress => "Em coleta",
            Self::Finished => "Finalizado a coleta",
        }
    }
}

impl FromStr for LoadingStatus {
    type Err = LoadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| LoadingError::UnknownStatus(s.to_string()))
    }
}

/// Raw loading record form as submitted by the browser.
///
/// Every field is optional on the wire; the `finalized` checkbox is only sent when checked.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct LoadingForm {
    /// Vehicle plate, required.
    #[serde(default)]
    pub plate: String,
    /// Status label, defaults to the first status when absent or empty.
    #[serde(default)]
    pub status: Option<String>,
    /// Route label.
    #[serde(default)]
    pub route: String,
    /// Destination label.
    #[serde(default)]
    pub destination: String,
    /// Present with any value when the checkbox is ticked.
    #[serde(default)]
    pub finalized: Option<String>,
}

/// Validated loading record fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingInput {
    /// Trimmed, non-empty plate.
    pub plate: String,
    /// Parsed status.
    pub status: LoadingStatus,
    /// Trimmed route, `None` when left empty.
    pub route: Option<String>,
    /// Trimmed destination, `None` when left empty.
    pub destination: Option<String>,
    /// Whether the checkbox was ticked.
    pub finalized: bool,
}

impl LoadingForm {
    /// Trims every text field and checks the plate and status.
    ///
    /// # Returns
    /// - `Ok(LoadingInput)` - Form is valid; empty route/destination become `None`
    /// - `Err(LoadingError::EmptyPlate)` - Plate is empty after trimming
    /// - `Err(LoadingError::UnknownStatus)` - Status is not one of [`LoadingStatus::ALL`]
    /// - `Err(LoadingError::TooLong)` - A text field exceeds its column length
    pub fn validate(self) -> Result<LoadingInput, LoadingError> {
        let plate = self.plate.trim();
        if plate.is_empty() {
            return Err(LoadingError::EmptyPlate);
        }
        check_length("Plate", plate, PLATE_MAX_LEN)?;

        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => LoadingStatus::default(),
            Some(label) => label.parse()?,
        };

        let route = non_empty(&self.route);
        let destination = non_empty(&self.destination);
        check_length("Route", route.as_deref().unwrap_or_default(), ROUTE_MAX_LEN)?;
        check_length(
            "Destination",
            destination.as_deref().unwrap_or_default(),
            DESTINATION_MAX_LEN,
        )?;

        Ok(LoadingInput {
            plate: plate.to_string(),
            status,
            route,
            destination,
            finalized: self.finalized.is_some(),
        })
    }
}

// Lengths are in characters, as varchar(n) counts them.
fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), LoadingError> {
    if value.chars().count() > max {
        return Err(LoadingError::TooLong { field, max });
    }

    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();

    (!value.is_empty()).then(|| value.to_string())
}
