//! Tests for the loading record pages.

mod add;
mod delete;
mod edit;

use carregamento::server::model::loading::LoadingForm;

use super::*;

fn form(plate: &str, status: &str) -> LoadingForm {
    LoadingForm {
        plate: plate.to_string(),
        status: Some(status.to_string()),
        route: "Rota A".to_string(),
        destination: "Cliente X".to_string(),
        finalized: None,
    }
}
