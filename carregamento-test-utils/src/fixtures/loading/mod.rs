//! Loading record fixture utilities.

pub mod factory;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::MOCK_STATUS, error::TestError, model::LoadingRecordModel, TestContext};

impl TestContext {
    pub fn loading<'a>(&'a mut self) -> LoadingFixtures<'a> {
        LoadingFixtures { setup: self }
    }
}

pub struct LoadingFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> LoadingFixtures<'a> {
    /// Insert a loading record with the mock status, updated now
    pub async fn insert_mock_record(&self, plate: &str) -> Result<LoadingRecordModel, TestError> {
        self.insert_record(plate, MOCK_STATUS).await
    }

    /// Insert a loading record with the given status, updated now
    pub async fn insert_record(
        &self,
        plate: &str,
        status: &str,
    ) -> Result<LoadingRecordModel, TestError> {
        self.insert(plate, status, Utc::now().naive_utc()).await
    }

    /// Insert a loading record last updated at the given instant
    pub async fn insert_record_updated_at(
        &self,
        plate: &str,
        updated_at: NaiveDateTime,
    ) -> Result<LoadingRecordModel, TestError> {
        self.insert(plate, MOCK_STATUS, updated_at).await
    }

    async fn insert(
        &self,
        plate: &str,
        status: &str,
        updated_at: NaiveDateTime,
    ) -> Result<LoadingRecordModel, TestError> {
        Ok(
            entity::prelude::LoadingRecord::insert(entity::loading_record::ActiveModel {
                plate: ActiveValue::Set(plate.to_string()),
                status: ActiveValue::Set(status.to_string()),
                route: ActiveValue::Set(None),
                destination: ActiveValue::Set(None),
                finalized: ActiveValue::Set(false),
                updated_at: ActiveValue::Set(updated_at),
                updated_by: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
