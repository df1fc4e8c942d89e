//! Loading record repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryOrder,
};

use crate::server::model::{db::LoadingRecordModel, loading::LoadingInput};

/// Reads and writes `loading_record` rows.
pub struct LoadingRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoadingRecordRepository<'a, C> {
    /// Creates a new instance of [`LoadingRecordRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new loading record stamped with the current time
    pub async fn create(
        &self,
        input: &LoadingInput,
        updated_by: Option<&str>,
    ) -> Result<LoadingRecordModel, DbErr> {
        let record = entity::loading_record::ActiveModel {
            plate: ActiveValue::Set(input.plate.clone()),
            status: ActiveValue::Set(input.status.label().to_string()),
            route: ActiveValue::Set(input.route.clone()),
            destination: ActiveValue::Set(input.destination.clone()),
            finalized: ActiveValue::Set(input.finalized),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_by: ActiveValue::Set(updated_by.map(str::to_string)),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// Finds a loading record by ID
    pub async fn get(&self, record_id: i32) -> Result<Option<LoadingRecordModel>, DbErr> {
        entity::prelude::LoadingRecord::find_by_id(record_id)
            .one(self.db)
            .await
    }

    /// Returns every loading record, most recently updated first
    ///
    /// Records updated at the same instant are ordered newest ID first.
    pub async fn get_all_latest_first(&self) -> Result<Vec<LoadingRecordModel>, DbErr> {
        entity::prelude::LoadingRecord::find()
            .order_by_desc(entity::loading_record::Column::UpdatedAt)
            .order_by_desc(entity::loading_record::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts every loading record
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::LoadingRecord::find().count(self.db).await
    }

    /// Overwrites every mutable field of an existing record and refreshes `updated_at`
    pub async fn update(
        &self,
        record: LoadingRecordModel,
        input: &LoadingInput,
        updated_by: Option<&str>,
    ) -> Result<LoadingRecordModel, DbErr> {
        let mut record_am = record.into_active_model();
        record_am.plate = ActiveValue::Set(input.plate.clone());
        record_am.status = ActiveValue::Set(input.status.label().to_string());
        record_am.route = ActiveValue::Set(input.route.clone());
        record_am.destination = ActiveValue::Set(input.destination.clone());
        record_am.finalized = ActiveValue::Set(input.finalized);
        record_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        record_am.updated_by = ActiveValue::Set(updated_by.map(str::to_string));

        record_am.update(self.db).await
    }

    /// Deletes a loading record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, record_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LoadingRecord::delete_by_id(record_id)
            .exec(self.db)
            .await
    }
}
