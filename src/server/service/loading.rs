//! Loading record service.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::loading_record::LoadingRecordRepository,
    error::{loading::LoadingError, Error},
    model::{db::LoadingRecordModel, loading::LoadingForm},
};

/// Service implementing the loading record listing and its create, update and delete forms.
pub struct LoadingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoadingService<'a> {
    /// Creates a new instance of [`LoadingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all loading records, most recently updated first.
    pub async fn list(&self) -> Result<Vec<LoadingRecordModel>, Error> {
        let record_repo = LoadingRecordRepository::new(self.db);

        Ok(record_repo.get_all_latest_first().await?)
    }

    /// Retrieves a single loading record.
    ///
    /// # Returns
    /// - `Ok(LoadingRecordModel)` - Record found
    /// - `Err(Error::LoadingError(LoadingError::NotFound))` - No record with that ID
    /// - `Err(Error::DbErr)` - Database lookup failed
    pub async fn get(&self, record_id: i32) -> Result<LoadingRecordModel, Error> {
        let record_repo = LoadingRecordRepository::new(self.db);

        record_repo
            .get(record_id)
            .await?
            .ok_or_else(|| LoadingError::NotFound(record_id).into())
    }

    /// Validates the form and inserts a new loading record.
    ///
    /// # Arguments
    /// - `form` - Submitted form
    /// - `updated_by` - Functional code of the acting employee
    ///
    /// # Returns
    /// - `Ok(LoadingRecordModel)` - Record inserted with `updated_at` set to now
    /// - `Err(Error::LoadingError)` - Validation failed, nothing was written
    /// - `Err(Error::DbErr)` - Insert failed
    pub async fn create(
        &self,
        form: LoadingForm,
        updated_by: &str,
    ) -> Result<LoadingRecordModel, Error> {
        let input = form.validate()?;

        let record_repo = LoadingRecordRepository::new(self.db);
        let record = record_repo.create(&input, Some(updated_by)).await?;

        tracing::info!(
            loading_record_id = %record.id,
            plate = %record.plate,
            updated_by = %updated_by,
            "Loading record created"
        );

        Ok(record)
    }

    /// Overwrites every mutable field of an existing loading record.
    ///
    /// The existence check happens before validation, so an unknown ID is reported as not
    /// found whatever the payload. Read and write share one transaction; concurrent edits are
    /// last-write-wins.
    ///
    /// # Arguments
    /// - `record_id` - ID of the record to update
    /// - `form` - Submitted form
    /// - `updated_by` - Functional code of the acting employee
    ///
    /// # Returns
    /// - `Ok(LoadingRecordModel)` - Updated record with a refreshed `updated_at`
    /// - `Err(Error::LoadingError(LoadingError::NotFound))` - No record with that ID
    /// - `Err(Error::LoadingError)` - Validation failed, nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        record_id: i32,
        form: LoadingForm,
        updated_by: &str,
    ) -> Result<LoadingRecordModel, Error> {
        let txn = self.db.begin().await?;
        let record_repo = LoadingRecordRepository::new(&txn);

        let Some(record) = record_repo.get(record_id).await? else {
            return Err(LoadingError::NotFound(record_id).into());
        };

        let input = form.validate()?;
        let record = record_repo.update(record, &input, Some(updated_by)).await?;

        txn.commit().await?;

        tracing::info!(
            loading_record_id = %record.id,
            updated_by = %updated_by,
            "Loading record updated"
        );

        Ok(record)
    }

    /// Permanently deletes a loading record.
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted
    /// - `Err(Error::LoadingError(LoadingError::NotFound))` - No record with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, record_id: i32, deleted_by: &str) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let record_repo = LoadingRecordRepository::new(&txn);

        let result = record_repo.delete(record_id).await?;
        if result.rows_affected == 0 {
            return Err(LoadingError::NotFound(record_id).into());
        }

        txn.commit().await?;

        tracing::info!(
            loading_record_id = %record_id,
            deleted_by = %deleted_by,
            "Loading record deleted"
        );

        Ok(())
    }
}
