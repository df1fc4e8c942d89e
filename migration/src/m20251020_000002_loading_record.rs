use sea_orm_migration::{prelude::*, schema::*};

static IDX_LOADING_RECORD_UPDATED_AT: &str = "idx-loading_record-updated_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoadingRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(LoadingRecord::Id))
                    .col(string_len(LoadingRecord::Plate, 20))
                    .col(string_len(LoadingRecord::Status, 50))
                    .col(string_len_null(LoadingRecord::Route, 100))
                    .col(string_len_null(LoadingRecord::Destination, 200))
                    .col(boolean(LoadingRecord::Finalized))
                    .col(timestamp(LoadingRecord::UpdatedAt))
                    .col(string_len_null(LoadingRecord::UpdatedBy, 50))
                    .to_owned(),
            )
            .await?;

        // Listing is always ordered by most recent update
        manager
            .create_index(
                Index::create()
                    .name(IDX_LOADING_RECORD_UPDATED_AT)
                    .table(LoadingRecord::Table)
                    .col(LoadingRecord::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LOADING_RECORD_UPDATED_AT)
                    .table(LoadingRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LoadingRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LoadingRecord {
    Table,
    Id,
    Plate,
    Status,
    Route,
    Destination,
    Finalized,
    UpdatedAt,
    UpdatedBy,
}
