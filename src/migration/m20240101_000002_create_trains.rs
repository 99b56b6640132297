use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(Trains::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Trains::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(Trains::CodeTrain)
                    .string()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Trains::Name).string().not_null())
            .col(ColumnDef::new(Trains::Route).string().not_null())
            .col(ColumnDef::new(Trains::Status).string().not_null())
            .col(
                ColumnDef::new(Trains::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Trains::UpdatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .to_owned();

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trains::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Trains {
    Table,
    Id,
    CodeTrain,
    Name,
    Route,
    Status,
    CreatedAt,
    UpdatedAt,
}
