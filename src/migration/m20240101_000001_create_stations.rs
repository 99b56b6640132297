use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(Stations::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Stations::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Stations::Code).string().not_null().unique_key())
            .col(ColumnDef::new(Stations::Name).string().not_null())
            .col(ColumnDef::new(Stations::Initial).string().not_null())
            .col(
                ColumnDef::new(Stations::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Stations::UpdatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .to_owned();

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Stations {
    Table,
    Id,
    Code,
    Name,
    Initial,
    CreatedAt,
    UpdatedAt,
}
