use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_trains::Trains;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(TrainCarriages::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(TrainCarriages::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(TrainCarriages::TrainId).integer().not_null())
            .col(ColumnDef::new(TrainCarriages::Name).string().not_null())
            .col(ColumnDef::new(TrainCarriages::Class).string().not_null())
            .col(ColumnDef::new(TrainCarriages::Price).big_integer().not_null())
            .col(ColumnDef::new(TrainCarriages::SeatCount).integer().not_null())
            .col(
                ColumnDef::new(TrainCarriages::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(TrainCarriages::UpdatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_train_carriages_train_id")
                    .from(TrainCarriages::Table, TrainCarriages::TrainId)
                    .to(Trains::Table, Trains::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainCarriages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrainCarriages {
    Table,
    Id,
    TrainId,
    Name,
    Class,
    Price,
    SeatCount,
    CreatedAt,
    UpdatedAt,
}
