//! Embedded schema migrations, applied at startup and by the test harness.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_stations;
mod m20240101_000002_create_trains;
mod m20240101_000003_create_train_carriages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_stations::Migration),
            Box::new(m20240101_000002_create_trains::Migration),
            Box::new(m20240101_000003_create_train_carriages::Migration),
        ]
    }
}
