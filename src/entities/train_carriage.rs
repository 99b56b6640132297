use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::{MergeIntoActiveModel, Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "train_carriages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub train_id: i32,
    pub name: String,
    pub class: String,
    pub price: i64,
    pub seat_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::train::Entity",
        from = "Column::TrainId",
        to = "super::train::Column::Id",
        on_delete = "Cascade"
    )]
    Train,
}

impl Related<super::train::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Train.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A carriage of a train as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrainCarriage {
    pub train_carriage_id: i32,
    pub train_id: i32,
    pub name: String,
    pub class: String,
    pub price: i64,
    pub seat_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /train-carriages` and `PUT /train-carriages/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrainCarriageInput {
    pub train_id: i32,
    #[schema(example = "Executive 1")]
    pub name: String,
    #[schema(example = "executive")]
    pub class: String,
    /// Ticket price in the smallest currency unit.
    #[schema(example = 450_000)]
    pub price: i64,
    #[schema(example = 50)]
    pub seat_count: i32,
}

impl From<Model> for TrainCarriage {
    fn from(model: Model) -> Self {
        Self {
            train_carriage_id: model.id,
            train_id: model.train_id,
            name: model.name,
            class: model.class,
            price: model.price,
            seat_count: model.seat_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<TrainCarriageInput> for ActiveModel {
    fn from(input: TrainCarriageInput) -> Self {
        let now = Utc::now();
        Self {
            id: ActiveValue::NotSet,
            train_id: ActiveValue::Set(input.train_id),
            name: ActiveValue::Set(input.name),
            class: ActiveValue::Set(input.class),
            price: ActiveValue::Set(input.price),
            seat_count: ActiveValue::Set(input.seat_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for TrainCarriageInput {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> Result<ActiveModel, DbErr> {
        existing.train_id = ActiveValue::Set(self.train_id);
        existing.name = ActiveValue::Set(self.name);
        existing.class = ActiveValue::Set(self.class);
        existing.price = ActiveValue::Set(self.price);
        existing.seat_count = ActiveValue::Set(self.seat_count);
        existing.updated_at = ActiveValue::Set(Utc::now());
        Ok(existing)
    }
}

impl Resource for TrainCarriage {
    type EntityType = Entity;
    type ModelType = Model;
    type ColumnType = Column;
    type PrimaryKeyType = PrimaryKey;
    type ActiveModelType = ActiveModel;
    type InputModel = TrainCarriageInput;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "train carriage";
    const RESOURCE_NAME_PLURAL: &'static str = "train carriages";
    const ROUTE: &'static str = "train-carriages";
    const RESOURCE_DESCRIPTION: &'static str =
        "Carriages belonging to a train, with class and price";
}
