use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::{MergeIntoActiveModel, Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trains")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code_train: String,
    pub name: String,
    pub route: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::train_carriage::Entity")]
    TrainCarriage,
}

impl Related<super::train_carriage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainCarriage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A train as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Train {
    pub train_id: i32,
    pub code_train: String,
    pub name: String,
    pub route: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /trains` and `PUT /trains/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrainInput {
    #[schema(example = "ARG-7")]
    pub code_train: String,
    #[schema(example = "Argo Bromo Anggrek")]
    pub name: String,
    #[schema(example = "Gambir - Surabaya Pasarturi")]
    pub route: String,
    #[schema(example = "available")]
    pub status: String,
}

impl From<Model> for Train {
    fn from(model: Model) -> Self {
        Self {
            train_id: model.id,
            code_train: model.code_train,
            name: model.name,
            route: model.route,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<TrainInput> for ActiveModel {
    fn from(input: TrainInput) -> Self {
        let now = Utc::now();
        Self {
            id: ActiveValue::NotSet,
            code_train: ActiveValue::Set(input.code_train),
            name: ActiveValue::Set(input.name),
            route: ActiveValue::Set(input.route),
            status: ActiveValue::Set(input.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for TrainInput {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> Result<ActiveModel, DbErr> {
        existing.code_train = ActiveValue::Set(self.code_train);
        existing.name = ActiveValue::Set(self.name);
        existing.route = ActiveValue::Set(self.route);
        existing.status = ActiveValue::Set(self.status);
        existing.updated_at = ActiveValue::Set(Utc::now());
        Ok(existing)
    }
}

impl Resource for Train {
    type EntityType = Entity;
    type ModelType = Model;
    type ColumnType = Column;
    type PrimaryKeyType = PrimaryKey;
    type ActiveModelType = ActiveModel;
    type InputModel = TrainInput;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "train";
    const RESOURCE_NAME_PLURAL: &'static str = "trains";
    const ROUTE: &'static str = "trains";
    const RESOURCE_DESCRIPTION: &'static str = "Trains operating on the network";
}
