use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::{MergeIntoActiveModel, Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub initial: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A station as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Station {
    pub station_id: i32,
    pub code: String,
    pub name: String,
    pub initial: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /stations` and `PUT /stations/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StationInput {
    #[schema(example = "GMR")]
    pub code: String,
    #[schema(example = "Gambir")]
    pub name: String,
    #[schema(example = "GMR")]
    pub initial: String,
}

impl From<Model> for Station {
    fn from(model: Model) -> Self {
        Self {
            station_id: model.id,
            code: model.code,
            name: model.name,
            initial: model.initial,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<StationInput> for ActiveModel {
    fn from(input: StationInput) -> Self {
        let now = Utc::now();
        Self {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(input.code),
            name: ActiveValue::Set(input.name),
            initial: ActiveValue::Set(input.initial),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for StationInput {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> Result<ActiveModel, DbErr> {
        existing.code = ActiveValue::Set(self.code);
        existing.name = ActiveValue::Set(self.name);
        existing.initial = ActiveValue::Set(self.initial);
        existing.updated_at = ActiveValue::Set(Utc::now());
        Ok(existing)
    }
}

impl Resource for Station {
    type EntityType = Entity;
    type ModelType = Model;
    type ColumnType = Column;
    type PrimaryKeyType = PrimaryKey;
    type ActiveModelType = ActiveModel;
    type InputModel = StationInput;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "station";
    const RESOURCE_NAME_PLURAL: &'static str = "stations";
    const ROUTE: &'static str = "stations";
    const RESOURCE_DESCRIPTION: &'static str = "Stations trains call at";
}
