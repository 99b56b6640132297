use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, FromQueryResult,
    IntoActiveModel, PrimaryKeyTrait,
};
use serde::{Serialize, de::DeserializeOwned};

pub trait MergeIntoActiveModel<ActiveModelType> {
    /// Apply a full update onto an existing active model.
    ///
    /// Every user-editable column is replaced; the primary key and creation
    /// timestamp of `existing` are kept.
    ///
    /// # Errors
    ///
    /// Returns a `DbErr` if a value cannot be converted into its column type.
    fn merge_into_activemodel(self, existing: ActiveModelType) -> Result<ActiveModelType, DbErr>;
}

/// A table exposed through the five CRUD endpoints.
///
/// `Self` is the JSON response shape. The associated types tie it to its
/// Sea-ORM entity so that the repository, usecase and controller layers can be
/// written once for every resource. Bounds are placed on the associated types
/// (rather than in a `where` clause) so they hold wherever `R: Resource` does.
pub trait Resource: Serialize + Sized + Send + Sync + 'static {
    type EntityType: EntityTrait<
            Model = Self::ModelType,
            Column = Self::ColumnType,
            PrimaryKey = Self::PrimaryKeyType,
        > + Sync
        + 'static;
    type ModelType: FromQueryResult
        + IntoActiveModel<Self::ActiveModelType>
        + Into<Self>
        + Send
        + Sync
        + 'static;
    type ColumnType: ColumnTrait + Send + Sync + 'static;
    type PrimaryKeyType: PrimaryKeyTrait<ValueType = i32> + 'static;
    type ActiveModelType: ActiveModelTrait<Entity = Self::EntityType>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;
    /// Body accepted by both create and (full) update.
    type InputModel: DeserializeOwned
        + Into<Self::ActiveModelType>
        + MergeIntoActiveModel<Self::ActiveModelType>
        + Send
        + Sync
        + 'static;

    const ID_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;
    /// Path segment the resource is mounted under, without slashes.
    const ROUTE: &'static str;
    const RESOURCE_DESCRIPTION: &'static str = "";

    #[must_use]
    fn not_found() -> DbErr {
        DbErr::RecordNotFound(format!("{} not found", Self::RESOURCE_NAME_SINGULAR))
    }
}
