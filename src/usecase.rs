use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr, IntoActiveModel};

use crate::core::{MergeIntoActiveModel, Resource};
use crate::pagination::Pagination;
use crate::repository::{Repository, SeaOrmRepository};

/// Service layer of one resource.
///
/// Converts inputs into active models, looks rows up before updating or
/// deleting them and converts models into response shapes. Everything else is
/// delegated to the [`Repository`].
pub struct ResourceUsecase<R: Resource> {
    repository: Arc<dyn Repository<R>>,
}

impl<R: Resource> Clone for ResourceUsecase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Resource> ResourceUsecase<R> {
    pub fn new(repository: Arc<dyn Repository<R>>) -> Self {
        Self { repository }
    }

    /// Usecase over the default Sea-ORM repository.
    #[must_use]
    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmRepository::<R>::new(db)))
    }

    /// One page of records plus the total number of records.
    ///
    /// # Errors
    ///
    /// Propagates any database error.
    pub async fn get_all(&self, pagination: Pagination) -> Result<(Vec<R>, u64), DbErr> {
        let count = self.repository.count().await?;
        let models = self
            .repository
            .find_page(pagination.offset(), pagination.limit)
            .await?;
        tracing::debug!(
            resource = R::RESOURCE_NAME_PLURAL,
            page = pagination.page,
            limit = pagination.limit,
            returned = models.len(),
            count,
            "Listed records"
        );
        Ok((models.into_iter().map(Into::into).collect(), count))
    }

    /// # Errors
    ///
    /// `DbErr::RecordNotFound` when no record has this id.
    pub async fn get_by_id(&self, id: i32) -> Result<R, DbErr> {
        let model = self.repository.find_by_id(id).await?;
        Ok(model.into())
    }

    /// # Errors
    ///
    /// Propagates constraint violations (unique keys, foreign keys).
    pub async fn create(&self, input: R::InputModel) -> Result<R, DbErr> {
        let model = self.repository.insert(input.into()).await?;
        tracing::info!(resource = R::RESOURCE_NAME_SINGULAR, "Created record");
        Ok(model.into())
    }

    /// Create every record or none.
    ///
    /// # Errors
    ///
    /// Propagates the first failing insert; earlier inserts are rolled back.
    pub async fn create_many(&self, inputs: Vec<R::InputModel>) -> Result<Vec<R>, DbErr> {
        let active_models: Vec<R::ActiveModelType> = inputs.into_iter().map(Into::into).collect();
        let models = self.repository.insert_many(active_models).await?;
        tracing::info!(
            resource = R::RESOURCE_NAME_PLURAL,
            created = models.len(),
            "Created records"
        );
        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Replace every editable field of an existing record.
    ///
    /// # Errors
    ///
    /// `DbErr::RecordNotFound` when no record has this id, otherwise any
    /// database error raised by the save.
    pub async fn update(&self, id: i32, input: R::InputModel) -> Result<R, DbErr> {
        let existing = self.repository.find_by_id(id).await?;
        let active_model = input.merge_into_activemodel(existing.into_active_model())?;
        let model = self.repository.update(active_model).await?;
        tracing::info!(resource = R::RESOURCE_NAME_SINGULAR, id, "Updated record");
        Ok(model.into())
    }

    /// # Errors
    ///
    /// `DbErr::RecordNotFound` when nothing was deleted.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        match self.repository.delete(id).await? {
            0 => Err(R::not_found()),
            _ => {
                tracing::info!(resource = R::RESOURCE_NAME_SINGULAR, id, "Deleted record");
                Ok(())
            }
        }
    }
}
