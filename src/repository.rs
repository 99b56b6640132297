//! Persistence layer: one Sea-ORM call per operation.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::core::Resource;

#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    /// Rows `offset..offset + limit`, ordered by primary key.
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<R::ModelType>, DbErr>;

    async fn count(&self) -> Result<u64, DbErr>;

    /// # Errors
    ///
    /// `DbErr::RecordNotFound` when no row has this id.
    async fn find_by_id(&self, id: i32) -> Result<R::ModelType, DbErr>;

    async fn insert(&self, model: R::ActiveModelType) -> Result<R::ModelType, DbErr>;

    /// Insert every row or none of them.
    async fn insert_many(
        &self,
        models: Vec<R::ActiveModelType>,
    ) -> Result<Vec<R::ModelType>, DbErr>;

    async fn update(&self, model: R::ActiveModelType) -> Result<R::ModelType, DbErr>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: i32) -> Result<u64, DbErr>;
}

/// [`Repository`] backed by a pooled Sea-ORM connection.
pub struct SeaOrmRepository<R> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R> SeaOrmRepository<R> {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }
}

impl<R> Clone for SeaOrmRepository<R> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

#[async_trait]
impl<R: Resource> Repository<R> for SeaOrmRepository<R> {
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<R::ModelType>, DbErr> {
        R::EntityType::find()
            .order_by_asc(R::ID_COLUMN)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
    }

    async fn count(&self) -> Result<u64, DbErr> {
        R::EntityType::find().count(&self.db).await
    }

    async fn find_by_id(&self, id: i32) -> Result<R::ModelType, DbErr> {
        R::EntityType::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(R::not_found)
    }

    async fn insert(&self, model: R::ActiveModelType) -> Result<R::ModelType, DbErr> {
        model.insert(&self.db).await
    }

    async fn insert_many(
        &self,
        models: Vec<R::ActiveModelType>,
    ) -> Result<Vec<R::ModelType>, DbErr> {
        let txn = self.db.begin().await?;
        let mut inserted = Vec::with_capacity(models.len());
        for model in models {
            match model.insert(&txn).await {
                Ok(model) => inserted.push(model),
                Err(err) => {
                    txn.rollback().await?;
                    return Err(err);
                }
            }
        }
        txn.commit().await?;
        Ok(inserted)
    }

    async fn update(&self, model: R::ActiveModelType) -> Result<R::ModelType, DbErr> {
        model.update(&self.db).await
    }

    async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = R::EntityType::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
