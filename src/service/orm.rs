//! ORM adapter: SeaORM active models over the `heroes` entity.

use super::HeroStore;
use crate::entity::hero;
use crate::error::AppError;
use crate::model::{HeroCreate, HeroPublic, HeroUpdate, ListParams, MAX_LIST_OFFSET};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder, QuerySelect, SqlxPostgresConnector, TransactionTrait,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrmHeroStore {
    db: Arc<DatabaseConnection>,
}

impl OrmHeroStore {
    pub fn new(db: DatabaseConnection) -> Self {
        OrmHeroStore { db: Arc::new(db) }
    }

    /// Share the sqlx pool the direct-statement adapter uses.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl HeroStore for OrmHeroStore {
    async fn create(&self, new_hero: HeroCreate) -> Result<HeroPublic, AppError> {
        let txn = self.db.begin().await?;
        let active = hero::ActiveModel {
            id: NotSet,
            name: Set(new_hero.name),
            age: Set(new_hero.age),
            secret_name: Set(new_hero.secret_name),
        };
        // insert reloads the row, so the model carries the assigned id.
        let model = active.insert(&txn).await.map_err(|e| match e {
            DbErr::RecordNotInserted | DbErr::RecordNotFound(_) => {
                AppError::Persistence("failed to create hero".into())
            }
            e => AppError::Orm(e),
        })?;
        txn.commit().await?;
        tracing::info!(id = model.id, "hero created (orm)");
        Ok(model.into())
    }

    async fn list(&self, params: ListParams) -> Result<Vec<HeroPublic>, AppError> {
        // The binder converts offsets to i64 and cannot take anything larger.
        let rows = hero::Entity::find()
            .order_by_asc(hero::Column::Id)
            .offset(params.offset.min(MAX_LIST_OFFSET))
            .limit(params.limit)
            .all(self.connection())
            .await?;
        tracing::info!(count = rows.len(), offset = params.offset, limit = params.limit, "heroes listed (orm)");
        Ok(rows.into_iter().map(HeroPublic::from).collect())
    }

    async fn get(&self, id: i32) -> Result<HeroPublic, AppError> {
        hero::Entity::find_by_id(id)
            .one(self.connection())
            .await?
            .map(HeroPublic::from)
            .ok_or_else(|| AppError::hero_not_found(id))
    }

    async fn update(&self, id: i32, update: HeroUpdate) -> Result<HeroPublic, AppError> {
        let txn = self.db.begin().await?;
        let Some(model) = hero::Entity::find_by_id(id).one(&txn).await? else {
            return Err(AppError::hero_not_found(id));
        };
        if update.is_empty() {
            txn.commit().await?;
            return Ok(model.into());
        }

        let mut active: hero::ActiveModel = model.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(age) = update.age {
            active.age = Set(age);
        }
        if let Some(secret_name) = update.secret_name {
            active.secret_name = Set(secret_name);
        }
        let model = active.update(&txn).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => AppError::hero_not_found(id),
            e => AppError::Orm(e),
        })?;
        txn.commit().await?;
        tracing::info!(id, "hero updated (orm)");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        if hero::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::hero_not_found(id));
        }
        hero::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        tracing::info!(id, "hero deleted (orm)");
        Ok(())
    }
}
