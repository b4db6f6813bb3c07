//! Direct-statement adapter: parameterized SQL against the `heroes` table with explicit transactions.

use super::HeroStore;
use crate::error::AppError;
use crate::model::{HeroCreate, HeroPublic, HeroUpdate, ListParams};
use crate::sql::{builder, QueryBuf};
use async_trait::async_trait;
use sqlx::{Connection, PgConnection, PgPool};

type PublicRow = (i32, String, Option<i32>);

#[derive(Clone)]
pub struct SqlHeroStore {
    pool: PgPool,
}

impl SqlHeroStore {
    pub fn new(pool: PgPool) -> Self {
        SqlHeroStore { pool }
    }

    async fn fetch_one_public(&self, conn: &mut PgConnection, q: &QueryBuf) -> Result<Option<HeroPublic>, AppError> {
        let mut query = sqlx::query_as::<_, PublicRow>(&q.sql);
        for p in &q.params {
            query = p.bind_query_as(query);
        }
        let row = query.fetch_optional(&mut *conn).await?;
        Ok(row.map(public_from_row))
    }

    async fn fetch_many_public(&self, conn: &mut PgConnection, q: &QueryBuf) -> Result<Vec<HeroPublic>, AppError> {
        let mut query = sqlx::query_as::<_, PublicRow>(&q.sql);
        for p in &q.params {
            query = p.bind_query_as(query);
        }
        let rows = query.fetch_all(&mut *conn).await?;
        Ok(rows.into_iter().map(public_from_row).collect())
    }

    /// Existence check: a dedicated COUNT, separate from the read that builds the response.
    async fn exists(&self, conn: &mut PgConnection, id: i32) -> Result<bool, AppError> {
        let q = builder::count_by_id(id);
        let mut query = sqlx::query_scalar::<_, i64>(&q.sql);
        for p in &q.params {
            query = p.bind_scalar(query);
        }
        let count = query.fetch_one(&mut *conn).await?;
        Ok(count > 0)
    }

    async fn execute(&self, conn: &mut PgConnection, q: &QueryBuf) -> Result<u64, AppError> {
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = p.bind_query(query);
        }
        let done = query.execute(&mut *conn).await?;
        Ok(done.rows_affected())
    }
}

fn public_from_row((id, name, age): PublicRow) -> HeroPublic {
    HeroPublic { id, name, age }
}

#[async_trait]
impl HeroStore for SqlHeroStore {
    async fn create(&self, hero: HeroCreate) -> Result<HeroPublic, AppError> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;
        let q = builder::insert(&hero);
        let created = self
            .fetch_one_public(&mut tx, &q)
            .await?
            .ok_or_else(|| AppError::Persistence("failed to create hero".into()))?;
        tx.commit().await?;
        tracing::info!(id = created.id, "hero created (sql)");
        Ok(created)
    }

    async fn list(&self, params: ListParams) -> Result<Vec<HeroPublic>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let q = builder::select_list(&params);
        let heroes = self.fetch_many_public(&mut conn, &q).await?;
        tracing::info!(count = heroes.len(), offset = params.offset, limit = params.limit, "heroes listed (sql)");
        Ok(heroes)
    }

    async fn get(&self, id: i32) -> Result<HeroPublic, AppError> {
        let mut conn = self.pool.acquire().await?;
        self.fetch_one_public(&mut conn, &builder::select_by_id(id))
            .await?
            .ok_or_else(|| AppError::hero_not_found(id))
    }

    async fn update(&self, id: i32, update: HeroUpdate) -> Result<HeroPublic, AppError> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;
        if !self.exists(&mut tx, id).await? {
            return Err(AppError::hero_not_found(id));
        }
        let Some(q) = builder::update(id, &update) else {
            let current = self
                .fetch_one_public(&mut tx, &builder::select_by_id(id))
                .await?
                .ok_or_else(|| AppError::hero_not_found(id))?;
            tx.commit().await?;
            return Ok(current);
        };
        self.execute(&mut tx, &q).await?;
        tx.commit().await?;

        // Re-read after commit rather than echoing the request.
        let updated = self
            .fetch_one_public(&mut conn, &builder::select_by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("hero {} after update", id)))?;
        tracing::info!(id, "hero updated (sql)");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;
        if !self.exists(&mut tx, id).await? {
            return Err(AppError::hero_not_found(id));
        }
        self.execute(&mut tx, &builder::delete(id)).await?;
        tx.commit().await?;
        tracing::info!(id, "hero deleted (sql)");
        Ok(())
    }
}
