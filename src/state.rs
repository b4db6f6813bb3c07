//! Shared application state, built once at startup.

use crate::config::AppConfig;
use crate::service::{OrmHeroStore, SqlHeroStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    /// Mounted under `/heroes`.
    pub orm: OrmHeroStore,
    /// Mounted under `/heroes_sql`.
    pub sql: SqlHeroStore,
}

impl AppState {
    /// Both adapters share one pool; the ORM wraps it rather than opening its own.
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        let orm = OrmHeroStore::from_pool(pool.clone());
        let sql = SqlHeroStore::new(pool.clone());
        AppState {
            pool,
            config: Arc::new(config),
            orm,
            sql,
        }
    }
}
