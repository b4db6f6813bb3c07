//! Hero store contract and its two persistence adapters.

pub mod orm;
pub mod sql;
pub mod validation;

pub use orm::OrmHeroStore;
pub use sql::SqlHeroStore;
pub use validation::RequestValidator;

use crate::error::AppError;
use crate::model::{HeroCreate, HeroPublic, HeroUpdate, ListParams};
use async_trait::async_trait;

/// The five CRUD operations over heroes. Every write commits before returning;
/// a failed operation leaves stored state unchanged.
#[async_trait]
pub trait HeroStore: Send + Sync {
    /// Persist a new hero and return it with its store-assigned id.
    async fn create(&self, hero: HeroCreate) -> Result<HeroPublic, AppError>;

    /// Heroes ordered by ascending id, `offset` skipped, at most `limit` returned.
    async fn list(&self, params: ListParams) -> Result<Vec<HeroPublic>, AppError>;

    async fn get(&self, id: i32) -> Result<HeroPublic, AppError>;

    /// Overwrite only the fields present in `update`. An empty update returns the current row.
    async fn update(&self, id: i32, update: HeroUpdate) -> Result<HeroPublic, AppError>;

    async fn delete(&self, id: i32) -> Result<(), AppError>;
}
