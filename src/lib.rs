//! Heroes API: hero CRUD over REST, served through an ORM adapter and a direct-SQL adapter.

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{Deleted, HeroCreate, HeroPublic, HeroUpdate, ListParams};
pub use routes::{app, common_routes, common_routes_with_ready, hero_routes};
pub use service::{HeroStore, OrmHeroStore, SqlHeroStore};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema};
