pub mod common;
pub mod heroes;

pub use common::{common_routes, common_routes_with_ready, ApiDoc};
pub use heroes::hero_routes;

use crate::response::{ORM_PREFIX, SQL_PREFIX};
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: common routes plus both hero surfaces side by side.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(hero_routes(ORM_PREFIX, state.orm.clone()))
        .merge(hero_routes(SQL_PREFIX, state.sql.clone()))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
