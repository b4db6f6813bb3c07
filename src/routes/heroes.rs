//! Hero CRUD routes for one store under one path prefix.
//! The collection answers on both `/<prefix>` and `/<prefix>/`.

use crate::handlers::heroes::{create, delete as delete_handler, list, read, update};
use crate::service::HeroStore;
use axum::{routing::get, Router};

pub fn hero_routes<S>(prefix: &str, store: S) -> Router
where
    S: HeroStore + Clone + 'static,
{
    let collection = format!("/{}", prefix);
    let collection_slash = format!("/{}/", prefix);
    let item = format!("/{}/:id", prefix);
    Router::new()
        .route(&collection, get(list::<S>).post(create::<S>))
        .route(&collection_slash, get(list::<S>).post(create::<S>))
        .route(
            &item,
            get(read::<S>).patch(update::<S>).delete(delete_handler::<S>),
        )
        .with_state(store)
}
