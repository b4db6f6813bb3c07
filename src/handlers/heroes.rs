//! Hero CRUD handlers, generic over the store so both adapters share one HTTP contract.

use crate::error::AppError;
use crate::model::{Deleted, HeroPublic};
use crate::service::{HeroStore, RequestValidator};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<serde_json::Map<String, Value>, AppError> {
    let Json(value) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    RequestValidator::body_to_map(value)
}

pub async fn list<S: HeroStore + Clone>(
    State(store): State<S>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<HeroPublic>>, AppError> {
    let params = RequestValidator::list_params(&params)?;
    let heroes = store.list(params).await?;
    Ok(Json(heroes))
}

pub async fn create<S: HeroStore + Clone>(
    State(store): State<S>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<HeroPublic>, AppError> {
    let body = json_body(body)?;
    let hero = RequestValidator::creation(&body)?;
    let created = store.create(hero).await?;
    Ok(Json(created))
}

pub async fn read<S: HeroStore + Clone>(
    State(store): State<S>,
    Path(id_str): Path<String>,
) -> Result<Json<HeroPublic>, AppError> {
    let id = RequestValidator::hero_id(&id_str)?;
    let hero = store.get(id).await?;
    Ok(Json(hero))
}

pub async fn update<S: HeroStore + Clone>(
    State(store): State<S>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<HeroPublic>, AppError> {
    let id = RequestValidator::hero_id(&id_str)?;
    let body = json_body(body)?;
    let update = RequestValidator::partial(&body)?;
    let hero = store.update(id, update).await?;
    Ok(Json(hero))
}

pub async fn delete<S: HeroStore + Clone>(
    State(store): State<S>,
    Path(id_str): Path<String>,
) -> Result<Json<Deleted>, AppError> {
    let id = RequestValidator::hero_id(&id_str)?;
    store.delete(id).await?;
    Ok(Json(Deleted { ok: true }))
}
