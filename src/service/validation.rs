//! Request validation: turns untyped JSON bodies and query maps into hero views.

use crate::error::AppError;
use crate::model::{HeroCreate, HeroUpdate, ListParams, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT, MAX_LIST_OFFSET};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub struct RequestValidator;

impl RequestValidator {
    /// Body must be a JSON object.
    pub fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
        match value {
            Value::Object(m) => Ok(m),
            _ => Err(AppError::BadRequest("body must be a JSON object".into())),
        }
    }

    /// Creation view: `name` and `secret_name` required, `age` optional. Unknown keys are ignored.
    pub fn creation(body: &Map<String, Value>) -> Result<HeroCreate, AppError> {
        let name = required_string(body, "name")?;
        let age = match body.get("age") {
            None => None,
            Some(v) => optional_age(v)?,
        };
        let secret_name = required_string(body, "secret_name")?;
        Ok(HeroCreate { name, age, secret_name })
    }

    /// Update view: only keys present in the body are set.
    pub fn partial(body: &Map<String, Value>) -> Result<HeroUpdate, AppError> {
        let mut update = HeroUpdate::default();
        if let Some(v) = body.get("name") {
            update.name = Some(non_null_string("name", v)?);
        }
        if let Some(v) = body.get("age") {
            update.age = Some(optional_age(v)?);
        }
        if let Some(v) = body.get("secret_name") {
            update.secret_name = Some(non_null_string("secret_name", v)?);
        }
        Ok(update)
    }

    /// `offset` (default 0, at most `i64::MAX`) and `limit` (default 100, at most 100). Other query keys are ignored.
    pub fn list_params(query: &HashMap<String, String>) -> Result<ListParams, AppError> {
        let offset = match query.get("offset") {
            Some(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| AppError::Validation("offset must be a non-negative integer".into()))?,
            None => 0,
        };
        let limit = match query.get("limit") {
            Some(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| AppError::Validation("limit must be a non-negative integer".into()))?,
            None => DEFAULT_LIST_LIMIT,
        };
        if offset > MAX_LIST_OFFSET {
            return Err(AppError::Validation(format!(
                "offset must be at most {}",
                MAX_LIST_OFFSET
            )));
        }
        if limit > MAX_LIST_LIMIT {
            return Err(AppError::Validation(format!(
                "limit must be at most {}",
                MAX_LIST_LIMIT
            )));
        }
        Ok(ListParams { offset, limit })
    }

    /// Path id must be an integer that fits the `id` column.
    pub fn hero_id(raw: &str) -> Result<i32, AppError> {
        raw.trim()
            .parse::<i32>()
            .map_err(|_| AppError::Validation(format!("invalid hero id '{}'", raw)))
    }
}

fn required_string(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", field))),
        Some(v) => non_null_string(field, v),
    }
}

fn non_null_string(field: &str, v: &Value) -> Result<String, AppError> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Err(AppError::Validation(format!("{} may not be null", field))),
        _ => Err(AppError::Validation(format!("{} must be a string", field))),
    }
}

fn optional_age(v: &Value) -> Result<Option<i32>, AppError> {
    match v {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .map(Some)
            .ok_or_else(|| AppError::Validation("age must be an integer".into())),
        _ => Err(AppError::Validation("age must be an integer".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        RequestValidator::body_to_map(v).unwrap()
    }

    #[test]
    fn creation_accepts_full_payload() {
        let hero = RequestValidator::creation(&map(json!({
            "name": "Spider-Man",
            "age": 25,
            "secret_name": "Peter Parker"
        })))
        .unwrap();
        assert_eq!(hero.name, "Spider-Man");
        assert_eq!(hero.age, Some(25));
        assert_eq!(hero.secret_name, "Peter Parker");
    }

    #[test]
    fn creation_age_is_optional_and_extra_keys_ignored() {
        let hero = RequestValidator::creation(&map(json!({
            "name": "Deadpond",
            "secret_name": "Dive Wilson",
            "id": 999
        })))
        .unwrap();
        assert_eq!(hero.age, None);
    }

    #[test]
    fn creation_requires_name_and_secret_name() {
        let err = RequestValidator::creation(&map(json!({"secret_name": "x"}))).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "name is required"));
        let err = RequestValidator::creation(&map(json!({"name": "x", "secret_name": null}))).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "secret_name is required"));
    }

    #[test]
    fn creation_rejects_wrong_types() {
        assert!(RequestValidator::creation(&map(json!({"name": 5, "secret_name": "x"}))).is_err());
        assert!(RequestValidator::creation(&map(json!({"name": "a", "age": "old", "secret_name": "x"}))).is_err());
        assert!(RequestValidator::creation(&map(json!({"name": "a", "age": 2.5, "secret_name": "x"}))).is_err());
        assert!(RequestValidator::creation(&map(json!({"name": "a", "age": 4294967296u64, "secret_name": "x"}))).is_err());
    }

    #[test]
    fn partial_tracks_presence() {
        let update = RequestValidator::partial(&map(json!({"age": 26}))).unwrap();
        assert_eq!(
            update,
            HeroUpdate {
                age: Some(Some(26)),
                ..Default::default()
            }
        );

        let update = RequestValidator::partial(&map(json!({"age": null}))).unwrap();
        assert_eq!(update.age, Some(None));

        assert!(RequestValidator::partial(&map(json!({}))).unwrap().is_empty());
    }

    #[test]
    fn partial_rejects_null_for_required_columns() {
        let err = RequestValidator::partial(&map(json!({"name": null}))).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "name may not be null"));
    }

    #[test]
    fn non_object_body_is_bad_request() {
        assert!(matches!(
            RequestValidator::body_to_map(json!([1, 2])),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn list_params_defaults_and_bounds() {
        let empty = HashMap::new();
        assert_eq!(RequestValidator::list_params(&empty).unwrap(), ListParams::default());

        let mut q = HashMap::new();
        q.insert("offset".to_string(), "10".to_string());
        q.insert("limit".to_string(), "0".to_string());
        assert_eq!(
            RequestValidator::list_params(&q).unwrap(),
            ListParams { offset: 10, limit: 0 }
        );

        q.insert("limit".to_string(), "101".to_string());
        assert!(RequestValidator::list_params(&q).is_err());

        q.insert("limit".to_string(), "5".to_string());
        q.insert("offset".to_string(), "-1".to_string());
        assert!(RequestValidator::list_params(&q).is_err());
    }

    #[test]
    fn offset_is_bounded_by_bigint() {
        let mut q = HashMap::new();
        q.insert("offset".to_string(), i64::MAX.to_string());
        assert_eq!(RequestValidator::list_params(&q).unwrap().offset, MAX_LIST_OFFSET);

        q.insert("offset".to_string(), "9223372036854775808".to_string());
        let err = RequestValidator::list_params(&q).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.starts_with("offset must be at most")));
    }

    #[test]
    fn hero_id_parsing() {
        assert_eq!(RequestValidator::hero_id("42").unwrap(), 42);
        assert!(RequestValidator::hero_id("abc").is_err());
        assert!(RequestValidator::hero_id("99999999999").is_err());
    }
}
