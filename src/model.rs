//! Hero views: what callers may send and what they get back.
//!
//! The stored row carries `secret_name`; only [`HeroPublic`] is ever serialized to a response.

use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_LIST_LIMIT: u64 = 100;
pub const MAX_LIST_LIMIT: u64 = 100;
/// Largest offset either adapter can bind (a Postgres BIGINT).
pub const MAX_LIST_OFFSET: u64 = i64::MAX as u64;

/// Public view: returned by create, read, list, and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroPublic {
    pub id: i32,
    pub name: String,
    pub age: Option<i32>,
}

/// Creation view (POST body).
#[derive(Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct HeroCreate {
    pub name: String,
    pub age: Option<i32>,
    pub secret_name: String,
}

/// Update view (PATCH body). `None` means the field was absent from the request.
/// `age: Some(None)` clears the stored age.
#[derive(Clone, Debug, Default, PartialEq, Eq, ToSchema)]
pub struct HeroUpdate {
    pub name: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub age: Option<Option<i32>>,
    pub secret_name: Option<String>,
}

impl HeroUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.secret_name.is_none()
    }
}

/// Pagination for list. Validated bounds: `limit <= MAX_LIST_LIMIT`, `offset <= MAX_LIST_OFFSET`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub offset: u64,
    pub limit: u64,
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            offset: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Body of a successful delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Deleted {
    pub ok: bool,
}
