//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the `heroes` table.
//!
//! Table and column names are compile-time constants; every caller-supplied value goes into
//! `QueryBuf::params` and is referenced by placeholder (`$1`, `$2`, ...).

use crate::model::{HeroCreate, HeroUpdate, ListParams};
use crate::sql::HeroBind;

pub const HEROES_TABLE: &str = "heroes";

/// Columns of the public view, in response order.
const PUBLIC_COLUMNS: &str = "id, name, age";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<HeroBind>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: HeroBind) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Column setter for one updatable field.
struct ColumnBinder {
    column: &'static str,
    value: fn(&HeroUpdate) -> Option<HeroBind>,
}

/// Every column a partial update may touch, in SET order. `id` is never updatable.
const UPDATABLE: &[ColumnBinder] = &[
    ColumnBinder {
        column: "name",
        value: |u| u.name.clone().map(HeroBind::Text),
    },
    ColumnBinder {
        column: "age",
        value: |u| u.age.map(HeroBind::OptInt),
    },
    ColumnBinder {
        column: "secret_name",
        value: |u| u.secret_name.clone().map(HeroBind::Text),
    },
];

/// INSERT all creation fields; RETURNING the public view so the assigned id comes back.
pub fn insert(hero: &HeroCreate) -> QueryBuf {
    let mut q = QueryBuf::new();
    let name = q.push_param(HeroBind::Text(hero.name.clone()));
    let age = q.push_param(HeroBind::OptInt(hero.age));
    let secret = q.push_param(HeroBind::Text(hero.secret_name.clone()));
    q.sql = format!(
        "INSERT INTO {} (name, age, secret_name) VALUES (${}, ${}, ${}) RETURNING {}",
        HEROES_TABLE, name, age, secret, PUBLIC_COLUMNS
    );
    q
}

/// SELECT page ordered by id.
pub fn select_list(params: &ListParams) -> QueryBuf {
    let mut q = QueryBuf::new();
    let limit = q.push_param(HeroBind::BigInt(clamp_i64(params.limit)));
    let offset = q.push_param(HeroBind::BigInt(clamp_i64(params.offset)));
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY id LIMIT ${} OFFSET ${}",
        PUBLIC_COLUMNS, HEROES_TABLE, limit, offset
    );
    q
}

/// SELECT public view by id.
pub fn select_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(HeroBind::Int(id));
    q.sql = format!("SELECT {} FROM {} WHERE id = ${}", PUBLIC_COLUMNS, HEROES_TABLE, n);
    q
}

/// Existence check, independent of the read used for the response.
pub fn count_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(HeroBind::Int(id));
    q.sql = format!("SELECT COUNT(*) FROM {} WHERE id = ${}", HEROES_TABLE, n);
    q
}

/// UPDATE by id: SET only the fields present in `update`. Returns None when nothing is present.
pub fn update(id: i32, update: &HeroUpdate) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for binder in UPDATABLE {
        let Some(v) = (binder.value)(update) else { continue };
        let n = q.push_param(v);
        sets.push(format!("{} = ${}", binder.column, n));
    }
    if sets.is_empty() {
        return None;
    }
    let id_param = q.push_param(HeroBind::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE id = ${}",
        HEROES_TABLE,
        sets.join(", "),
        id_param
    );
    Some(q)
}

/// DELETE by id.
pub fn delete(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(HeroBind::Int(id));
    q.sql = format!("DELETE FROM {} WHERE id = ${}", HEROES_TABLE, n);
    q
}

fn clamp_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
