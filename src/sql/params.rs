//! Values bound to hero statements.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::{Query, QueryAs, QueryScalar};

/// A value that can be bound to a hero statement. Column types are fixed, so each variant maps to one SQL type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroBind {
    Text(String),
    /// `age`: `None` binds SQL NULL typed as INT4.
    OptInt(Option<i32>),
    Int(i32),
    BigInt(i64),
}

impl HeroBind {
    pub fn bind_query<'q>(
        &'q self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        match self {
            HeroBind::Text(s) => query.bind(s.as_str()),
            HeroBind::OptInt(n) => query.bind(*n),
            HeroBind::Int(n) => query.bind(*n),
            HeroBind::BigInt(n) => query.bind(*n),
        }
    }

    pub fn bind_query_as<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            HeroBind::Text(s) => query.bind(s.as_str()),
            HeroBind::OptInt(n) => query.bind(*n),
            HeroBind::Int(n) => query.bind(*n),
            HeroBind::BigInt(n) => query.bind(*n),
        }
    }

    pub fn bind_scalar<'q, O>(
        &'q self,
        query: QueryScalar<'q, Postgres, O, PgArguments>,
    ) -> QueryScalar<'q, Postgres, O, PgArguments> {
        match self {
            HeroBind::Text(s) => query.bind(s.as_str()),
            HeroBind::OptInt(n) => query.bind(*n),
            HeroBind::Int(n) => query.bind(*n),
            HeroBind::BigInt(n) => query.bind(*n),
        }
    }
}
