//! Database bootstrap: create the database if missing, then the `heroes` table and its indexes.

use crate::error::AppError;
use crate::sql::HEROES_TABLE;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgConnection, PgPool};

/// Idempotent DDL for the single hero table. `id` is the only unique identifier.
const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS heroes (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        age INTEGER,
        secret_name TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_heroes_name ON heroes (name)",
    "CREATE INDEX IF NOT EXISTS ix_heroes_age ON heroes (age)",
];

pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in SCHEMA_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(table = HEROES_TABLE, "schema ready");
    Ok(())
}

/// Connect to the `postgres` admin database on the same server and create the target database if it is missing.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_target(options) else {
        return Ok(());
    };
    let mut conn: PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        // CREATE DATABASE takes no bind parameters; the name comes from our own config, quoted.
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

/// Admin options plus the target name. None when no database is named or it is `postgres` itself.
fn admin_target(options: &PgConnectOptions) -> Option<(PgConnectOptions, String)> {
    let db_name = options.get_database()?.trim();
    if db_name.is_empty() || db_name == "postgres" {
        return None;
    }
    Some((options.clone().database("postgres"), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(url: &str) -> PgConnectOptions {
        url.parse().unwrap()
    }

    #[test]
    fn admin_target_points_at_postgres_on_same_server() {
        let (admin, name) = admin_target(&options("postgres://user:pw@localhost:5432/marvel?sslmode=disable")).unwrap();
        assert_eq!(name, "marvel");
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_username(), "user");
    }

    #[test]
    fn admin_target_skips_the_admin_database() {
        assert!(admin_target(&options("postgres://localhost/postgres")).is_none());
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("heroes"), "\"heroes\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn schema_has_single_table_with_indexes() {
        assert!(SCHEMA_DDL[0].contains("id SERIAL PRIMARY KEY"));
        assert!(SCHEMA_DDL[0].contains("secret_name TEXT NOT NULL"));
        assert_eq!(SCHEMA_DDL.iter().filter(|s| s.contains("CREATE INDEX")).count(), 2);
    }
}
