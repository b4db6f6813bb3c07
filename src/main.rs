//! Heroes API server: reads config from env (and `.env`), prepares the schema, serves both hero surfaces.

use heroes_api::{app, ensure_database_exists, ensure_schema, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("heroes_api=info,tower_http=info,sqlx=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    // Statement logging lives on the connect options, so it covers the ORM and SQL adapters alike.
    let connect_options = config.connect_options()?;
    if config.ensure_database {
        ensure_database_exists(&connect_options).await?;
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options)
        .await?;
    ensure_schema(&pool).await?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    let state = AppState::new(pool, config);
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
