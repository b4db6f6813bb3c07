//! Process configuration read from the environment once at startup.

use crate::error::ConfigError;
use log::LevelFilter;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/heroes";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Read-only after construction; shared through `AppState`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Log every SQL statement at INFO instead of DEBUG. Both adapters share the pool, so this covers both.
    pub sql_echo: bool,
    /// Create the target database through the `postgres` admin database when missing.
    pub ensure_database: bool,
}

impl AppConfig {
    /// Build from process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DB_MAX_CONNECTIONS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let sql_echo = parse_flag("SQL_ECHO", lookup("SQL_ECHO"), false)?;
        let ensure_database = parse_flag("ENSURE_DATABASE", lookup("ENSURE_DATABASE"), true)?;

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            sql_echo,
            ensure_database,
        })
    }
}

impl AppConfig {
    /// Level sqlx logs executed statements at.
    pub fn statement_log_level(&self) -> LevelFilter {
        if self.sql_echo {
            LevelFilter::Info
        } else {
            LevelFilter::Debug
        }
    }

    /// Options for the shared pool, with statement logging applied.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let options = PgConnectOptions::from_str(&self.database_url).map_err(|_| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: self.database_url.clone(),
        })?;
        Ok(options.log_statements(self.statement_log_level()))
    }
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else { return Ok(default) };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr.port(), 8000);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!cfg.sql_echo);
        assert!(cfg.ensure_database);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_from(&[
            ("DATABASE_URL", "postgres://db/marvel"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("SQL_ECHO", "TRUE"),
            ("ENSURE_DATABASE", "false"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://db/marvel");
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.max_connections, 12);
        assert!(cfg.sql_echo);
        assert!(!cfg.ensure_database);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("SQL_ECHO", "sometimes")]),
            Err(ConfigError::Invalid { key: "SQL_ECHO", .. })
        ));
        assert!(matches!(
            config_from(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config_from(&[("BIND_ADDR", "not-an-addr")]),
            Err(ConfigError::Invalid { key: "BIND_ADDR", .. })
        ));
    }

    #[test]
    fn sql_echo_raises_statement_level() {
        assert_eq!(config_from(&[]).unwrap().statement_log_level(), LevelFilter::Debug);
        assert_eq!(
            config_from(&[("SQL_ECHO", "1")]).unwrap().statement_log_level(),
            LevelFilter::Info
        );
    }

    #[test]
    fn connect_options_parse_database_url() {
        let options = config_from(&[("DATABASE_URL", "postgres://user:pw@db:5433/marvel")])
            .unwrap()
            .connect_options()
            .unwrap();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("marvel"));

        let err = config_from(&[("DATABASE_URL", "not a url")])
            .unwrap()
            .connect_options()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_URL", .. }));
    }
}
