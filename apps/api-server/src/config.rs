//! Application configuration loaded from environment variables.

use std::env;

use board_infra::database::DatabaseConfig;

/// How post passwords are kept at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStorage {
    /// Stored verbatim, compared byte for byte.
    Plain,
    /// Salted Argon2 hash (requires the `hashing` feature).
    Argon2,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Apply pending schema migrations on startup.
    pub run_migrations: bool,
    pub password_storage: PasswordStorage,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_or = |key: &str, default: u32| {
            get(key).and_then(|s| s.parse().ok()).unwrap_or(default)
        };

        let database = get("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let mut db = DatabaseConfig::new(url);
                db.max_connections = parse_or("DB_MAX_CONNECTIONS", db.max_connections);
                db.min_connections = parse_or("DB_MIN_CONNECTIONS", db.min_connections);
                db.sqlx_logging = get("DB_LOG_STATEMENTS").is_some_and(|v| is_truthy(&v));
                db
            });

        let password_storage = match get("PASSWORD_STORAGE").as_deref().map(str::trim) {
            None | Some("") | Some("plain") => PasswordStorage::Plain,
            Some("argon2") => PasswordStorage::Argon2,
            Some(other) => {
                tracing::warn!(value = other, "Unknown PASSWORD_STORAGE, using plain");
                PasswordStorage::Plain
            }
        };

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
            run_migrations: get("DB_RUN_MIGRATIONS").is_some_and(|v| is_truthy(&v)),
            password_storage,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
