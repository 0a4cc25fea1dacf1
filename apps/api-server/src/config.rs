//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Create the schema on startup when it is missing.
    pub run_migrations: bool,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut database = DatabaseConfig::default();
        if let Ok(url) = env::var("DATABASE_URL") {
            database.url = url;
        }
        if let Some(max) = parse_var("DB_MAX_CONNECTIONS") {
            database.max_connections = max;
        }
        if let Some(min) = parse_var("DB_MIN_CONNECTIONS") {
            database.min_connections = min;
        }

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT").unwrap_or(5003),
            database,
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| is_enabled(&v))
                .unwrap_or(true),
            request_timeout: Duration::from_secs(parse_var("REQUEST_TIMEOUT_SECS").unwrap_or(5)),
        }
    }
}

/// Read and parse a variable; missing or unparseable values yield `None`.
fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

fn is_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_enabled() {
        assert!(is_enabled("true"));
        assert!(is_enabled("1"));
        assert!(is_enabled("yes"));
        assert!(!is_enabled("false"));
        assert!(!is_enabled(" OFF "));
        assert!(!is_enabled("0"));
    }

    #[test]
    fn unset_variable_is_not_parsed() {
        assert_eq!(parse_var::<u16>("QUILL_TEST_DEFINITELY_UNSET_VARIABLE"), None);
    }
}
