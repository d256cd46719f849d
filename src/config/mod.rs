use std::env;

use sqlx::postgres::PgConnectOptions;

use crate::utils::error::SetupError;

pub mod logging;

pub use logging::init_tracing;

const DEFAULT_USER: &str = "postgres";
const DEFAULT_PASSWORD: &str = "your_password";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: &str = "5432";

/// Connection settings shared by every setup step.
///
/// Only the endpoint and credentials are configurable; the database each
/// step connects to is chosen by the step itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, falling back to
    /// the libpq-style defaults for anything unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SetupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port_str = var("PGPORT", DEFAULT_PORT);
        let port = port_str
            .trim()
            .parse::<u16>()
            .map_err(|e| SetupError::Config(format!("PGPORT '{}' is not a valid port: {}", port_str, e)))?;

        Ok(Self {
            user: var("PGUSER", DEFAULT_USER),
            password: var("PGPASSWORD", DEFAULT_PASSWORD),
            host: var("PGHOST", DEFAULT_HOST),
            port,
        })
    }

    pub fn connect_options(&self, database: &str) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.user, "postgres");
        assert_eq!(config.password, "your_password");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);

        let blank = Config::from_lookup(lookup_from(&[("PGPORT", ""), ("PGHOST", " ")])).unwrap();
        assert_eq!(blank, config);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PGUSER", "events"),
            ("PGPASSWORD", "s3cret"),
            ("PGHOST", "db.internal"),
            ("PGPORT", "6543"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            Config {
                user: "events".to_string(),
                password: "s3cret".to_string(),
                host: "db.internal".to_string(),
                port: 6543,
            }
        );
    }

    #[test]
    fn test_invalid_port_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[("PGPORT", "not-a-port")])).unwrap_err();

        assert!(matches!(err, SetupError::Config(_)));
        assert!(err.to_string().contains("not-a-port"));
    }

    #[test]
    fn test_connect_options_target_requested_database() {
        let config = Config::from_lookup(|_| None).unwrap();
        let options = config.connect_options("events_db");

        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "postgres");
        assert_eq!(options.get_database(), Some("events_db"));
    }
}
