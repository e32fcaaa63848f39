//! Process configuration read from the environment.

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::env_config::parse_with_default;
use crate::error::ConfigError;

/// Settings the service needs before it can open the store and listen.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

// Connection strings carry credentials.
impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("database_url", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` must be present and non-empty. `PORT` falls back to
    /// [`DEFAULT_PORT`] when unset or unparseable, `HOST` to [`DEFAULT_HOST`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("DATABASE_URL"))?;
        let port = parse_with_default("PORT", lookup("PORT"), DEFAULT_PORT);
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        Ok(Self { database_url, host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
