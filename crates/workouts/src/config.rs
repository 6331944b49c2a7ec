//! Runtime configuration, read from environment variables.

use crate::persistence::DEFAULT_KEY;

pub const STORE_PATH_VAR: &str = "WORKOUTS_STORE_PATH";
pub const STORE_KEY_VAR: &str = "WORKOUTS_STORE_KEY";
pub const PORT_VAR: &str = "PORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory the workout collection is stored in.
    pub store_path: String,

    /// Key (file name) of the stored collection.
    pub store_key: String,

    /// HTTP port.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: "./data".to_string(),
            store_key: DEFAULT_KEY.to_string(),
            port: 3001,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source. Unset or unparseable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid {PORT_VAR}={raw}, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            store_path: lookup(STORE_PATH_VAR).unwrap_or(defaults.store_path),
            store_key: lookup(STORE_KEY_VAR).unwrap_or(defaults.store_key),
            port,
        }
    }
}
