//! Environment configuration

use std::env;

/// Log filter used when nothing is configured
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "unitbot_units=debug"
    pub log_filter: String,
}

impl ServerConfig {
    /// Read `UNITBOT_LOG`, falling back to `RUST_LOG`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = ["UNITBOT_LOG", "RUST_LOG"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self { log_filter }
    }
}
