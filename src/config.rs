//! Configuration management.
//!
//! The core planner takes no configuration at all — `plan()` is a pure
//! function of its arguments. This covers only the CLI/logging concerns
//! this crate actually has; no `DATABASE_URL`/`NATS_URL`/`JWT_SECRET` as
//! the teacher's `Config` carried, since persistent storage and
//! authentication are explicit Non-goals.

use anyhow::Result;

/// Application configuration, loaded from the environment (and an
/// optional `.env` file).
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the daily rolling log file is written into.
    pub logs_dir: String,

    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let logs_dir = std::env::var("LOGS_DIR").unwrap_or_else(|_| "./logs".to_string());
        let log_filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,bracket_planner=debug".to_string());

        Ok(Self { logs_dir, log_filter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_dir_defaults_when_unset() {
        std::env::remove_var("LOGS_DIR");
        let config = Config::from_env().unwrap();
        assert_eq!(config.logs_dir, "./logs");
    }

    #[test]
    fn logs_dir_uses_env_override_when_set() {
        std::env::set_var("LOGS_DIR", "/tmp/bracket-planner-logs");
        let config = Config::from_env().unwrap();
        assert_eq!(config.logs_dir, "/tmp/bracket-planner-logs");
        std::env::remove_var("LOGS_DIR");
    }

    #[test]
    fn log_filter_defaults_when_unset() {
        std::env::remove_var("RUST_LOG");
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_filter, "info,bracket_planner=debug");
    }
}
