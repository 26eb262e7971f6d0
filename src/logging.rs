//! # Structured Logging Module
//!
//! Environment-aware structured logging for embedding controllers and tests.
//! The registry itself only emits `tracing` events; installing a subscriber
//! is left to the process that owns it, and this helper is the default way
//! to do that.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
///
/// Idempotent: only the first call installs a subscriber, and an already
/// installed global subscriber (e.g. from the embedding controller) is left
/// in place.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);
        let filter = EnvFilter::new(log_level);

        let result = if use_json_output(&environment) {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .json()
                        .with_filter(filter),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_filter(filter),
                )
                .try_init()
        };

        if result.is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
    });
}

fn get_environment() -> String {
    std::env::var("NODE_REGISTRY_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

fn get_log_level(environment: &str) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| default_level_for(environment).to_string())
}

fn default_level_for(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        "test" => "warn",
        _ => "debug",
    }
}

fn use_json_output(environment: &str) -> bool {
    match std::env::var("NODE_REGISTRY_LOG_FORMAT") {
        Ok(format) => format.eq_ignore_ascii_case("json"),
        Err(_) => environment == "production",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_tracks_environment() {
        assert_eq!(default_level_for("production"), "info");
        assert_eq!(default_level_for("test"), "warn");
        assert_eq!(default_level_for("development"), "debug");
    }

    #[test]
    fn init_is_idempotent() {
        init_structured_logging();
        init_structured_logging();
    }
}
