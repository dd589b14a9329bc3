//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};
use crate::error::AppError;

/// Pick the log filter. Priority: CLI > env > default.
pub fn select_log_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber in the requested format.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(log_filter: &str, format: LogFormat) -> Result<(), AppError> {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(log_filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    }
    .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_filter_wins_over_env() {
        let filter = select_log_filter(Some("hello_docker=trace".into()), Some("warn".into()));
        assert_eq!(filter, "hello_docker=trace");
    }

    #[test]
    fn env_filter_used_without_cli() {
        assert_eq!(select_log_filter(None, Some("warn".into())), "warn");
    }

    #[test]
    fn default_filter_when_nothing_set() {
        assert_eq!(select_log_filter(None, None), DEFAULT_LOG_FILTER);
    }

    // Only test in this binary that touches the global subscriber.
    #[test]
    fn json_subscriber_installs_once() {
        init_tracing("hello_docker=debug", LogFormat::Json).unwrap();

        let err = init_tracing("hello_docker=debug", LogFormat::Json).unwrap_err();
        assert!(matches!(err, AppError::Logging(_)));
    }
}
