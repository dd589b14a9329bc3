use crate::config::ConfigError;
use crate::http::ServerError;

/// Top-level error returned by the binary.
///
/// The greeting handler itself cannot fail; everything here happens at
/// startup or while serving.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
