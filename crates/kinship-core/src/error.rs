use thiserror::Error;

/// Top-level error type for Kinship.
#[derive(Error, Debug)]
pub enum KinshipError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
