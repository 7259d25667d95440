use thiserror::Error;

/// Errors raised while parsing shared value types, checking configured
/// limits and reading per-request state.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Request state a hoop should have injected is missing.
    #[error("Missing request state: {0}")]
    MissingState(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
