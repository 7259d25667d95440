use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid base session: {0}")]
    InvalidBaseSession(String),

    #[error("Invalid repeat configuration: {0}")]
    InvalidRepeatConfig(String),

    #[error("Invalid pattern #{index}: {reason}")]
    InvalidPattern { index: usize, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl ServiceError {
    /// ## Summary
    /// Stable snake_case label for the error kind, suitable for API payloads.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidBaseSession(_) => "invalid_base_session",
            Self::InvalidRepeatConfig(_) => "invalid_repeat_config",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
