//! Error types for the Storegate core.

/// Core error type for Storegate infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum StoregateError {
    /// Invalid tenant identifier.
    #[error("invalid tenant id: {0} (must be non-empty and contain no whitespace)")]
    InvalidTenantId(String),

    /// Invalid service identifier.
    #[error("invalid service id: {0} (must be non-empty and contain no whitespace)")]
    InvalidServiceId(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for Storegate operations.
pub type StoregateResult<T> = Result<T, StoregateError>;
