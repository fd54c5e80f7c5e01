/// Convenience result type used across the crate.
pub type ManifoldResult<T> = Result<T, ManifoldError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum ManifoldError {
    /// The seed string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// Out-of-range parameters or geometry inputs.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while writing the finished artifact.
    #[error("io error: {0}")]
    Io(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ManifoldError {
    /// Build a [`ManifoldError::InvalidSeed`] value.
    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::InvalidSeed(msg.into())
    }

    /// Build a [`ManifoldError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ManifoldError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`ManifoldError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
