/// Convenience result type used across Choreo.
pub type ChoreoResult<T> = Result<T, ChoreoError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChoreoError {
    /// Invalid attribute, axis, or control-point configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Shape or arithmetic failures on the value primitives.
    #[error("value error: {0}")]
    Value(String),

    /// Contract violations while interpolating a query position.
    #[error("interpolation error: {0}")]
    Interpolation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChoreoError {
    /// Build a [`ChoreoError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ChoreoError::Value`] value.
    pub fn value(msg: impl Into<String>) -> Self {
        Self::Value(msg.into())
    }

    /// Build a [`ChoreoError::Interpolation`] value.
    pub fn interpolation(msg: impl Into<String>) -> Self {
        Self::Interpolation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
