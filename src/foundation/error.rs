/// Convenience alias for results carrying [`ScenemixError`].
pub type ScenemixResult<T> = Result<T, ScenemixError>;

/// Crate error type.
///
/// Per-frame paths (`update`, `draw`) are total and never produce errors;
/// every variant here is raised before the first frame runs.
#[derive(thiserror::Error, Debug)]
pub enum ScenemixError {
    /// Invalid scene-module metadata, detected at registration time. Fatal
    /// to that module's registration, not to the host process.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid boundary input: playlist contents, option value, geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScenemixError {
    /// Build a [`ScenemixError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`ScenemixError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScenemixError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
