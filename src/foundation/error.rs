/// Crate-wide result alias.
pub type UiGraphResult<T> = Result<T, UiGraphError>;

/// Errors raised at the I/O and validation boundary.
///
/// A render pass never produces one of these: broken references inside a graph degrade to
/// [`crate::Diagnostic`] elements instead.
#[derive(thiserror::Error, Debug)]
pub enum UiGraphError {
    /// Input text could not be decoded into a graph or data model.
    #[error("parse error: {0}")]
    Parse(String),

    /// Explicit structural validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization of an output value failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UiGraphError {
    /// Build a [`UiGraphError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`UiGraphError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UiGraphError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
