/// Convenience result type used across the crate.
pub type ShimmerResult<T> = Result<T, ShimmerError>;

/// Top-level error taxonomy.
///
/// Only construction-time problems are errors. Lifecycle misuse such as releasing an already
/// torn-down [`crate::SharedController`] is a no-op, never an error.
#[derive(thiserror::Error, Debug)]
pub enum ShimmerError {
    /// Conflicting effect configuration, e.g. a shared controller combined with an explicit
    /// period, loop count or enabled flag.
    #[error("configuration error: {0}")]
    Config(String),

    /// Structurally invalid value (zero period, malformed gradient, bad color).
    #[error("validation error: {0}")]
    Validation(String),

    /// Pixel buffers that do not match their declared surface size.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShimmerError {
    /// Build a [`ShimmerError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ShimmerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShimmerError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
