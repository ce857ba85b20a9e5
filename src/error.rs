use std::fmt;

use thiserror::Error;

/// Returned by blocking buffer operations after [`close`] has been called
/// and (for `take`) the remaining items have been drained.
///
/// This is a clean-shutdown signal, not a failure.
///
/// [`close`]: crate::BoundedBuffer::close
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("bounded buffer closed")]
    Closed,
}

/// Returned by [`try_put`](crate::BoundedBuffer::try_put), giving the
/// rejected item back to the caller.
///
/// Debug/Display/Error are implemented by hand so the item type needs no
/// bounds, following `std::sync::mpsc::SendError`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TryPutError<T> {
    /// The buffer was at capacity.
    Full(T),
    /// The buffer has been closed.
    Closed(T),
}

impl<T> TryPutError<T> {
    /// Recovers the item that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            TryPutError::Full(item) | TryPutError::Closed(item) => item,
        }
    }
}

impl<T> fmt::Debug for TryPutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPutError::Full(_) => write!(f, "Full(..)"),
            TryPutError::Closed(_) => write!(f, "Closed(..)"),
        }
    }
}

impl<T> fmt::Display for TryPutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPutError::Full(_) => write!(f, "bounded buffer is full"),
            TryPutError::Closed(_) => write!(f, "bounded buffer closed"),
        }
    }
}

impl<T> std::error::Error for TryPutError<T> {}

/// Errors from loading or validating a [`SimConfig`](crate::SimConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
