//! Terminal outcomes of the bounded retry loops.

use thiserror::Error;

/// Why a bounded retry loop stopped without reaching its goal.
///
/// The engine never wraps or rewrites the operation's error beyond choosing
/// which of these variants to surface; `Operation` carries the value
/// verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RetryError<E> {
    /// The operation's own error, propagated as-is.
    #[error("{0}")]
    Operation(E),
    /// The elapsed-time budget ran out before the loop's goal was met.
    #[error("retry timed out")]
    TimedOut,
    /// The cancellation token fired before the loop's goal was met.
    #[error("retry cancelled")]
    Cancelled,
}

impl<E> RetryError<E> {
    /// True if the loop stopped because its time budget elapsed.
    pub fn is_timed_out(&self) -> bool {
        matches!(self, RetryError::TimedOut)
    }

    /// True if the loop stopped because the cancellation token fired.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RetryError::Cancelled)
    }

    /// The operation's error, if that is what stopped the loop.
    pub fn into_operation(self) -> Option<E> {
        match self {
            RetryError::Operation(e) => Some(e),
            RetryError::TimedOut | RetryError::Cancelled => None,
        }
    }
}
