//! Error types for console misuse.
//!
//! Every error here signals a caller bug, not a transient failure: there is
//! no retry policy and no recovery path inside the crate. Absent-text misuse
//! has no runtime representation at all, since `&str` arguments cannot be
//! null.

use thiserror::Error;

/// Errors reported by [`LineBuffer`](crate::LineBuffer) and
/// [`Console`](crate::Console) operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConsoleError {
    /// A read-back offset was at or past the buffer capacity.
    #[error("offset {offset} out of range for capacity {capacity}")]
    OutOfRange {
        /// The rejected newest-first offset.
        offset: usize,
        /// The buffer capacity at the time of the read.
        capacity: usize,
    },

    /// A resize to zero slots was requested.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// A width or height budget was zero or negative.
    #[error("budget must be positive, got {budget}")]
    BudgetNotPositive {
        /// The rejected budget value.
        budget: f32,
    },

    /// `write` was called before any successful `reconfigure`.
    #[error("console not configured; call reconfigure with a measurer first")]
    NotConfigured,

    /// The measurer reported a line height that does not grow as lines are
    /// added, so the capacity probe cannot terminate.
    #[error("measurer reported non-increasing height during capacity probe")]
    StuckMetrics,
}
