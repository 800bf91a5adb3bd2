//! Error types shared by every helper in the crate.
//!
//! All of these describe broken preconditions. None of them is transient, so
//! nothing here is retried or recovered from internally.

use thiserror::Error;

/// Result type alias for operations that can fail with any crate error
pub type Result<T> = std::result::Result<T, SugarError>;

/// Boxed error used by the fallible-closure helpers in [`crate::handler`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Umbrella error for all crate operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SugarError {
    /// Sequence indexing and mutation errors
    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    /// Argument validation errors
    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    /// Arithmetic errors
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Array cursor errors
    #[error("Cursor error: {0}")]
    Cursor(#[from] CursorError),
}

/// Errors raised by read-only sequences such as [`crate::collections::IntRange`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An index or bound lies outside `[0, size]`
    #[error("{name}: {index} size: {size}")]
    OutOfRange {
        /// Name of the offending argument
        name: &'static str,
        /// The offending value
        index: usize,
        /// Size of the sequence at the time of the call
        size: usize,
    },

    /// A sub-range was requested with `from > to`
    #[error("to_index: {to} from_index: {from}")]
    InvertedRange {
        /// Requested start index
        from: usize,
        /// Requested end index
        to: usize,
    },

    /// The sequence cannot be modified
    #[error("{operation}: this sequence cannot be modified")]
    Unsupported {
        /// Name of the rejected operation
        operation: &'static str,
    },
}

impl SequenceError {
    /// True for both bound violations and inverted sub-ranges.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            SequenceError::OutOfRange { .. } | SequenceError::InvertedRange { .. }
        )
    }

    /// True when a mutation was rejected.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, SequenceError::Unsupported { .. })
    }
}

/// Argument validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A required value was absent
    #[error("{name} must be present")]
    Missing {
        /// Name of the argument
        name: String,
    },

    /// A floating point argument was NaN
    #[error("{name} is NaN")]
    NaN {
        /// Name of the argument
        name: String,
    },

    /// A floating point argument was infinite
    #[error("{name} is infinite")]
    Infinite {
        /// Name of the argument
        name: String,
    },

    /// The argument is present but unusable
    #[error("{name}: {reason}")]
    Invalid {
        /// Name of the argument
        name: String,
        /// Why the argument was rejected
        reason: String,
    },
}

impl ArgumentError {
    /// Shorthand for [`ArgumentError::Invalid`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ArgumentError::Invalid {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True for NaN and infinite arguments.
    pub fn is_strange(&self) -> bool {
        matches!(self, ArgumentError::NaN { .. } | ArgumentError::Infinite { .. })
    }
}

/// Arithmetic errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The result does not fit the target type
    #[error("{operation} overflowed")]
    Overflow {
        /// Description of the overflowing computation
        operation: String,
    },

    /// The inputs lie outside the function's domain
    #[error(transparent)]
    Domain(#[from] ArgumentError),
}

impl ArithmeticError {
    pub(crate) fn overflow(operation: impl Into<String>) -> Self {
        ArithmeticError::Overflow {
            operation: operation.into(),
        }
    }
}

/// Array cursor errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// `set` was called before `next` or `previous`
    #[error("no current element in cursor")]
    NoCurrent,

    /// The cursor has no element in the requested direction
    #[error("no {direction} element in cursor")]
    Exhausted {
        /// `"next"` or `"previous"`
        direction: &'static str,
    },

    /// The underlying slice has a fixed length
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
