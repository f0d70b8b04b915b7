/**
 * The error type shared by every fallible range operation.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A malformed argument: a NaN boundary, a low above its high, an
    /// arithmetic overflow or an ordering that reports "not comparable".
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two boundaries with equal values but differing inclusivity were
    /// compared without a low or high context.
    #[error("boundaries of equal value but differing inclusivity are incomparable without context")]
    Incomparable,

    #[error("unable to acquire a range from an empty set")]
    EmptyAggregate,

    /// Any other failure raised by a user ordering.
    #[error("ordering fault: {0}")]
    Fault(String),
}

impl RangeError {
    pub fn invalid<S>(msg: S) -> Self where S : Into<String> {
        RangeError::InvalidArgument(msg.into())
    }

    /// True for the errors that mean "these two values can't be ordered",
    /// as opposed to a genuine fault inside the ordering.
    pub fn is_incomparable(&self) -> bool {
        match self {
            RangeError::InvalidArgument(_) | RangeError::Incomparable => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, RangeError>;

// Tests ///////////////////////////////////////////////////////////////////////
