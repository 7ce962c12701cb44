//! Shared argument-validation error type.

/// Error type for arguments that violate an operation's contract.
///
/// Raised synchronously and never recovered internally; callers should
/// treat it as a programming error rather than a retryable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// An argument violates the operation's contract.
    InvalidArgument(String),
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentError::InvalidArgument(msg) => {
                write!(f, "invalid argument: {msg}")
            }
        }
    }
}

impl std::error::Error for ArgumentError {}
