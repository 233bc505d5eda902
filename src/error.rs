use std::error::Error;
use thiserror::Error as ThisError;

/// Error type shared by every cursor and view in the crate
///
/// The taxonomy is deliberately small:
/// - `NoMoreElements` is the expected, recoverable signal that a traversal
///   has run out of elements.
/// - `IllegalState` signals a caller or computation bug (reentrant use of an
///   engine, invoking an engine whose computation already failed). Retrying
///   does not help.
/// - `UnsupportedOperation` is returned for any attempted mutation through
///   this layer.
/// - `Computation` carries a failure raised inside a user-supplied
///   computation. It is never translated: `Display` forwards to the inner
///   error unchanged and the box can be downcast at the call site.
#[derive(Debug, ThisError)]
pub enum SeqError {
    #[error("no more elements")]
    NoMoreElements,

    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("{0}")]
    Computation(Box<dyn Error>),
}

impl SeqError {
    /// Wrap a user computation failure for verbatim propagation
    pub fn computation(error: impl Error + 'static) -> Self {
        SeqError::Computation(Box::new(error))
    }
}
