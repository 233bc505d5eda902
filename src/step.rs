use crate::error::SeqError;

/// Outcome of one invocation of a lazy computation
///
/// Exhaustion is an expected, tagged return, never an error: the error
/// channel is reserved for genuine computation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The computation produced the next element
    Produced(T),
    /// The computation has no further elements, permanently
    Exhausted,
}

/// A user-supplied "produce the next element or signal exhaustion" step
///
/// The engine ([`Lazy`](crate::lazy::Lazy)) guarantees the contract around
/// this trait: `step` is invoked at most once per buffered element, never
/// again after it returns [`Step::Exhausted`], and never again after it
/// returns an error.
pub trait Compute {
    /// The type of elements this computation produces
    type Item;

    /// Produce the next element, signal exhaustion, or fail
    fn step(&mut self) -> Result<Step<Self::Item>, SeqError>;
}

/// Any `FnMut` closure with the right shape is a computation
impl<T, F> Compute for F
where
    F: FnMut() -> Result<Step<T>, SeqError>,
{
    type Item = T;

    fn step(&mut self) -> Result<Step<T>, SeqError> {
        self()
    }
}
