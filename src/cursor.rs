use crate::error::SeqError;

/// Stateful traversal handle over a sequence
///
/// A cursor is owned by exactly one traversal: it is handed out by
/// [`Sequence::cursor`](crate::sequence::Sequence::cursor) and advanced by the
/// caller until exhausted. Cursors are not shared between threads and this
/// layer provides no synchronization.
///
/// `has_more`/`peek`/`take` are tied together: `peek` and `take` behave as if
/// `has_more` had been called first, and once `has_more` answers `false` it
/// answers `false` forever.
pub trait Cursor {
    /// The type of elements this cursor traverses
    type Item;

    /// Check whether another element is available
    ///
    /// Calling this repeatedly without consuming is idempotent: the
    /// underlying source is advanced at most once per buffered element.
    fn has_more(&mut self) -> Result<bool, SeqError>;

    /// Look at the next element without consuming it
    ///
    /// Repeated peeks return the same element. Fails with
    /// [`SeqError::NoMoreElements`] when exhausted, and keeps failing the
    /// same way on every later call.
    fn peek(&mut self) -> Result<&Self::Item, SeqError>;

    /// Consume and return the next element
    ///
    /// Fails with [`SeqError::NoMoreElements`] when exhausted.
    fn take(&mut self) -> Result<Self::Item, SeqError>;

    /// Remove the element last returned by `take` from the backing source
    ///
    /// Mutation is never supported by this layer; the default (and only)
    /// implementation fails with [`SeqError::UnsupportedOperation`].
    fn remove(&mut self) -> Result<(), SeqError> {
        Err(SeqError::UnsupportedOperation("mutation not supported"))
    }
}
