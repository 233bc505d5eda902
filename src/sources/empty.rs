use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::sequence::{Capability, Indexable, Sequence};
use std::marker::PhantomData;

/// The canonical empty sequence
pub struct Empty<T> {
    _marker: PhantomData<T>,
}

/// Cursor over nothing: exhausted from the start
pub struct EmptyCursor<T> {
    _marker: PhantomData<T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Empty {
            _marker: PhantomData,
        }
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor = EmptyCursor<T>;

    fn cursor(&self) -> EmptyCursor<T> {
        EmptyCursor {
            _marker: PhantomData,
        }
    }

    fn capability(&self) -> Capability {
        Capability::Indexable { len: 0 }
    }
}

impl<T> Indexable for Empty<T> {
    fn len(&self) -> usize {
        0
    }

    fn get(&self, _index: usize) -> Option<T> {
        None
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> Result<bool, SeqError> {
        Ok(false)
    }

    fn peek(&mut self) -> Result<&T, SeqError> {
        Err(SeqError::NoMoreElements)
    }

    fn take(&mut self) -> Result<T, SeqError> {
        Err(SeqError::NoMoreElements)
    }
}

/// The empty sequence of any element type
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}
