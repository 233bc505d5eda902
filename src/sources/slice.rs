use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::sequence::{Capability, Indexable, Sequence};

/// Forward cursor over a borrowed slice
///
/// Elements are handed out as clones so that the slice can be traversed any
/// number of times.
pub struct SliceCursor<'src, T> {
    data: &'src [T],
    position: usize,
}

impl<'src, T> SliceCursor<'src, T> {
    pub fn new(data: &'src [T]) -> Self {
        SliceCursor { data, position: 0 }
    }
}

impl<'src, T: Clone> Cursor for SliceCursor<'src, T> {
    type Item = T;

    fn has_more(&mut self) -> Result<bool, SeqError> {
        Ok(self.position < self.data.len())
    }

    fn peek(&mut self) -> Result<&T, SeqError> {
        self.data.get(self.position).ok_or(SeqError::NoMoreElements)
    }

    fn take(&mut self) -> Result<T, SeqError> {
        let value = self
            .data
            .get(self.position)
            .cloned()
            .ok_or(SeqError::NoMoreElements)?;
        self.position += 1;
        Ok(value)
    }
}

impl<'src, T: Clone> Sequence for &'src [T] {
    type Item = T;
    type Cursor = SliceCursor<'src, T>;

    fn cursor(&self) -> SliceCursor<'src, T> {
        SliceCursor::new(self)
    }

    fn capability(&self) -> Capability {
        Capability::Indexable { len: self.len() }
    }
}

impl<'src, T: Clone> Indexable for &'src [T] {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<T> {
        (**self).get(index).cloned()
    }
}

impl<'src, T: Clone> Sequence for &'src Vec<T> {
    type Item = T;
    type Cursor = SliceCursor<'src, T>;

    fn cursor(&self) -> SliceCursor<'src, T> {
        SliceCursor::new(self.as_slice())
    }

    fn capability(&self) -> Capability {
        Capability::Indexable { len: (**self).len() }
    }
}

impl<'src, T: Clone> Indexable for &'src Vec<T> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}
