use crate::sequence::{Capability, Indexable, Sequence};
use crate::sources::index::IndexCursor;
use std::cell::RefCell;

/// Shared mutable backing for live views
///
/// A `&RefCell<Vec<T>>` is a sequence whose length and elements are read at
/// access time, so fresh cursors (and the live rotate/reverse views built on
/// top) observe the current contents of the vector, not a snapshot.
pub type SharedVec<T> = RefCell<Vec<T>>;

impl<'src, T: Clone> Sequence for &'src RefCell<Vec<T>> {
    type Item = T;
    type Cursor = IndexCursor<&'src RefCell<Vec<T>>>;

    fn cursor(&self) -> Self::Cursor {
        let len = self.borrow().len();
        IndexCursor::new(*self, (0..len).collect())
    }

    fn capability(&self) -> Capability {
        Capability::Indexable {
            len: self.borrow().len(),
        }
    }
}

impl<'src, T: Clone> Indexable for &'src RefCell<Vec<T>> {
    fn len(&self) -> usize {
        self.borrow().len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.borrow().get(index).cloned()
    }
}
