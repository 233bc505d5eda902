use crate::sequence::{Capability, Indexable, Sequence};
use crate::sources::index::IndexCursor;

/// Live backward view over an indexable sequence
///
/// Requires index access rather than going through the lazy machinery: the
/// view stores only the source, reads its current length at every cursor
/// request and walks the indices in descending order. No element is copied
/// at construction time.
#[derive(Clone)]
pub struct Reverse<S> {
    source: S,
}

impl<S> Reverse<S> {
    pub fn new(source: S) -> Self {
        Reverse { source }
    }
}

impl<S> Sequence for Reverse<S>
where
    S: Indexable + Clone,
{
    type Item = S::Item;
    type Cursor = IndexCursor<S>;

    fn cursor(&self) -> IndexCursor<S> {
        let len = self.source.len();
        IndexCursor::new(self.source.clone(), (0..len).rev().collect())
    }

    fn capability(&self) -> Capability {
        Capability::Indexable {
            len: self.source.len(),
        }
    }
}

/// A reversed view of an indexable source is itself indexable
impl<S> Indexable for Reverse<S>
where
    S: Indexable + Clone,
{
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        let len = self.source.len();
        if index >= len {
            return None;
        }
        self.source.get(len - 1 - index)
    }
}

/// Convenience function to create a reversed view
pub fn reverse<S>(source: S) -> Reverse<S>
where
    S: Indexable + Clone,
{
    Reverse::new(source)
}

/// Extension trait to add .reverse() method support for indexable sequences
pub trait ReverseExt: Indexable + Clone + Sized {
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }
}

impl<S: Indexable + Clone> ReverseExt for S {}
