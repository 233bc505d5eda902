use crate::sequence::{Capability, Indexable, Sequence};
use crate::sources::index::IndexCursor;

/// Live circular-shift view over an indexable sequence
///
/// Equivalent to rotating the source `distance` places toward the front:
/// the traversal order is `source[actual..]` followed by `source[..actual]`
/// where `actual = distance mod len`. The distance is unconstrained; zero,
/// negative and larger-than-length values are all normalized.
///
/// This is a structural view, not a lazy computation: only the source and
/// the distance are stored. Every cursor request re-reads the current length
/// and recomputes the shift, so the view is live with respect to structural
/// changes made between traversals. Behavior if the source mutates during an
/// in-progress traversal is unspecified.
#[derive(Clone)]
pub struct Rotate<S> {
    source: S,
    distance: isize,
}

impl<S> Rotate<S> {
    pub fn new(source: S, distance: isize) -> Self {
        Rotate { source, distance }
    }
}

impl<S> Sequence for Rotate<S>
where
    S: Indexable + Clone,
{
    type Item = S::Item;
    type Cursor = IndexCursor<S>;

    fn cursor(&self) -> IndexCursor<S> {
        let len = self.source.len();
        let order: Vec<usize> = if len <= 1 {
            (0..len).collect()
        } else {
            let actual = self.distance.rem_euclid(len as isize) as usize;
            (actual..len).chain(0..actual).collect()
        };
        IndexCursor::new(self.source.clone(), order)
    }

    fn capability(&self) -> Capability {
        Capability::Indexable {
            len: self.source.len(),
        }
    }
}

/// A rotated view of an indexable source is itself indexable
impl<S> Indexable for Rotate<S>
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
        if len <= 1 {
            return self.source.get(index);
        }
        let actual = self.distance.rem_euclid(len as isize) as usize;
        self.source.get((index + actual) % len)
    }
}

/// Convenience function to create a rotated view
pub fn rotate<S>(source: S, distance: isize) -> Rotate<S>
where
    S: Indexable + Clone,
{
    Rotate::new(source, distance)
}

/// Extension trait to add .rotate() method support for indexable sequences
pub trait RotateExt: Indexable + Clone + Sized {
    fn rotate(self, distance: isize) -> Rotate<Self> {
        Rotate::new(self, distance)
    }
}

impl<S: Indexable + Clone> RotateExt for S {}
