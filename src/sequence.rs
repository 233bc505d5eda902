use crate::cursor::Cursor;

/// Broad classification of how a sequence stores its elements
///
/// Used by eager utilities to pick a cheap conversion path deterministically
/// instead of probing the concrete type at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Fully materialized with known length and random access
    Indexable { len: usize },
    /// Growable container without cheap random access
    AppendOnly,
    /// Anything else: computed views, unknown length
    Opaque,
}

/// Core sequence trait: a producer of fresh, independent traversal cursors
///
/// Obtaining a cursor is side-effect-free and may be done repeatedly; the
/// cursors do not interfere with each other. Views implement this trait as
/// immutable descriptors, so composing views does zero work until a cursor
/// is requested.
pub trait Sequence {
    /// The type of elements produced by this sequence
    type Item;

    /// The cursor type handed out for traversals
    type Cursor: Cursor<Item = Self::Item>;

    /// Begin a fresh traversal
    fn cursor(&self) -> Self::Cursor;

    /// Report how this sequence stores its elements
    fn capability(&self) -> Capability {
        Capability::Opaque
    }
}

/// Sequences with a known length and index-based access
///
/// This is the capability required by the structural rotate/reverse views:
/// they read `len` at every cursor request and fetch elements by index, which
/// is what makes them live views rather than snapshots.
pub trait Indexable: Sequence {
    /// Current number of elements
    fn len(&self) -> usize;

    /// True when `len() == 0`
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the element at `index`, if it is in bounds right now
    fn get(&self, index: usize) -> Option<Self::Item>;
}
