use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::lazy::{Lazy, lazy};
use crate::sequence::Sequence;
use crate::step::{Compute, Step};

/// View that keeps only the elements matching a predicate
///
/// Relative order is preserved. The cursor is a lazy computation that pulls
/// from the source until the predicate matches or the source runs out, so a
/// single look-ahead may advance the source past any number of rejects.
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Filter { source, predicate }
    }
}

/// The per-cursor computation: loop until the predicate holds
pub struct FilterCompute<C, P> {
    source: C,
    predicate: P,
}

impl<C, P> Compute for FilterCompute<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn step(&mut self) -> Result<Step<C::Item>, SeqError> {
        loop {
            if !self.source.has_more()? {
                return Ok(Step::Exhausted);
            }
            let value = self.source.take()?;
            if (self.predicate)(&value) {
                return Ok(Step::Produced(value));
            }
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = Lazy<FilterCompute<S::Cursor, P>>;

    fn cursor(&self) -> Self::Cursor {
        lazy(FilterCompute {
            source: self.source.cursor(),
            predicate: self.predicate.clone(),
        })
    }
}

/// Convenience function to create a filtered view
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    Filter::new(source, predicate)
}

/// Extension trait to add .filter() method support for sequences
pub trait FilterExt: Sequence + Sized {
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        Filter::new(self, predicate)
    }
}

impl<S: Sequence> FilterExt for S {}
