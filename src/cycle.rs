use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::lazy::{Lazy, lazy};
use crate::sequence::Sequence;
use crate::step::{Compute, Step};

/// View that repeats its source forever
///
/// Every time the source is exhausted a fresh cursor is requested from it,
/// so a source backed by mutable storage is re-read on each pass. An empty
/// source terminates the cycle immediately: a refill pass that yields
/// nothing ends the view instead of spinning on zero elements.
#[derive(Clone)]
pub struct Cycle<S> {
    source: S,
}

impl<S> Cycle<S> {
    pub fn new(source: S) -> Self {
        Cycle { source }
    }
}

/// The per-cursor computation: pull from the current pass, refill on
/// exhaustion, stop after an empty pass
pub struct CycleCompute<S: Sequence> {
    source: S,
    current: S::Cursor,
    produced_this_pass: bool,
}

impl<S> Compute for CycleCompute<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn step(&mut self) -> Result<Step<S::Item>, SeqError> {
        loop {
            if self.current.has_more()? {
                self.produced_this_pass = true;
                return Ok(Step::Produced(self.current.take()?));
            }
            if !self.produced_this_pass {
                return Ok(Step::Exhausted);
            }
            self.current = self.source.cursor();
            self.produced_this_pass = false;
        }
    }
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence + Clone,
{
    type Item = S::Item;
    type Cursor = Lazy<CycleCompute<S>>;

    fn cursor(&self) -> Self::Cursor {
        lazy(CycleCompute {
            current: self.source.cursor(),
            source: self.source.clone(),
            produced_this_pass: false,
        })
    }
}

/// Convenience function to create a cycling view
pub fn cycle<S>(source: S) -> Cycle<S>
where
    S: Sequence + Clone,
{
    Cycle::new(source)
}

/// Extension trait to add .cycle() method support for sequences
pub trait CycleExt: Sequence + Clone + Sized {
    fn cycle(self) -> Cycle<Self> {
        Cycle::new(self)
    }
}

impl<S: Sequence + Clone> CycleExt for S {}
