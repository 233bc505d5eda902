use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::lazy::{Lazy, lazy};
use crate::sequence::Sequence;
use crate::step::{Compute, Step};

/// View that applies a mapping function to each element of a source sequence
///
/// Constructing the view does zero work; the mapper runs one element at a
/// time as the cursor is driven.
#[derive(Clone)]
pub struct Transform<S, F> {
    source: S,
    mapper: F,
}

impl<S, F> Transform<S, F> {
    pub fn new(source: S, mapper: F) -> Self {
        Transform { source, mapper }
    }
}

/// The per-cursor computation: pull one element, map it
pub struct TransformCompute<C, F> {
    source: C,
    mapper: F,
}

impl<C, F, U> Compute for TransformCompute<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn step(&mut self) -> Result<Step<U>, SeqError> {
        if !self.source.has_more()? {
            return Ok(Step::Exhausted);
        }
        Ok(Step::Produced((self.mapper)(self.source.take()?)))
    }
}

impl<S, F, U> Sequence for Transform<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U + Clone,
{
    type Item = U;
    type Cursor = Lazy<TransformCompute<S::Cursor, F>>;

    fn cursor(&self) -> Self::Cursor {
        lazy(TransformCompute {
            source: self.source.cursor(),
            mapper: self.mapper.clone(),
        })
    }
}

/// Convenience function to create a transforming view
pub fn transform<S, F, U>(source: S, mapper: F) -> Transform<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U + Clone,
{
    Transform::new(source, mapper)
}

/// Extension trait to add .transform() method support for sequences
pub trait TransformExt: Sequence + Sized {
    fn transform<F, U>(self, mapper: F) -> Transform<Self, F>
    where
        F: Fn(Self::Item) -> U + Clone,
    {
        Transform::new(self, mapper)
    }
}

impl<S: Sequence> TransformExt for S {}
