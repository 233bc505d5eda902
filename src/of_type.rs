use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::lazy::{Lazy, lazy};
use crate::sequence::Sequence;
use crate::step::{Compute, Step};
use std::any::Any;
use std::marker::PhantomData;
use std::rc::Rc;

/// View that keeps only the elements of a given runtime type
///
/// The capability-keyed sibling of [`Filter`](crate::filter::Filter): the
/// source yields type-erased `Rc<dyn Any>` elements and the view passes
/// through exactly those that downcast to `T`, in order.
pub struct OfType<S, T> {
    source: S,
    _target: PhantomData<T>,
}

impl<S: Clone, T> Clone for OfType<S, T> {
    fn clone(&self) -> Self {
        OfType {
            source: self.source.clone(),
            _target: PhantomData,
        }
    }
}

impl<S, T> OfType<S, T> {
    pub fn new(source: S) -> Self {
        OfType {
            source,
            _target: PhantomData,
        }
    }
}

/// The per-cursor computation: loop until an element downcasts
pub struct OfTypeCompute<C, T> {
    source: C,
    _target: PhantomData<T>,
}

impl<C, T> Compute for OfTypeCompute<C, T>
where
    C: Cursor<Item = Rc<dyn Any>>,
    T: Any,
{
    type Item = Rc<T>;

    fn step(&mut self) -> Result<Step<Rc<T>>, SeqError> {
        loop {
            if !self.source.has_more()? {
                return Ok(Step::Exhausted);
            }
            if let Ok(value) = self.source.take()?.downcast::<T>() {
                return Ok(Step::Produced(value));
            }
        }
    }
}

impl<S, T> Sequence for OfType<S, T>
where
    S: Sequence<Item = Rc<dyn Any>>,
    T: Any,
{
    type Item = Rc<T>;
    type Cursor = Lazy<OfTypeCompute<S::Cursor, T>>;

    fn cursor(&self) -> Self::Cursor {
        lazy(OfTypeCompute {
            source: self.source.cursor(),
            _target: PhantomData,
        })
    }
}

/// Convenience function to create a runtime-type filtered view
pub fn of_type<S, T>(source: S) -> OfType<S, T>
where
    S: Sequence<Item = Rc<dyn Any>>,
    T: Any,
{
    OfType::new(source)
}

/// Extension trait to add .of_type() method support for type-erased sequences
pub trait OfTypeExt: Sequence<Item = Rc<dyn Any>> + Sized {
    fn of_type<T: Any>(self) -> OfType<Self, T> {
        OfType::new(self)
    }
}

impl<S: Sequence<Item = Rc<dyn Any>>> OfTypeExt for S {}
