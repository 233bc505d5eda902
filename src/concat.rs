use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::lazy::{Lazy, lazy};
use crate::sequence::Sequence;
use crate::step::{Compute, Step};

/// View that flattens a sequence of sequences into one
///
/// Each inner sequence is consumed fully before the next outer element is
/// requested. If the outer sequence or any inner sequence is infinite the
/// traversal simply never terminates; that is accepted behavior, not an
/// error.
#[derive(Clone)]
pub struct Concat<S> {
    sequences: S,
}

impl<S> Concat<S> {
    pub fn new(sequences: S) -> Self {
        Concat { sequences }
    }
}

/// The per-cursor computation: drain the current inner cursor, then advance
/// the outer one
pub struct ConcatCompute<S: Sequence>
where
    S::Item: Sequence,
{
    outer: S::Cursor,
    inner: Option<<S::Item as Sequence>::Cursor>,
}

impl<S> Compute for ConcatCompute<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;

    fn step(&mut self) -> Result<Step<Self::Item>, SeqError> {
        loop {
            if let Some(inner) = &mut self.inner {
                if inner.has_more()? {
                    return Ok(Step::Produced(inner.take()?));
                }
                self.inner = None;
            }
            if !self.outer.has_more()? {
                return Ok(Step::Exhausted);
            }
            self.inner = Some(self.outer.take()?.cursor());
        }
    }
}

impl<S> Sequence for Concat<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;
    type Cursor = Lazy<ConcatCompute<S>>;

    fn cursor(&self) -> Self::Cursor {
        lazy(ConcatCompute {
            outer: self.sequences.cursor(),
            inner: None,
        })
    }
}

/// Convenience function to create a flattening view
pub fn concat<S>(sequences: S) -> Concat<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    Concat::new(sequences)
}

/// Extension trait to add .concatenated() method support for sequences of
/// sequences
///
/// The method is not named `concat`: on a slice-of-slices receiver that name
/// would resolve to the inherent eager `[T]::concat` from std instead of this
/// trait, silently materializing the result.
pub trait ConcatExt: Sequence + Sized
where
    Self::Item: Sequence,
{
    fn concatenated(self) -> Concat<Self> {
        Concat::new(self)
    }
}

impl<S: Sequence> ConcatExt for S where S::Item: Sequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::to_vec;

    #[test]
    fn test_flattens_in_order() {
        let inners: [&[i32]; 3] = [&[1, 2], &[3], &[4, 5, 6]];
        let view = concat(&inners[..]);

        assert_eq!(to_vec(&view).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_skips_empty_inner_sequences() {
        let inners: [&[i32]; 4] = [&[], &[1], &[], &[2]];
        let view = (&inners[..]).concatenated();

        assert_eq!(to_vec(&view).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_method_syntax_on_slices_stays_lazy() {
        // a slice-of-slices receiver also has the eager std `[T]::concat`;
        // our method name must not collide with it
        let inners: [&[i32]; 2] = [&[1, 2], &[3]];
        let view = (&inners[..]).concatenated();

        let mut cursor = view.cursor();
        assert_eq!(*cursor.peek().unwrap(), 1);
        assert_eq!(to_vec(&view).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_all_empty() {
        let inners: [&[i32]; 2] = [&[], &[]];
        let view = concat(&inners[..]);

        let cursor = view.cursor();
        assert!(!cursor.has_more().unwrap());
        assert!(matches!(cursor.take(), Err(SeqError::NoMoreElements)));
    }

    #[test]
    fn test_empty_outer() {
        let inners: [&[i32]; 0] = [];
        let view = concat(&inners[..]);

        assert_eq!(to_vec(&view).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_peek_across_boundary() {
        let inners: [&[i32]; 2] = [&[1], &[2]];
        let view = concat(&inners[..]);

        let mut cursor = view.cursor();
        assert_eq!(cursor.take().unwrap(), 1);
        assert_eq!(*cursor.peek().unwrap(), 2);
        assert_eq!(cursor.take().unwrap(), 2);
        assert!(!cursor.has_more().unwrap());
    }

    #[test]
    fn test_retraversal() {
        let inners: [&[i32]; 2] = [&[1], &[2, 3]];
        let view = concat(&inners[..]);

        assert_eq!(to_vec(&view).unwrap(), vec![1, 2, 3]);
        assert_eq!(to_vec(&view).unwrap(), vec![1, 2, 3]);
    }
}
