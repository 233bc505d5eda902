//! Eager utilities over sequences
//!
//! Unlike the views, everything here fully drains a fresh cursor and returns
//! a plain value. Each function is a thin, stateless wrapper; none of them
//! keeps any state between calls.

use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::sequence::{Capability, Sequence};
use std::fmt::Display;

/// Copy all elements into a newly allocated vector
///
/// Uses the sequence's capability tag to preallocate when the length is
/// known up front.
pub fn to_vec<S: Sequence>(sequence: &S) -> Result<Vec<S::Item>, SeqError> {
    let mut out = match sequence.capability() {
        Capability::Indexable { len } => Vec::with_capacity(len),
        Capability::AppendOnly | Capability::Opaque => Vec::new(),
    };
    extend_into(&mut out, sequence)?;
    Ok(out)
}

/// Drain a sequence into an existing vector
pub fn extend_into<S: Sequence>(
    out: &mut Vec<S::Item>,
    sequence: &S,
) -> Result<(), SeqError> {
    let mut cursor = sequence.cursor();
    while cursor.has_more()? {
        out.push(cursor.take()?);
    }
    Ok(())
}

/// Element-wise equality of two sequences
///
/// True exactly when both produce the same number of elements and every
/// pair of corresponding elements compares equal.
pub fn elements_equal<A, B>(a: &A, b: &B) -> Result<bool, SeqError>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: PartialEq,
{
    let mut left = a.cursor();
    let mut right = b.cursor();
    loop {
        match (left.has_more()?, right.has_more()?) {
            (true, true) => {
                if left.take()? != right.take()? {
                    return Ok(false);
                }
            }
            (false, false) => return Ok(true),
            _ => return Ok(false),
        }
    }
}

/// Number of elements equal to `value`
pub fn frequency<S>(sequence: &S, value: &S::Item) -> Result<usize, SeqError>
where
    S: Sequence,
    S::Item: PartialEq,
{
    let mut cursor = sequence.cursor();
    let mut count = 0;
    while cursor.has_more()? {
        if cursor.take()? == *value {
            count += 1;
        }
    }
    Ok(count)
}

/// The single element of a sequence
///
/// Fails with [`SeqError::NoMoreElements`] on an empty sequence and with
/// [`SeqError::IllegalState`] when there is more than one element.
pub fn only_element<S: Sequence>(sequence: &S) -> Result<S::Item, SeqError> {
    let mut cursor = sequence.cursor();
    if !cursor.has_more()? {
        return Err(SeqError::NoMoreElements);
    }
    let value = cursor.take()?;
    if cursor.has_more()? {
        return Err(SeqError::IllegalState("sequence holds more than one element"));
    }
    Ok(value)
}

/// The single element of a sequence, or `default` when it is empty
///
/// Still fails with [`SeqError::IllegalState`] when there is more than one
/// element: the default covers absence, not ambiguity.
pub fn only_element_or<S: Sequence>(
    sequence: &S,
    default: S::Item,
) -> Result<S::Item, SeqError> {
    match only_element(sequence) {
        Err(SeqError::NoMoreElements) => Ok(default),
        other => other,
    }
}

/// Join the elements into a string with the given separator
pub fn join<S>(sequence: &S, separator: &str) -> Result<String, SeqError>
where
    S: Sequence,
    S::Item: Display,
{
    let mut cursor = sequence.cursor();
    let mut out = String::new();
    let mut first = true;
    while cursor.has_more()? {
        if !first {
            out.push_str(separator);
        }
        first = false;
        out.push_str(&cursor.take()?.to_string());
    }
    Ok(out)
}

/// True if some element satisfies the predicate; false on an empty sequence
pub fn any<S, P>(sequence: &S, predicate: P) -> Result<bool, SeqError>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut cursor = sequence.cursor();
    while cursor.has_more()? {
        if predicate(&cursor.take()?) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// True if no element fails the predicate; true on an empty sequence
pub fn all<S, P>(sequence: &S, predicate: P) -> Result<bool, SeqError>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut cursor = sequence.cursor();
    while cursor.has_more()? {
        if !predicate(&cursor.take()?) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// The first element satisfying the predicate
///
/// Fails with [`SeqError::NoMoreElements`] when nothing matches.
pub fn find<S, P>(sequence: &S, predicate: P) -> Result<S::Item, SeqError>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut cursor = sequence.cursor();
    while cursor.has_more()? {
        let value = cursor.take()?;
        if predicate(&value) {
            return Ok(value);
        }
    }
    Err(SeqError::NoMoreElements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterExt;
    use crate::sources::empty;
    use crate::transform::TransformExt;

    #[test]
    fn test_to_vec_copies_in_order() {
        let data = [1, 2, 3];
        assert_eq!(to_vec(&&data[..]).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_to_vec_of_view() {
        let data = [1, 2, 3, 4];
        let view = (&data[..]).filter(|x| x % 2 == 1).transform(|x| x * 100);
        assert_eq!(to_vec(&view).unwrap(), vec![100, 300]);
    }

    #[test]
    fn test_extend_into_appends() {
        let data = [3, 4];
        let mut out = vec![1, 2];
        extend_into(&mut out, &&data[..]).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_elements_equal() {
        let a = [1, 2, 3];
        let b = vec![1, 2, 3];
        assert!(elements_equal(&&a[..], &&b).unwrap());

        let shorter = [1, 2];
        assert!(!elements_equal(&&a[..], &&shorter[..]).unwrap());
        assert!(!elements_equal(&&shorter[..], &&a[..]).unwrap());

        let different = [1, 2, 4];
        assert!(!elements_equal(&&a[..], &&different[..]).unwrap());
    }

    #[test]
    fn test_elements_equal_empty() {
        assert!(elements_equal(&empty::<i32>(), &empty::<i32>()).unwrap());
    }

    #[test]
    fn test_frequency() {
        let data = [1, 2, 1, 3, 1];
        assert_eq!(frequency(&&data[..], &1).unwrap(), 3);
        assert_eq!(frequency(&&data[..], &4).unwrap(), 0);
    }

    #[test]
    fn test_only_element() {
        let single = [7];
        assert_eq!(only_element(&&single[..]).unwrap(), 7);

        assert!(matches!(
            only_element(&empty::<i32>()),
            Err(SeqError::NoMoreElements)
        ));

        let pair = [1, 2];
        assert!(matches!(
            only_element(&&pair[..]),
            Err(SeqError::IllegalState(_))
        ));
    }

    #[test]
    fn test_only_element_or() {
        let single = [7];
        assert_eq!(only_element_or(&&single[..], 0).unwrap(), 7);
        assert_eq!(only_element_or(&empty::<i32>(), 0).unwrap(), 0);

        // the default does not paper over ambiguity
        let pair = [1, 2];
        assert!(matches!(
            only_element_or(&&pair[..], 0),
            Err(SeqError::IllegalState(_))
        ));
    }

    #[test]
    fn test_join() {
        let data = [1, 2, 3];
        assert_eq!(join(&&data[..], ", ").unwrap(), "1, 2, 3");
        assert_eq!(join(&empty::<i32>(), ", ").unwrap(), "");
    }

    #[test]
    fn test_any_and_all() {
        let data = [2, 4, 5];
        assert!(any(&&data[..], |x| x % 2 == 1).unwrap());
        assert!(!any(&&data[..], |x| *x > 10).unwrap());
        assert!(all(&&data[..], |x| *x > 1).unwrap());
        assert!(!all(&&data[..], |x| x % 2 == 0).unwrap());

        // vacuous truth on the empty sequence
        assert!(!any(&empty::<i32>(), |_| true).unwrap());
        assert!(all(&empty::<i32>(), |_| false).unwrap());
    }

    #[test]
    fn test_find() {
        let data = [1, 2, 3];
        assert_eq!(find(&&data[..], |x| x % 2 == 0).unwrap(), 2);
        assert!(matches!(
            find(&&data[..], |x| *x > 5),
            Err(SeqError::NoMoreElements)
        ));
    }
}
