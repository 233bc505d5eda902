use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::sequence::Indexable;

/// Cursor that visits an indexable source in a precomputed index order
///
/// Shared by the forward traversal of live containers and by the structural
/// rotate/reverse views: the order is fixed when the cursor is created, but
/// every element is fetched from the source at access time. If the source
/// shrinks below an index mid-traversal the cursor ends early; behavior of a
/// traversal concurrent with structural mutation is otherwise unspecified.
pub struct IndexCursor<S: Indexable> {
    source: S,
    order: std::vec::IntoIter<usize>,
    peeked: Option<S::Item>,
    done: bool,
}

impl<S: Indexable> IndexCursor<S> {
    pub fn new(source: S, order: Vec<usize>) -> Self {
        IndexCursor {
            source,
            order: order.into_iter(),
            peeked: None,
            done: false,
        }
    }
}

impl<S: Indexable> Cursor for IndexCursor<S> {
    type Item = S::Item;

    fn has_more(&mut self) -> Result<bool, SeqError> {
        if self.done {
            return Ok(false);
        }
        if self.peeked.is_some() {
            return Ok(true);
        }
        match self.order.next() {
            Some(index) => match self.source.get(index) {
                Some(value) => {
                    self.peeked = Some(value);
                    Ok(true)
                }
                None => {
                    // source shrank underneath us
                    self.done = true;
                    Ok(false)
                }
            },
            None => {
                self.done = true;
                Ok(false)
            }
        }
    }

    fn peek(&mut self) -> Result<&S::Item, SeqError> {
        if !self.has_more()? {
            return Err(SeqError::NoMoreElements);
        }
        self.peeked.as_ref().ok_or(SeqError::NoMoreElements)
    }

    fn take(&mut self) -> Result<S::Item, SeqError> {
        if !self.has_more()? {
            return Err(SeqError::NoMoreElements);
        }
        self.peeked.take().ok_or(SeqError::NoMoreElements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_order() {
        let data = [10, 20, 30];
        let mut cursor = IndexCursor::new(&data[..], vec![2, 0, 1]);

        assert_eq!(cursor.take().unwrap(), 30);
        assert_eq!(cursor.take().unwrap(), 10);
        assert_eq!(*cursor.peek().unwrap(), 20);
        assert_eq!(cursor.take().unwrap(), 20);
        assert!(!cursor.has_more().unwrap());
    }

    #[test]
    fn test_out_of_range_index_ends_traversal() {
        let data = [1, 2];
        let mut cursor = IndexCursor::new(&data[..], vec![0, 5, 1]);

        assert_eq!(cursor.take().unwrap(), 1);
        assert!(!cursor.has_more().unwrap());
        assert!(!cursor.has_more().unwrap());
        assert!(matches!(cursor.take(), Err(SeqError::NoMoreElements)));
    }

    #[test]
    fn test_empty_order() {
        let data = [1];
        let mut cursor = IndexCursor::new(&data[..], Vec::new());
        assert!(!cursor.has_more().unwrap());
    }
}
