use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::lazy::{Lazy, lazy};
use crate::sequence::Sequence;
use crate::step::{Compute, Step};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// View that groups a source sequence into fixed-size sub-sequences
///
/// `{A, B, C, D, E}` with size 2 becomes `{A, B}, {C, D}, {E}` (or
/// `{E, None}` with `pad_to_size`). Boundaries are determined purely by
/// count. Sub-sequence elements are `Option<T>`: `Some` for real elements,
/// `None` only as the padding placeholder.
///
/// Optimized for a single forward pass: read each partition fully before
/// advancing the outer cursor. Advancing the outer cursor invalidates the
/// live (first) traversal of earlier partitions, exactly once per partition;
/// any later cursor request on a partition replays the source from the
/// beginning and discards up to the partition offset, so repeated random
/// revisits cost time proportional to their position.
#[derive(Clone)]
pub struct Partition<S> {
    source: S,
    size: usize,
    pad_to_size: bool,
}

impl<S> Partition<S> {
    pub fn new(source: S, size: usize, pad_to_size: bool) -> Self {
        Partition {
            source,
            size,
            pad_to_size,
        }
    }
}

/// One partition of a partitioned sequence
///
/// The first cursor request streams from the shared source traversal (cheap,
/// valid until the outer cursor advances); every later request replays by
/// recomputation.
pub struct PartitionHandle<S: Sequence> {
    source: S,
    cursor: Rc<RefCell<S::Cursor>>,
    budget: Rc<Cell<usize>>,
    index: usize,
    size: usize,
    pad_to_size: bool,
    live_available: Cell<bool>,
}

/// Outer computation: one partition handle per step
pub struct PartitionCompute<S: Sequence> {
    source: S,
    cursor: Rc<RefCell<S::Cursor>>,
    budget: Rc<Cell<usize>>,
    index: usize,
    size: usize,
    pad_to_size: bool,
}

impl<S> Compute for PartitionCompute<S>
where
    S: Sequence + Clone,
{
    type Item = PartitionHandle<S>;

    fn step(&mut self) -> Result<Step<PartitionHandle<S>>, SeqError> {
        if self.size == 0 {
            return Err(SeqError::IllegalState("partition size must be positive"));
        }
        {
            let mut cursor = self.cursor.borrow_mut();
            // skip whatever the caller left unconsumed in the current
            // partition, up to its boundary
            while self.budget.get() > 0 {
                if !cursor.has_more()? {
                    self.budget.set(0);
                    break;
                }
                cursor.take()?;
                self.budget.set(self.budget.get() - 1);
            }
            if !cursor.has_more()? {
                return Ok(Step::Exhausted);
            }
        }
        self.budget.set(self.size);
        let handle = PartitionHandle {
            source: self.source.clone(),
            cursor: Rc::clone(&self.cursor),
            budget: Rc::clone(&self.budget),
            index: self.index,
            size: self.size,
            pad_to_size: self.pad_to_size,
            live_available: Cell::new(true),
        };
        self.index += 1;
        Ok(Step::Produced(handle))
    }
}

/// Inner computation: up to `size` elements cut from a source traversal,
/// after discarding `skip` elements first
pub struct PartitionSliceCompute<C: Cursor> {
    cursor: Rc<RefCell<C>>,
    budget: Rc<Cell<usize>>,
    skip: usize,
    pad_to_size: bool,
}

impl<C: Cursor> Compute for PartitionSliceCompute<C> {
    type Item = Option<C::Item>;

    fn step(&mut self) -> Result<Step<Option<C::Item>>, SeqError> {
        let mut cursor = self.cursor.borrow_mut();
        while self.skip > 0 {
            if !cursor.has_more()? {
                self.skip = 0;
                self.budget.set(0);
                return Ok(Step::Exhausted);
            }
            cursor.take()?;
            self.skip -= 1;
        }
        if self.budget.get() == 0 {
            return Ok(Step::Exhausted);
        }
        if cursor.has_more()? {
            self.budget.set(self.budget.get() - 1);
            Ok(Step::Produced(Some(cursor.take()?)))
        } else if self.pad_to_size {
            self.budget.set(self.budget.get() - 1);
            Ok(Step::Produced(None))
        } else {
            self.budget.set(0);
            Ok(Step::Exhausted)
        }
    }
}

impl<S> Sequence for PartitionHandle<S>
where
    S: Sequence + Clone,
{
    type Item = Option<S::Item>;
    type Cursor = Lazy<PartitionSliceCompute<S::Cursor>>;

    fn cursor(&self) -> Self::Cursor {
        if self.live_available.replace(false) {
            lazy(PartitionSliceCompute {
                cursor: Rc::clone(&self.cursor),
                budget: Rc::clone(&self.budget),
                skip: 0,
                pad_to_size: self.pad_to_size,
            })
        } else {
            // replay: fresh traversal, discard up to this partition's offset
            lazy(PartitionSliceCompute {
                cursor: Rc::new(RefCell::new(self.source.cursor())),
                budget: Rc::new(Cell::new(self.size)),
                skip: self.index * self.size,
                pad_to_size: self.pad_to_size,
            })
        }
    }
}

impl<S> Sequence for Partition<S>
where
    S: Sequence + Clone,
{
    type Item = PartitionHandle<S>;
    type Cursor = Lazy<PartitionCompute<S>>;

    fn cursor(&self) -> Self::Cursor {
        lazy(PartitionCompute {
            source: self.source.clone(),
            cursor: Rc::new(RefCell::new(self.source.cursor())),
            budget: Rc::new(Cell::new(0)),
            index: 0,
            size: self.size,
            pad_to_size: self.pad_to_size,
        })
    }
}

/// Convenience function to create a partitioning view
pub fn partition<S>(source: S, size: usize, pad_to_size: bool) -> Partition<S>
where
    S: Sequence + Clone,
{
    Partition::new(source, size, pad_to_size)
}

/// Extension trait to add .partition() method support for sequences
pub trait PartitionExt: Sequence + Clone + Sized {
    fn partition(self, size: usize, pad_to_size: bool) -> Partition<Self> {
        Partition::new(self, size, pad_to_size)
    }
}

impl<S: Sequence + Clone> PartitionExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::to_vec;

    /// Drain every partition through its live pass
    fn collect_partitions<S>(view: &Partition<S>) -> Vec<Vec<Option<S::Item>>>
    where
        S: Sequence + Clone,
    {
        let mut outer = view.cursor();
        let mut partitions = Vec::new();
        while Cursor::has_more(&mut outer).unwrap() {
            let handle = Cursor::take(&mut outer).unwrap();
            partitions.push(to_vec(&handle).unwrap());
        }
        partitions
    }

    #[test]
    fn test_even_split() {
        let data = [1, 2, 3, 4, 5, 6];
        let view = (&data[..]).partition(3, false);

        assert_eq!(
            collect_partitions(&view),
            vec![
                vec![Some(1), Some(2), Some(3)],
                vec![Some(4), Some(5), Some(6)],
            ]
        );
    }

    #[test]
    fn test_short_final_partition() {
        let data = [1, 2, 3, 4, 5, 6, 7];
        let view = (&data[..]).partition(3, false);

        let partitions = collect_partitions(&view);
        assert_eq!(partitions.len(), 3);
        assert_eq!(partitions[2], vec![Some(7)]);
    }

    #[test]
    fn test_padding_fills_final_partition() {
        let data = [1, 2, 3, 4, 5, 6, 7];
        let view = (&data[..]).partition(3, true);

        let partitions = collect_partitions(&view);
        assert_eq!(partitions.len(), 3);
        assert_eq!(partitions[2], vec![Some(7), None, None]);
        // every partition has exactly the requested size
        assert!(partitions.iter().all(|p| p.len() == 3));
    }

    #[test]
    fn test_no_padding_on_exact_multiple() {
        let data = [1, 2, 3, 4];
        let view = partition(&data[..], 2, true);

        assert_eq!(
            collect_partitions(&view),
            vec![vec![Some(1), Some(2)], vec![Some(3), Some(4)]]
        );
    }

    #[test]
    fn test_empty_source_has_no_partitions() {
        let data: [i32; 0] = [];
        let view = (&data[..]).partition(3, true);

        let mut outer = view.cursor();
        assert!(!Cursor::has_more(&mut outer).unwrap());
    }

    #[test]
    fn test_partition_count_law() {
        // ceil(N / S) partitions for every N
        for n in 0..10usize {
            let data: Vec<usize> = (0..n).collect();
            let view = (&data).partition(4, false);
            assert_eq!(collect_partitions(&view).len(), n.div_ceil(4));
        }
    }

    #[test]
    fn test_real_elements_reconstruct_source() {
        let data = [1, 2, 3, 4, 5];
        for pad in [false, true] {
            let view = (&data[..]).partition(2, pad);
            let reconstructed: Vec<i32> = collect_partitions(&view)
                .into_iter()
                .flatten()
                .flatten()
                .collect();
            assert_eq!(reconstructed, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_revisit_replays_by_recomputation() {
        let data = [1, 2, 3, 4, 5];
        let view = (&data[..]).partition(2, false);

        let mut outer = view.cursor();
        let first = Cursor::take(&mut outer).unwrap();

        // live pass, then a replayed pass over the same partition
        assert_eq!(to_vec(&first).unwrap(), vec![Some(1), Some(2)]);
        assert_eq!(to_vec(&first).unwrap(), vec![Some(1), Some(2)]);

        // the outer traversal continues where the live pass stopped
        let second = Cursor::take(&mut outer).unwrap();
        assert_eq!(to_vec(&second).unwrap(), vec![Some(3), Some(4)]);
    }

    #[test]
    fn test_replay_of_late_partition_skips_offset() {
        let data = [1, 2, 3, 4, 5, 6, 7];
        let view = (&data[..]).partition(3, false);

        let mut outer = view.cursor();
        let _first = Cursor::take(&mut outer).unwrap();
        let second = Cursor::take(&mut outer).unwrap();

        // burn the live pass, then replay
        assert_eq!(to_vec(&second).unwrap(), vec![Some(4), Some(5), Some(6)]);
        assert_eq!(to_vec(&second).unwrap(), vec![Some(4), Some(5), Some(6)]);
    }

    #[test]
    fn test_replay_of_padded_final_partition() {
        let data = [1, 2, 3];
        let view = (&data[..]).partition(2, true);

        let mut outer = view.cursor();
        let _first = Cursor::take(&mut outer).unwrap();
        let last = Cursor::take(&mut outer).unwrap();

        assert_eq!(to_vec(&last).unwrap(), vec![Some(3), None]);
        assert_eq!(to_vec(&last).unwrap(), vec![Some(3), None]);
    }

    #[test]
    fn test_outer_advance_skips_unconsumed_remainder() {
        let data = [1, 2, 3, 4, 5, 6];
        let view = (&data[..]).partition(3, false);

        let mut outer = view.cursor();
        let first = Cursor::take(&mut outer).unwrap();
        let mut live = first.cursor();
        assert_eq!(Cursor::take(&mut live).unwrap(), Some(1));

        // advancing the outer cursor discards 2 and 3
        let second = Cursor::take(&mut outer).unwrap();
        assert_eq!(to_vec(&second).unwrap(), vec![Some(4), Some(5), Some(6)]);
        assert!(!Cursor::has_more(&mut outer).unwrap());
    }

    #[test]
    fn test_zero_partition_size_fails() {
        let data = [1, 2];
        let view = (&data[..]).partition(0, false);

        let mut outer = view.cursor();
        assert!(matches!(
            Cursor::has_more(&mut outer),
            Err(SeqError::IllegalState("partition size must be positive"))
        ));
    }
}
