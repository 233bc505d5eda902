//! # LazySeq - Lazy Sequence Library
//!
//! A lazy-sequence library built around a small state machine: define a
//! sequence by supplying only "compute the next element or signal
//! exhaustion", and compose views over it without materializing anything.
//!
//! The library emphasizes:
//!
//! - **Zero panics**: every traversal error is handled through `Result`
//! - **Strict laziness**: views are immutable descriptors; all work happens
//!   one element at a time while a cursor is driven
//! - **Composability**: transform, filter, concatenate, cycle, partition,
//!   rotate and reverse combine freely into larger views
//! - **Strict failure propagation**: failures raised inside user-supplied
//!   computations surface verbatim at the call that triggered them
//!
//! Everything is single-threaded and synchronous: laziness means deferred
//! computation, not asynchronous execution.

pub mod concat;
pub mod cursor;
pub mod cycle;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod of_type;
pub mod ops;
pub mod partition;
pub mod reverse;
pub mod rotate;
pub mod sequence;
pub mod sources;
pub mod step;
pub mod transform;

pub use concat::{Concat, ConcatExt, concat};
pub use cursor::Cursor;
pub use cycle::{Cycle, CycleExt, cycle};
pub use error::SeqError;
pub use filter::{Filter, FilterExt, filter};
pub use lazy::{Lazy, lazy};
pub use of_type::{OfType, OfTypeExt, of_type};
pub use ops::{
    all, any, elements_equal, extend_into, find, frequency, join, only_element,
    only_element_or, to_vec,
};
pub use partition::{Partition, PartitionExt, PartitionHandle, partition};
pub use reverse::{Reverse, ReverseExt, reverse};
pub use rotate::{Rotate, RotateExt, rotate};
pub use sequence::{Capability, Indexable, Sequence};
pub use sources::{Empty, IndexCursor, SharedVec, SliceCursor, empty};
pub use step::{Compute, Step};
pub use transform::{Transform, TransformExt, transform};
