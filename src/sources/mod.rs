pub mod cell;
pub mod empty;
pub mod index;
pub mod slice;

pub use cell::SharedVec;
pub use empty::{Empty, empty};
pub use index::IndexCursor;
pub use slice::SliceCursor;
