use crate::cursor::Cursor;
use crate::error::SeqError;
use crate::step::{Compute, Step};
use std::cell::{Cell, RefCell};

/// Engine state: exactly one of these holds at any time
enum State<T> {
    /// No value buffered since the last consumption; the next look-ahead
    /// must invoke the computation
    NotReady,
    /// A value has been computed and buffered
    Ready(T),
    /// The computation signaled exhaustion; terminal
    Done,
    /// The computation failed; terminal, the failure already propagated once
    Failed,
}

/// Lazy sequence engine: a cursor driven by a user-supplied computation
///
/// Wraps a [`Compute`] and turns it into a full [`Cursor`], handling
/// look-ahead buffering, idempotent exhaustion, single-element peek and
/// strict failure propagation:
///
/// - the computation is invoked at most once per element, and never again
///   after signaling exhaustion or failing;
/// - a failure propagates verbatim exactly once; later calls answer
///   [`SeqError::IllegalState`] instead of retrying;
/// - a computation that re-enters its own engine (through a shared handle)
///   fails fast with `IllegalState("reentrant computation")` instead of
///   recursing or corrupting state.
///
/// The resolving methods take `&self`: state lives in cells so that the
/// reentrancy guard is reachable from inside an in-flight `step` call.
pub struct Lazy<C: Compute> {
    compute: RefCell<C>,
    state: RefCell<State<C::Item>>,
    resolving: Cell<bool>,
}

impl<C: Compute> Lazy<C> {
    /// Create an engine bound to the given computation
    pub fn new(compute: C) -> Self {
        Lazy {
            compute: RefCell::new(compute),
            state: RefCell::new(State::NotReady),
            resolving: Cell::new(false),
        }
    }

    /// Check whether another element is available, computing it if needed
    pub fn has_more(&self) -> Result<bool, SeqError> {
        {
            let state = self.state.borrow();
            match &*state {
                State::Ready(_) => return Ok(true),
                State::Done => return Ok(false),
                State::Failed => {
                    return Err(SeqError::IllegalState("computation failed previously"));
                }
                State::NotReady => {}
            }
        }
        if self.resolving.get() {
            return Err(SeqError::IllegalState("reentrant computation"));
        }
        self.resolving.set(true);
        let step = self.compute.borrow_mut().step();
        // The flag must clear on every exit path, success or failure,
        // otherwise one failed step would lock the engine out forever.
        self.resolving.set(false);
        match step {
            Ok(Step::Produced(value)) => {
                *self.state.borrow_mut() = State::Ready(value);
                Ok(true)
            }
            Ok(Step::Exhausted) => {
                *self.state.borrow_mut() = State::Done;
                Ok(false)
            }
            Err(error) => {
                *self.state.borrow_mut() = State::Failed;
                Err(error)
            }
        }
    }

    /// Consume and return the buffered element
    pub fn take(&self) -> Result<C::Item, SeqError> {
        if !self.has_more()? {
            return Err(SeqError::NoMoreElements);
        }
        match std::mem::replace(&mut *self.state.borrow_mut(), State::NotReady) {
            State::Ready(value) => Ok(value),
            _ => Err(SeqError::NoMoreElements),
        }
    }
}

impl<C: Compute> Cursor for Lazy<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> Result<bool, SeqError> {
        Lazy::has_more(self)
    }

    fn peek(&mut self) -> Result<&C::Item, SeqError> {
        if !Lazy::has_more(self)? {
            return Err(SeqError::NoMoreElements);
        }
        match &*self.state.get_mut() {
            State::Ready(value) => Ok(value),
            _ => Err(SeqError::NoMoreElements),
        }
    }

    fn take(&mut self) -> Result<C::Item, SeqError> {
        Lazy::take(self)
    }
}

/// Convenience constructor for a lazy engine
pub fn lazy<C: Compute>(compute: C) -> Lazy<C> {
    Lazy::new(compute)
}
