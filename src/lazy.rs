//! Deferred, memoizing computation cells.
//!
//! [`Lazy`] is the exactly-once evaluation primitive the rest of the crate
//! rests on: a zero-argument computation that runs the first time it is
//! forced and caches its result for every later observer, across any number
//! of shared handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;

type Thunk<T> = Box<dyn FnOnce() -> T>;

struct LazyCell<T> {
    value: OnceCell<T>,
    thunk: RefCell<Option<Thunk<T>>>,
}

/// A shared, memoizing thunk.
///
/// Cloning a `Lazy` clones a handle to the same cell, so all clones observe
/// the same single evaluation. Forcing is idempotent after the first call.
pub struct Lazy<T> {
    cell: Rc<LazyCell<T>>,
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Lazy {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T> Lazy<T> {
    /// Wrap a computation without running it.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Lazy {
            cell: Rc::new(LazyCell {
                value: OnceCell::new(),
                thunk: RefCell::new(Some(Box::new(f))),
            }),
        }
    }

    /// A cell that already holds its value; forcing it runs nothing.
    pub fn ready(value: T) -> Self {
        let cell = LazyCell {
            value: OnceCell::new(),
            thunk: RefCell::new(None),
        };
        let _ = cell.value.set(value);
        Lazy {
            cell: Rc::new(cell),
        }
    }

    /// Run the computation if it has not run yet and return the cached result.
    ///
    /// The closure is taken out of its slot before it executes, so if it
    /// panics, every later force of this handle panics deterministically
    /// instead of re-running user code. Re-entrant forcing from inside the
    /// computation itself is not supported and also panics.
    pub fn force(&self) -> &T {
        self.cell.value.get_or_init(|| {
            let thunk = self
                .cell
                .thunk
                .borrow_mut()
                .take()
                .expect("deferred computation unavailable: it already failed or was forced re-entrantly");
            thunk()
        })
    }

    /// Whether the computation has already run to completion.
    pub fn is_forced(&self) -> bool {
        self.cell.value.get().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.value.get() {
            Some(v) => f.debug_tuple("Lazy").field(v).finish(),
            None => f.write_str("Lazy(<unforced>)"),
        }
    }
}
