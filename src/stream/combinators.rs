//! Elementwise combinators: map, filter, zip_with, zip, foldr, nth

use std::rc::Rc;

use crate::lazy::Lazy;
use crate::stream::core::Stream;

impl<T: Clone + 'static> Stream<T> {
    /// Transform every element with `f`.
    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        map_step(self.clone(), f)
    }

    /// Keep only the elements satisfying `pred`.
    ///
    /// The head of the result is the next satisfying element from the
    /// current position, found by an iterative scan. If no element ever
    /// satisfies `pred` again, the scan does not return; that is inherent
    /// to filtering an infinite stream, not a detected error.
    pub fn filter<P>(&self, pred: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter_step(self.clone(), pred)
    }

    /// Pair this stream with another positionally, combining with `f`.
    ///
    /// Both inputs are assumed infinite. If one side is backed by a thunk
    /// that cannot produce a next node, that failure surfaces when the
    /// corresponding tail of the zipped stream is forced, not earlier.
    pub fn zip_with<U, R, F>(&self, other: &Stream<U>, f: F) -> Stream<R>
    where
        U: Clone + 'static,
        R: 'static,
        F: Fn(T, U) -> R + 'static,
    {
        zip_step(self.clone(), other.clone(), f)
    }

    /// Pair this stream with another positionally into tuples.
    pub fn zip<U>(&self, other: &Stream<U>) -> Stream<(T, U)>
    where
        U: Clone + 'static,
    {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Right-fold with an explicitly deferred continuation.
    ///
    /// `f` receives each head together with an unforced handle on the fold
    /// of the rest, and decides per step whether to force it. Folding an
    /// infinite stream terminates only if `f` eventually leaves the
    /// continuation unforced, typically by stashing it inside a new lazy
    /// node instead of evaluating it on the spot.
    pub fn foldr<R, F>(&self, f: F) -> R
    where
        R: 'static,
        F: Fn(T, Lazy<R>) -> R + 'static,
    {
        foldr_step(self.clone(), Rc::new(f))
    }

    /// Clone of the element `i` positions ahead; forces `i` tails.
    pub fn nth(&self, i: usize) -> T {
        let mut s = self.clone();
        for _ in 0..i {
            s = s.tail();
        }
        s.head().clone()
    }
}

fn map_step<T, U, F>(s: Stream<T>, f: F) -> Stream<U>
where
    T: Clone + 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    let head = f(s.head().clone());
    Stream::cons(head, move || map_step(s.tail(), f))
}

fn filter_step<T, P>(mut s: Stream<T>, pred: P) -> Stream<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    while !pred(s.head()) {
        s = s.tail();
    }
    let head = s.head().clone();
    Stream::cons(head, move || filter_step(s.tail(), pred))
}

fn zip_step<T, U, R, F>(a: Stream<T>, b: Stream<U>, f: F) -> Stream<R>
where
    T: Clone + 'static,
    U: Clone + 'static,
    R: 'static,
    F: Fn(T, U) -> R + 'static,
{
    let head = f(a.head().clone(), b.head().clone());
    Stream::cons(head, move || zip_step(a.tail(), b.tail(), f))
}

fn foldr_step<T, R, F>(s: Stream<T>, f: Rc<F>) -> R
where
    T: Clone + 'static,
    R: 'static,
    F: Fn(T, Lazy<R>) -> R + 'static,
{
    let head = s.head().clone();
    let rest = {
        let f = Rc::clone(&f);
        Lazy::new(move || foldr_step(s.tail(), f))
    };
    (*f)(head, rest)
}
