//! Stream generators: unfold, repeat, iterate, from, from_then, cycle, fib, primes
//!
//! Every generator is productive: the head of the returned stream is
//! available immediately, and nothing past it runs until its tail is forced.

use std::rc::Rc;

use crate::error::{StreamError, StreamResult};
use crate::stream::core::Stream;

// ================================
// Corecursive Base
// ================================

/// Generate an infinite stream from a seed and a step function.
///
/// `step` turns the current seed into the element to emit plus the seed for
/// the rest; it runs once per node, when that node is constructed.
pub fn unfold<T, S, F>(seed: S, step: F) -> Stream<T>
where
    T: 'static,
    S: 'static,
    F: Fn(S) -> (T, S) + 'static,
{
    let (head, next) = step(seed);
    Stream::cons(head, move || unfold(next, step))
}

// ================================
// Basic Generators
// ================================

/// An infinite stream of the same value.
pub fn repeat<T>(value: T) -> Stream<T>
where
    T: Clone + 'static,
{
    Stream::cons(value.clone(), move || repeat(value))
}

/// The infinite stream `seed, f(seed), f(f(seed)), ...`.
///
/// `f` runs only inside the deferred tail: observing the k-th head applies
/// it exactly k times, never ahead of demand.
pub fn iterate<T, F>(f: F, seed: T) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    Stream::cons(seed.clone(), move || {
        let next = f(seed);
        iterate(f, next)
    })
}

/// Counting integers starting at `n`.
pub fn from(n: i64) -> Stream<i64> {
    from_then(n, 1)
}

/// The arithmetic progression starting at `n` with the given step.
///
/// The step may be zero or negative; no validation is imposed here.
pub fn from_then(n: i64, step: i64) -> Stream<i64> {
    iterate(move |x| x + step, n)
}

// ================================
// Cycling
// ================================

/// Repeat a finite, non-empty sequence forever.
///
/// The input is collected once up front and that snapshot is the restart
/// point for every wraparound, so independent `cycle` calls can never bleed
/// into each other. An empty input has no defined first head and is
/// rejected.
pub fn cycle<T, I>(seq: I) -> StreamResult<Stream<T>>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
{
    let ring: Rc<[T]> = seq.into_iter().collect();
    if ring.is_empty() {
        log::warn!("cycle called with an empty sequence");
        return Err(StreamError::EmptyCycle);
    }
    log::trace!("cycling a sequence of {} elements", ring.len());
    Ok(cycle_at(ring, 0))
}

fn cycle_at<T>(ring: Rc<[T]>, i: usize) -> Stream<T>
where
    T: Clone + 'static,
{
    Stream::cons(ring[i].clone(), move || {
        let next = if i + 1 == ring.len() { 0 } else { i + 1 };
        cycle_at(ring, next)
    })
}

// ================================
// Number-theoretic Generators
// ================================

/// The Fibonacci sequence `0, 1, 1, 2, 3, ...`.
///
/// Successive terms are paired up and advanced additively. `u128` keeps the
/// sequence exact well past term 93 (12_200_160_415_121_876_738), where a
/// 64-bit representation would start to wrap.
pub fn fib() -> Stream<u128> {
    unfold((0u128, 1u128), |(a, b)| (a, (b, a + b)))
}

/// The primes in ascending order, produced by an incremental sieve.
///
/// Candidates are drawn from `2, 3, 4, ...`; each emitted prime installs a
/// divisibility filter over everything behind it, so no upper bound is ever
/// needed.
pub fn primes() -> Stream<u64> {
    log::trace!("seeding prime sieve at 2");
    sieve(iterate(|x| x + 1, 2))
}

fn sieve(s: Stream<u64>) -> Stream<u64> {
    let p = *s.head();
    Stream::cons(p, move || sieve(s.tail().filter(move |&x| x % p != 0)))
}
