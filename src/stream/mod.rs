//! Lazy, infinite, memoizing streams and their operations.
//!
//! A [`Stream`] is a cons cell: a concrete head plus a deferred, memoized
//! tail. Generators build streams from seeds, combinators derive streams
//! from other streams, and `take`/`skip` bridge a finite prefix back into
//! eager data.

pub mod core;
pub mod constructors;
pub mod combinators;
pub mod materializers;

// Re-export core types
pub use self::core::{Iter, Stream};

// Re-export generators
pub use self::constructors::{cycle, fib, from, from_then, iterate, primes, repeat, unfold};
