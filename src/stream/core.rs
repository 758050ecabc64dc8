//! The lazy cons cell at the core of the crate.
//!
//! A [`Stream`] is one node of a conceptually infinite, immutable,
//! singly-linked sequence: a concrete head plus a deferred, memoized
//! computation producing the next node. Every generator, combinator, and
//! materializer in the crate is built from this one shape.

use std::fmt;
use std::rc::Rc;

use crate::lazy::Lazy;

struct Node<T> {
    head: T,
    tail: Lazy<Stream<T>>,
}

/// A handle to one node of an infinite, immutable, memoizing sequence.
///
/// Cloning is cheap (a reference-count bump) and never copies the spine.
/// Any number of holders may alias the same node; its tail is computed at
/// most once no matter how many of them force it, or in which order.
pub struct Stream<T> {
    node: Rc<Node<T>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T: 'static> Stream<T> {
    /// Construct a node from a head value and a deferred tail computation.
    ///
    /// The closure does not run until the first call to [`tail`](Self::tail).
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Stream<T> + 'static,
    {
        Stream {
            node: Rc::new(Node {
                head,
                tail: Lazy::new(tail),
            }),
        }
    }
}

impl<T> Stream<T> {
    /// The value at this position. Never forces anything.
    pub fn head(&self) -> &T {
        &self.node.head
    }

    /// Force the tail and return the next node.
    ///
    /// The first call runs the deferred computation; every later call, from
    /// this handle or any clone of it, returns the same cached node.
    pub fn tail(&self) -> Stream<T> {
        self.node.tail.force().clone()
    }

    /// Whether this node's tail has been forced yet.
    pub fn is_tail_forced(&self) -> bool {
        self.node.tail.is_forced()
    }

    /// Node identity: `true` when both handles point at the same cell.
    pub fn ptr_eq(a: &Stream<T>, b: &Stream<T>) -> bool {
        Rc::ptr_eq(&a.node, &b.node)
    }
}

impl<T: Clone> Stream<T> {
    /// Bridge to eager, pull-based consumption.
    ///
    /// The iterator clones heads as it goes and advances only when the next
    /// element is actually demanded: consuming `n` items forces exactly
    /// `n - 1` tails, so there is no lookahead past what was asked for.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            cursor: self.clone(),
            started: false,
        }
    }
}

/// Infinite iterator over cloned heads. See [`Stream::iter`].
pub struct Iter<T> {
    cursor: Stream<T>,
    started: bool,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.cursor = self.cursor.tail();
        } else {
            self.started = true;
        }
        Some(self.cursor.head().clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("head", self.head())
            .field("tail_forced", &self.is_tail_forced())
            .finish()
    }
}
