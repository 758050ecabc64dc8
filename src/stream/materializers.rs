//! Materializers bridging the infinite lazy world to finite eager data.

use crate::stream::core::Stream;

impl<T: Clone + 'static> Stream<T> {
    /// Eagerly collect the first `max(n, 0)` elements.
    ///
    /// Forces exactly `max(n, 0) - 1` tails for positive `n` and nothing at
    /// all otherwise; there is no lookahead past the requested prefix.
    pub fn take(&self, n: isize) -> Vec<T> {
        if n <= 0 {
            return Vec::new();
        }
        let wanted = n as usize;
        let mut out = Vec::with_capacity(wanted);
        let mut s = self.clone();
        loop {
            out.push(s.head().clone());
            if out.len() == wanted {
                return out;
            }
            s = s.tail();
        }
    }
}

impl<T: 'static> Stream<T> {
    /// Advance past the first `max(n, 0)` elements and return what remains.
    ///
    /// For `n <= 0` this is the stream unchanged, with nothing forced. The
    /// walk is a loop, so a large `n` costs time, not stack.
    pub fn skip(&self, n: isize) -> Stream<T> {
        let mut s = self.clone();
        for _ in 0..n {
            s = s.tail();
        }
        s
    }
}
