//! A lazy, infinite, memoizing stream library.
//!
//! The core abstraction is [`Stream`]: an immutable cons cell whose tail is
//! a deferred computation that runs at most once, no matter how many holders
//! observe it or how they branch back into already-produced nodes.

pub mod error;
pub mod lazy;
pub mod stream;

// Re-export the whole stream surface at the crate root
pub use error::{StreamError, StreamResult};
pub use lazy::Lazy;
pub use stream::*;
