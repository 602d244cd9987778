//! Comparator-parameterized binary heap and bounded top-k queue.
//!
//! - [`Heap`]: binary heap over any [`HeapOrder`], including plain closures
//! - [`BoundedQueue`]: keeps the k best elements of a stream under a
//!   `better(a, b)` predicate without sorting the whole input
//!
//! The same heap serves linear and directional ranking; only the
//! injected ordering differs.

mod binary;
mod bounded;

pub use binary::{Heap, HeapOrder, Reversed};
pub use bounded::BoundedQueue;
