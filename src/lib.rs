//! Mergeable and ordered collections built on singly-owned node trees.
//!
//! - [`BinomialHeap`](binomial_heap/struct.BinomialHeap.html): a min-heap that can absorb another
//!   heap in `O(log N)` time.
//! - [`TreapSet`](treap/struct.TreapSet.html): an ordered set balanced by randomly drawn
//!   priorities.

pub mod binomial_heap;
pub mod treap;
