//! Mergeable priority queue implemented as a forest of binomial trees.

mod heap;
mod node;
mod tree;

pub use self::heap::BinomialHeap;

use std::result;
use thiserror::Error;

/// Errors returned by [`BinomialHeap`](struct.BinomialHeap.html) operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The heap holds no values.
    #[error("heap is empty")]
    EmptyHeap,
}

pub type Result<T> = result::Result<T, Error>;
