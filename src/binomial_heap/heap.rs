use crate::binomial_heap::node::Node;
use crate::binomial_heap::tree::{self, Tree};
use crate::binomial_heap::{Error, Result};
use log::{debug, trace};
use std::fmt;
use std::iter::FromIterator;

/// A min-heap implemented as a forest of binomial trees.
///
/// A binomial tree of rank `k` is formed by attaching a binomial tree of rank `k - 1` as the
/// leftmost child of another binomial tree of rank `k - 1`, so it holds exactly `2^k` values.
/// The heap keeps at most one tree of each rank, so the occupied ranks mirror the binary
/// representation of the number of values. Inserting a value or merging another heap is the same
/// process as binary addition: two trees of equal rank are linked into a tree of the next rank
/// and carried upwards.
///
/// Duplicate values are allowed.
///
/// # Examples
///
/// ```
/// use mergeable_collections::binomial_heap::{BinomialHeap, Error};
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(5);
/// heap.insert(3);
///
/// let mut other = BinomialHeap::new();
/// other.insert(1);
/// heap.append(&mut other);
///
/// assert_eq!(heap.len(), 3);
/// assert!(other.is_empty());
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Err(Error::EmptyHeap));
/// ```
pub struct BinomialHeap<T> {
    roots: Vec<Tree<T>>,
    len: usize,
}

impl<T> BinomialHeap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinomialHeap<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::binomial_heap::BinomialHeap;
    ///
    /// let heap: BinomialHeap<u32> = BinomialHeap::new();
    /// ```
    pub fn new() -> Self {
        BinomialHeap {
            roots: Vec::new(),
            len: 0,
        }
    }

    // Places a tree of rank `rank` into the forest, linking it with the tree already occupying
    // that slot and carrying the result upwards until an empty slot is found.
    fn add(&mut self, mut node: Box<Node<T>>, mut rank: usize) {
        loop {
            if self.roots.len() <= rank {
                self.roots.resize_with(rank + 1, || None);
            }
            match self.roots[rank].take() {
                Some(occupant) => {
                    node = tree::link(node, occupant);
                    rank += 1;
                },
                None => {
                    self.roots[rank] = Some(node);
                    return;
                },
            }
        }
    }

    fn min_rank(&self) -> Option<usize> {
        self.roots
            .iter()
            .enumerate()
            .filter_map(|(rank, root)| root.as_ref().map(|node| (rank, &node.value)))
            .min_by(|l, r| l.1.cmp(r.1))
            .map(|(rank, _)| rank)
    }

    /// Inserts a value into the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::binomial_heap::BinomialHeap;
    ///
    /// let mut heap = BinomialHeap::new();
    /// heap.insert(1);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    pub fn insert(&mut self, value: T) {
        self.add(Box::new(Node::new(value)), 0);
        self.len += 1;
    }

    /// Moves every value of `other` into the heap, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::binomial_heap::BinomialHeap;
    ///
    /// let mut n = BinomialHeap::new();
    /// n.insert(2);
    /// n.insert(7);
    ///
    /// let mut m = BinomialHeap::new();
    /// m.insert(1);
    /// m.insert(9);
    ///
    /// n.append(&mut m);
    /// assert_eq!(n.len(), 4);
    /// assert_eq!(m.len(), 0);
    /// assert_eq!(n.peek(), Ok(&1));
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        trace!("appending heap of {} values into heap of {} values", other.len, self.len);
        // ranks must be merged in ascending order so that carries cascade upwards
        for (rank, root) in other.roots.drain(..).enumerate() {
            if let Some(node) = root {
                self.add(node, rank);
            }
        }
        self.len += other.len;
        other.len = 0;
    }

    /// Returns a reference to the minimum value of the heap, or `Error::EmptyHeap` if the heap
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::binomial_heap::{BinomialHeap, Error};
    ///
    /// let mut heap = BinomialHeap::new();
    /// assert_eq!(heap.peek(), Err(Error::EmptyHeap));
    /// heap.insert(3);
    /// heap.insert(1);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    pub fn peek(&self) -> Result<&T> {
        let rank = self.min_rank().ok_or_else(|| empty_heap("peek"))?;
        self.roots[rank]
            .as_ref()
            .map(|node| &node.value)
            .ok_or(Error::EmptyHeap)
    }

    /// Removes and returns the minimum value of the heap, or `Error::EmptyHeap` if the heap is
    /// empty. An empty heap is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::binomial_heap::{BinomialHeap, Error};
    ///
    /// let mut heap = BinomialHeap::new();
    /// heap.insert(3);
    /// heap.insert(1);
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Ok(3));
    /// assert_eq!(heap.pop(), Err(Error::EmptyHeap));
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        let rank = self.min_rank().ok_or_else(|| empty_heap("pop"))?;
        let root = self.roots[rank].take().ok_or(Error::EmptyHeap)?;
        let Node { value, child, .. } = *root;

        // the children of a rank `k` tree have ranks `k - 1` down to `0`
        let mut next = child;
        let mut child_rank = rank;
        while let Some(mut node) = next {
            child_rank -= 1;
            next = node.sibling.take();
            self.add(node, child_rank);
        }

        while let Some(None) = self.roots.last() {
            self.roots.pop();
        }
        self.len -= 1;
        Ok(value)
    }
}

impl<T> BinomialHeap<T> {
    /// Returns the number of values in the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::binomial_heap::BinomialHeap;
    ///
    /// let mut heap = BinomialHeap::new();
    /// heap.insert(1);
    /// heap.insert(1);
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::binomial_heap::BinomialHeap;
    ///
    /// let heap: BinomialHeap<u32> = BinomialHeap::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the heap, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::binomial_heap::BinomialHeap;
    ///
    /// let mut heap = BinomialHeap::new();
    /// heap.insert(1);
    /// heap.clear();
    /// assert!(heap.is_empty());
    /// ```
    pub fn clear(&mut self) {
        for root in self.roots.drain(..) {
            tree::free(root);
        }
        self.len = 0;
    }
}

fn empty_heap(operation: &str) -> Error {
    debug!("{} on empty heap", operation);
    Error::EmptyHeap
}

impl<T> Drop for BinomialHeap<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for BinomialHeap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for BinomialHeap<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BinomialHeap<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = BinomialHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T> fmt::Debug for BinomialHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ranks: Vec<usize> = self
            .roots
            .iter()
            .enumerate()
            .filter(|(_, root)| root.is_some())
            .map(|(rank, _)| rank)
            .collect();
        f.debug_struct("BinomialHeap")
            .field("len", &self.len)
            .field("ranks", &ranks)
            .finish()
    }
}
