use crate::treap::node::Node;
use crate::treap::tree::{self, Tree};
use log::trace;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. The key of any node is greater than all keys in its left subtree
/// and less than all keys occuring in its right subtree. The priority of a node is greater than
/// or equal to the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected height of the tree is proportional to the logarithm of the number of keys.
///
/// Every set owns the random number generator that draws its priorities. `TreapSet::with_seed`
/// and `TreapSet::with_rng` make the shape of the tree reproducible.
///
/// # Examples
///
/// ```
/// use mergeable_collections::treap::TreapSet;
///
/// let mut set = TreapSet::new();
/// set.insert(4);
/// set.insert(2);
/// set.insert(6);
///
/// assert!(!set.insert(2));
/// assert_eq!(set.len(), 3);
///
/// assert!(set.contains(&2));
/// assert!(!set.contains(&5));
///
/// assert!(set.remove(&4));
/// assert!(!set.remove(&4));
/// ```
pub struct TreapSet<T, R = XorShiftRng> {
    tree: Tree<T>,
    len: usize,
    rng: R,
}

impl<T> TreapSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `TreapSet<T>` whose generator is seeded from the thread-local
    /// generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_rng(rand::weak_rng())
    }

    /// Constructs a new, empty `TreapSet<T>` whose generator is seeded with `seed`. Sets built
    /// with the same seed and the same sequence of operations have identical shapes.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeroes.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::with_seed([1, 2, 3, 4]);
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        Self::with_rng(XorShiftRng::from_seed(seed))
    }
}

impl<T, R> TreapSet<T, R>
where
    T: Ord,
    R: Rng,
{
    /// Constructs a new, empty `TreapSet<T, R>` that draws priorities from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate rand;
    /// extern crate mergeable_collections;
    ///
    /// use mergeable_collections::treap::TreapSet;
    /// use rand::{SeedableRng, StdRng};
    ///
    /// let rng: StdRng = SeedableRng::from_seed(&[1usize, 2, 3, 4][..]);
    /// let mut set = TreapSet::with_rng(rng);
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn with_rng(rng: R) -> Self {
        TreapSet {
            tree: None,
            len: 0,
            rng,
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key
    /// already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        if self.contains(&key) {
            return false;
        }

        let TreapSet {
            tree: ref mut root,
            ref mut len,
            ref mut rng,
        } = self;
        let right = tree::split(root, &key, true);
        tree::join(root, Some(Box::new(Node::new(key, rng.next_u32()))));
        tree::join(root, right);
        *len += 1;
        true
    }

    /// Removes a key from the set. Returns `false` and leaves the set unchanged if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        let mut middle = tree::split(&mut self.tree, key, false);
        let right = tree::split(&mut middle, key, true);
        tree::join(&mut self.tree, right);

        // `middle` holds at most the single node equal to `key`
        let removed = middle.is_some();
        if removed {
            self.len -= 1;
        }
        tree::free(middle);
        removed
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }
}

impl<T, R> TreapSet<T, R> {
    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing treap of {} keys", self.len);
        tree::free(self.tree.take());
        self.len = 0;
    }
}

impl<T, R> Drop for TreapSet<T, R> {
    fn drop(&mut self) {
        tree::free(self.tree.take());
    }
}

impl<T> Default for TreapSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Extend<T> for TreapSet<T, R>
where
    T: Ord,
    R: Rng,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for TreapSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = TreapSet::new();
        set.extend(iter);
        set
    }
}

impl<T, R> fmt::Debug for TreapSet<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TreapSet").field("len", &self.len).finish()
    }
}
