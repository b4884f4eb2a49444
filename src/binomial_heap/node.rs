use crate::binomial_heap::tree;

/// A struct representing an internal node of a binomial tree.
pub struct Node<T> {
    pub value: T,
    pub child: tree::Tree<T>,
    pub sibling: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            child: None,
            sibling: None,
        }
    }
}
