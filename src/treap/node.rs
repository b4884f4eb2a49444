use crate::treap::tree;

/// A struct representing an internal node of a treap.
pub struct Node<T> {
    pub key: T,
    pub priority: u32,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T, priority: u32) -> Self {
        Node {
            key,
            priority,
            left: None,
            right: None,
        }
    }
}
