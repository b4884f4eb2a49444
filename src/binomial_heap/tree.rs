use crate::binomial_heap::node::Node;

pub type Tree<T> = Option<Box<Node<T>>>;

// precondition: both trees have the same rank
pub fn link<T>(mut tree: Box<Node<T>>, mut other: Box<Node<T>>) -> Box<Node<T>>
where
    T: Ord,
{
    if tree.value < other.value {
        other.sibling = tree.child.take();
        tree.child = Some(other);
        tree
    } else {
        tree.sibling = other.child.take();
        other.child = Some(tree);
        other
    }
}

pub fn free<T>(tree: Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        if let Some(child) = node.child.take() {
            stack.push(child);
        }
        if let Some(sibling) = node.sibling.take() {
            stack.push(sibling);
        }
    }
}

#[cfg(test)]
pub fn count<T>(node: &Node<T>) -> usize {
    let mut ret = 1;
    let mut curr = &node.child;
    while let Some(child) = curr {
        ret += count(child);
        curr = &child.sibling;
    }
    ret
}

// Checks that the children of `node` have ranks `rank - 1` down to `0` and never hold a value
// smaller than their parent.
#[cfg(test)]
pub fn is_binomial<T>(node: &Node<T>, rank: usize) -> bool
where
    T: Ord,
{
    let mut expected = rank;
    let mut curr = &node.child;
    while let Some(child) = curr {
        if expected == 0 || child.value < node.value || !is_binomial(child, expected - 1) {
            return false;
        }
        expected -= 1;
        curr = &child.sibling;
    }
    expected == 0
}
