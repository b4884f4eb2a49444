use crate::treap::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

// precondition: every key in `l_tree` is less than or equal to every key in `r_tree`
pub fn join<T>(l_tree: &mut Tree<T>, r_tree: Tree<T>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority > r_node.priority {
                join(&mut l_node.right, Some(r_node));
                *l_tree = Some(l_node);
            } else {
                let mut new_tree = Some(l_node);
                join(&mut new_tree, r_node.left.take());
                r_node.left = new_tree;
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

// Splits `tree` around `key`. The keys less than `key` stay in `tree` and the keys greater than
// `key` are returned. Keys equal to `key` stay if `left_inclusive` is set and are returned
// otherwise.
pub fn split<T>(tree: &mut Tree<T>, key: &T, left_inclusive: bool) -> Tree<T>
where
    T: Ord,
{
    match tree.take() {
        Some(mut node) => {
            let belongs_right = match key.cmp(&node.key) {
                Ordering::Less => true,
                Ordering::Equal => !left_inclusive,
                Ordering::Greater => false,
            };
            if belongs_right {
                let res = split(&mut node.left, key, left_inclusive);
                *tree = node.left.take();
                node.left = res;
                Some(node)
            } else {
                let ret = split(&mut node.right, key, left_inclusive);
                *tree = Some(node);
                ret
            }
        },
        None => None,
    }
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn free<T>(tree: Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        if let Some(left_node) = node.left.take() {
            stack.push(left_node);
        }
        if let Some(right_node) = node.right.take() {
            stack.push(right_node);
        }
    }
}

#[cfg(test)]
pub fn keys<T>(tree: &Tree<T>) -> Vec<&T> {
    let mut ret = Vec::new();
    let mut stack = Vec::new();
    let mut curr = tree;
    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = &node.left;
        }
        match stack.pop() {
            Some(node) => {
                ret.push(&node.key);
                curr = &node.right;
            },
            None => return ret,
        }
    }
}

#[cfg(test)]
pub fn is_heap_ordered<T>(tree: &Tree<T>) -> bool {
    match tree {
        Some(ref node) => {
            let Node {
                ref left,
                ref right,
                priority,
                ..
            } = **node;
            left.as_ref().map_or(true, |child| child.priority <= priority)
                && right.as_ref().map_or(true, |child| child.priority <= priority)
                && is_heap_ordered(left)
                && is_heap_ordered(right)
        },
        None => true,
    }
}

#[cfg(test)]
pub fn depth<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(ref node) => 1 + std::cmp::max(depth(&node.left), depth(&node.right)),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{contains, free, is_heap_ordered, join, keys, split, Tree};
    use crate::treap::node::Node;

    // Builds a treap over 0..=6 where priorities decrease with depth.
    fn sample_tree() -> Tree<u32> {
        let mut tree = None;
        for (key, priority) in [(0, 1), (1, 5), (2, 2), (3, 9), (4, 3), (5, 6), (6, 4)].iter() {
            join(&mut tree, Some(Box::new(Node::new(*key, *priority))));
        }
        tree
    }

    #[test]
    fn test_join() {
        let tree = sample_tree();
        assert_eq!(keys(&tree), vec![&0, &1, &2, &3, &4, &5, &6]);
        assert!(is_heap_ordered(&tree));
        assert_eq!(tree.as_ref().map(|node| node.key), Some(3));
    }

    #[test]
    fn test_split_left_inclusive() {
        let mut tree = sample_tree();
        let right = split(&mut tree, &3, true);
        assert_eq!(keys(&tree), vec![&0, &1, &2, &3]);
        assert_eq!(keys(&right), vec![&4, &5, &6]);
        assert!(is_heap_ordered(&tree));
        assert!(is_heap_ordered(&right));
    }

    #[test]
    fn test_split_left_exclusive() {
        let mut tree = sample_tree();
        let right = split(&mut tree, &3, false);
        assert_eq!(keys(&tree), vec![&0, &1, &2]);
        assert_eq!(keys(&right), vec![&3, &4, &5, &6]);
    }

    #[test]
    fn test_split_out_of_range() {
        let mut tree = sample_tree();
        let right = split(&mut tree, &10, false);
        assert_eq!(keys(&tree).len(), 7);
        assert!(right.is_none());

        let mut tree = sample_tree();
        let right = split(&mut tree, &0, false);
        assert!(tree.is_none());
        assert_eq!(keys(&right).len(), 7);
    }

    #[test]
    fn test_split_then_join() {
        let mut tree = sample_tree();
        let right = split(&mut tree, &2, true);
        join(&mut tree, right);
        assert_eq!(keys(&tree), vec![&0, &1, &2, &3, &4, &5, &6]);
        assert!(is_heap_ordered(&tree));
    }

    #[test]
    fn test_contains() {
        let tree = sample_tree();
        for key in 0..7 {
            assert!(contains(&tree, &key));
        }
        assert!(!contains(&tree, &7));
        assert!(!contains(&None, &0));
    }

    #[test]
    fn test_free_degenerate_tree() {
        let mut tree = None;
        for key in 0..1_000_000u32 {
            let mut node = Box::new(Node::new(key, key));
            node.left = tree;
            tree = Some(node);
        }
        free(tree);
    }
}
