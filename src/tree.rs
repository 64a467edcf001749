//! An ordered Binary Search Tree storing each distinct value once.
//! Mutating operations work on the tree in place and inserting a value
//! that is already present leaves the tree untouched.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! tree.insert(3);
//! tree.insert(2);
//!
//! // Inserting a value twice changes nothing.
//! tree.insert(2);
//! assert_eq!(tree.len(), 3);
//!
//! // In-order iteration yields ascending order.
//! let sorted: Vec<_> = tree.in_order().copied().collect();
//! assert_eq!(sorted, [1, 2, 3]);
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.remove(&2), None);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

type Link<T> = Option<Box<Node<T>>>;

/// A `Node` has a value that is used for searching/sorting and up to two
/// children. Values in the left subtree are less than `value`, values in
/// the right subtree are greater.
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// An ordered set of values backed by a Binary Search Tree. This can be
/// used for inserting, finding, and deleting values, and for visiting the
/// stored values in-order, pre-order, post-order, or level-order.
///
/// The tree does no rebalancing: operations take `O(height)` which is
/// `O(lg N)` for friendly insertion orders and `O(N)` in the worst case.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        Self::dismantle(self.root.take());
    }
}

/// Reinserting in pre-order order reproduces the exact shape of the
/// original tree, so the clone is structurally identical, not just
/// equal as a set.
impl<T> Clone for OrderedTree<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        self.pre_order().cloned().collect()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given value into the tree. Inserting a value that is
    /// already present is a no-op: the tree stores each value once and
    /// keeps no duplicate counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let root = self.root.take();
        self.root = Self::insert_at(root, value, &mut self.len);
    }

    /// Returns whether the given value exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        Self::search_in(&self.root, value)
    }

    /// Removes the given value from the tree and returns it. If the tree
    /// does not contain the value, nothing happens and `None` is returned.
    ///
    /// A node with two children is replaced by its in-order successor, the
    /// smallest value in its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let root = self.root.take();
        let (root, removed) = Self::remove_at(root, value);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Returns the smallest value in the tree, or `None` if it is empty.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree, or `None` if it is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        Self::dismantle(self.root.take());
        self.len = 0;
    }

    /// Visits the values in ascending order: left subtree, node, right
    /// subtree. The iterator is lazy and borrows the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let values: Vec<_> = tree.in_order().copied().collect();
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// Visits each node before its children: node, left subtree, right
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let values: Vec<_> = tree.pre_order().copied().collect();
    ///
    /// assert_eq!(values, [2, 1, 3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Visits each node after its children: left subtree, right subtree,
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let values: Vec<_> = tree.post_order().copied().collect();
    ///
    /// assert_eq!(values, [1, 3, 2]);
    /// ```
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root.as_deref().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Visits the values breadth-first: nodes in order of increasing depth,
    /// left-to-right within a depth.
    ///
    /// Returns `None` for an empty tree so that "the tree is empty" stays
    /// distinguishable from "the iterator is exhausted".
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.level_order().is_none());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let values: Vec<_> = tree.level_order().unwrap().copied().collect();
    /// assert_eq!(values, [2, 1, 3]);
    /// ```
    pub fn level_order(&self) -> Option<LevelOrder<'_, T>> {
        self.root.as_deref().map(|root| LevelOrder {
            queue: Some(root).into_iter().collect(),
        })
    }

    fn insert_at(link: Link<T>, value: T, len: &mut usize) -> Link<T>
    where
        T: Ord,
    {
        match link {
            None => {
                *len += 1;
                Some(Node::new(value))
            }
            Some(mut node) => {
                match value.cmp(&node.value) {
                    Ordering::Less => node.left = Self::insert_at(node.left.take(), value, len),
                    Ordering::Greater => node.right = Self::insert_at(node.right.take(), value, len),
                    // Duplicates are silently ignored.
                    Ordering::Equal => {}
                }
                Some(node)
            }
        }
    }

    fn search_in(link: &Link<T>, value: &T) -> bool
    where
        T: Ord,
    {
        match link {
            None => false,
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::search_in(&node.left, value),
                Ordering::Equal => true,
                Ordering::Greater => Self::search_in(&node.right, value),
            },
        }
    }

    fn remove_at(link: Link<T>, value: &T) -> (Link<T>, Option<T>)
    where
        T: Ord,
    {
        match link {
            None => (None, None),
            Some(mut node) => match value.cmp(&node.value) {
                Ordering::Less => {
                    let (left, removed) = Self::remove_at(node.left.take(), value);
                    node.left = left;
                    (Some(node), removed)
                }
                Ordering::Greater => {
                    let (right, removed) = Self::remove_at(node.right.take(), value);
                    node.right = right;
                    (Some(node), removed)
                }
                Ordering::Equal => match (node.left.take(), node.right.take()) {
                    (None, None) => (None, Some(node.value)),
                    (Some(child), None) | (None, Some(child)) => (Some(child), Some(node.value)),

                    // With two children we have to pick a node to promote.
                    // We use this node's in-order successor: the smallest
                    // value in its right subtree. The successor has no left
                    // child, so unlinking it splices its right subtree up.
                    (Some(left), Some(right)) => {
                        let (right, successor) = Self::take_min(right);
                        let removed = mem::replace(&mut node.value, successor);
                        node.left = Some(left);
                        node.right = right;
                        (Some(node), Some(removed))
                    }
                },
            },
        }
    }

    /// Unlinks the leftmost node of the subtree, returning the remaining
    /// subtree and the unlinked node's value.
    fn take_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => (node.right.take(), node.value),
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                (Some(node), min)
            }
        }
    }

    /// Frees every node reachable from `root` without recursing, so that a
    /// degenerate (list-shaped) tree cannot overflow the stack on teardown.
    fn dismantle(root: Link<T>) {
        let mut pending = Vec::new();
        pending.extend(root);
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> InOrder<'a, T> {
        self.in_order()
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let mut iter = IntoIter { stack: Vec::new() };
        iter.push_left_spine(self.root.take());
        self.len = 0;
        iter
    }
}

/// Lazy in-order (ascending) traversal created by [`OrderedTree::in_order`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

/// Lazy pre-order traversal created by [`OrderedTree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is visited before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

/// Lazy post-order traversal created by [`OrderedTree::post_order`].
pub struct PostOrder<'a, T> {
    /// Each node is pushed unexpanded, then re-pushed expanded underneath
    /// its children; it is yielded once it pops off expanded.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
        None
    }
}

/// Lazy breadth-first traversal created by [`OrderedTree::level_order`].
/// The queue starts seeded with the root; each visited node enqueues its
/// children left-then-right.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.value)
    }
}

/// Consuming in-order iterator created by [`OrderedTree::into_iter`]. Each
/// yielded node has already shed its children, so dropping the iterator
/// midway cannot recurse deeply.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut node = self.stack.pop()?;
        let right = node.right.take();
        self.push_left_spine(right);
        Some(node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The reference tree: a full three-level BST.
    ///
    /// ```text
    ///         50
    ///       /    \
    ///     30      70
    ///    /  \    /  \
    ///  20    40 60   80
    /// ```
    fn reference_tree() -> OrderedTree<i32> {
        let mut tree = OrderedTree::new();
        for value in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(value);
        }
        tree
    }

    fn in_order(tree: &OrderedTree<i32>) -> Vec<i32> {
        tree.in_order().copied().collect()
    }

    fn pre_order(tree: &OrderedTree<i32>) -> Vec<i32> {
        tree.pre_order().copied().collect()
    }

    #[test]
    fn new_tree_is_empty() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(!tree.contains(&1));
    }

    #[test]
    fn insert_then_contains() {
        let mut tree = OrderedTree::new();
        assert!(!tree.contains(&42));

        tree.insert(42);
        assert!(tree.contains(&42));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut tree = reference_tree();
        let before = in_order(&tree);

        tree.insert(40);
        assert_eq!(in_order(&tree), before);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn reference_traversal_orders() {
        let tree = reference_tree();

        assert_eq!(in_order(&tree), [20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(pre_order(&tree), [50, 30, 20, 40, 70, 60, 80]);

        let post: Vec<_> = tree.post_order().copied().collect();
        assert_eq!(post, [20, 40, 30, 60, 80, 70, 50]);

        let level: Vec<_> = tree.level_order().unwrap().copied().collect();
        assert_eq!(level, [50, 30, 70, 20, 40, 60, 80]);
    }

    #[test]
    fn reference_searches() {
        let tree = reference_tree();
        assert!(tree.contains(&40));
        assert!(!tree.contains(&55));
    }

    #[test]
    fn remove_from_reference_tree() {
        let mut tree = reference_tree();

        assert_eq!(tree.remove(&30), Some(30));
        assert!(!tree.contains(&30));
        assert_eq!(tree.len(), 6);
        assert_eq!(in_order(&tree), [20, 40, 50, 60, 70, 80]);

        // 30 had two children, so its successor 40 was promoted in place.
        let level: Vec<_> = tree.level_order().unwrap().copied().collect();
        assert_eq!(level, [50, 40, 70, 20, 60, 80]);
    }

    #[test]
    fn remove_leaf() {
        let mut tree = reference_tree();

        assert_eq!(tree.remove(&20), Some(20));
        assert_eq!(in_order(&tree), [30, 40, 50, 60, 70, 80]);
        assert_eq!(pre_order(&tree), [50, 30, 40, 70, 60, 80]);
    }

    #[test]
    fn remove_node_with_only_left_child() {
        let mut tree: OrderedTree<_> = vec![50, 30, 20].into_iter().collect();

        assert_eq!(tree.remove(&30), Some(30));
        assert_eq!(in_order(&tree), [20, 50]);
        assert_eq!(pre_order(&tree), [50, 20]);
    }

    #[test]
    fn remove_node_with_only_right_child() {
        let mut tree: OrderedTree<_> = vec![50, 70, 80].into_iter().collect();

        assert_eq!(tree.remove(&70), Some(70));
        assert_eq!(in_order(&tree), [50, 80]);
        assert_eq!(pre_order(&tree), [50, 80]);
    }

    #[test]
    fn remove_root_with_two_children_promotes_successor() {
        let mut tree = reference_tree();

        assert_eq!(tree.remove(&50), Some(50));

        // The successor 60 replaces the root and is spliced out of 70's
        // left link.
        assert_eq!(pre_order(&tree), [60, 30, 20, 40, 70, 80]);
        assert_eq!(in_order(&tree), [20, 30, 40, 60, 70, 80]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut tree = reference_tree();
        let before = pre_order(&tree);

        assert_eq!(tree.remove(&55), None);
        assert_eq!(tree.len(), 7);
        assert_eq!(pre_order(&tree), before);
    }

    #[test]
    fn remove_last_value_empties_tree() {
        let mut tree = OrderedTree::new();
        tree.insert(5);

        assert_eq!(tree.remove(&5), Some(5));
        assert!(tree.is_empty());
        assert!(tree.level_order().is_none());
    }

    #[test]
    fn level_order_distinguishes_empty_tree() {
        let mut tree = OrderedTree::new();
        assert!(tree.level_order().is_none());

        tree.insert(1);
        assert!(tree.level_order().is_some());

        tree.remove(&1);
        assert!(tree.level_order().is_none());
    }

    #[test]
    fn depth_first_traversals_on_empty_tree_are_empty() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert!(tree.in_order().next().is_none());
        assert!(tree.pre_order().next().is_none());
        assert!(tree.post_order().next().is_none());
    }

    #[test]
    fn min_and_max() {
        let tree = reference_tree();
        assert_eq!(tree.min(), Some(&20));
        assert_eq!(tree.max(), Some(&80));

        let empty: OrderedTree<i32> = OrderedTree::new();
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
    }

    #[test]
    fn clear_empties_tree() {
        let mut tree = reference_tree();
        tree.clear();

        assert!(tree.is_empty());
        assert!(tree.level_order().is_none());

        // The tree is still usable afterwards.
        tree.insert(1);
        assert!(tree.contains(&1));
    }

    #[test]
    fn into_iter_yields_sorted() {
        let tree = reference_tree();
        let values: Vec<_> = tree.into_iter().collect();
        assert_eq!(values, [20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn borrowing_into_iterator_is_in_order() {
        let tree = reference_tree();
        let values: Vec<_> = (&tree).into_iter().copied().collect();
        assert_eq!(values, in_order(&tree));
    }

    #[test]
    fn clone_is_structurally_identical_and_independent() {
        let tree = reference_tree();
        let mut clone = tree.clone();

        assert_eq!(pre_order(&clone), pre_order(&tree));

        clone.remove(&30);
        assert!(!clone.contains(&30));
        assert!(tree.contains(&30));
    }

    #[test]
    fn works_with_owned_strings() {
        let mut tree = OrderedTree::new();
        tree.insert(String::from("banana"));
        tree.insert(String::from("apple"));
        tree.insert(String::from("cherry"));

        assert!(tree.contains(&String::from("apple")));
        assert_eq!(tree.min().map(String::as_str), Some("apple"));

        let values: Vec<String> = tree.into_iter().collect();
        assert_eq!(values, ["apple", "banana", "cherry"]);
    }

    #[test]
    fn debug_renders_in_order() {
        let tree: OrderedTree<_> = vec![2, 3, 1].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
    }

    #[test]
    fn degenerate_tree_teardown_does_not_overflow() {
        // Build a list-shaped tree taller than it is wide and let `Drop`
        // dismantle it.
        let mut tree = OrderedTree::new();
        for value in 0..1_000 {
            tree.insert(value);
        }
        assert_eq!(tree.len(), 1_000);
        drop(tree);
    }
}
