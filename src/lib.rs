//! This crate exposes an ordered Binary Search Tree (BST) storing each
//! distinct value once, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). The
//! tree here does no rebalancing, so the height is `O(lg N)` only when the
//! insertion order is kind and `O(N)` when it is not. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree; [`OrderedTree`] exposes that order along
//! with pre-order, post-order, and breadth-first (level-order) visitation.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

pub use tree::OrderedTree;
