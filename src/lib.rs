//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over
//! unique, totally ordered values, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). This
//! tree never rebalances itself, so the order of insertion decides its shape:
//! inserting values in ascending order builds a tree that is really a linked
//! list. [`Tree::is_balanced`] reports whether that has happened.
//!
//! BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree (see
//! [`Tree::dfs_in_order`]).
//!
//! # Examples
//!
//! ```
//! use search_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(10).insert(5).insert(15).insert(3).insert(7);
//!
//! assert_eq!(tree.dfs_in_order(), [&3, &5, &7, &10, &15]);
//! assert_eq!(tree.bfs(), [&10, &5, &15, &3, &7]);
//! assert_eq!(tree.find_second_highest(), Some(&10));
//! ```

#![deny(missing_docs)]

mod error;
mod node;
mod traversal;
mod tree;


pub use error::TreeError;
pub use node::Node;
pub use tree::Tree;
