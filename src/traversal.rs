//! Depth-first and breadth-first walks over a [`Tree`]. Each walk collects
//! references to every value in the tree; an empty tree yields an empty
//! `Vec`.
//!
//! The depth-first walks recurse once per level, so a tree that degenerated
//! into a long list needs a correspondingly deep stack.

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

/// When a node's own value is recorded relative to its subtrees.
#[derive(Clone, Copy)]
enum Visit {
    Pre,
    In,
    Post,
}

fn depth_first<'a, T>(node: Option<&'a Node<T>>, visit: Visit, visited: &mut Vec<&'a T>) {
    let Some(node) = node else {
        return;
    };

    if let Visit::Pre = visit {
        visited.push(&node.value);
    }
    depth_first(node.left(), visit, visited);
    if let Visit::In = visit {
        visited.push(&node.value);
    }
    depth_first(node.right(), visit, visited);
    if let Visit::Post = visit {
        visited.push(&node.value);
    }
}

impl<T> Tree<T> {
    fn depth_first(&self, visit: Visit) -> Vec<&T> {
        let mut visited = Vec::new();
        depth_first(self.root(), visit, &mut visited);
        visited
    }

    /// Visits each node before its left subtree and then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.dfs_pre_order(), [&10, &5, &3, &7, &15]);
    /// ```
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        self.depth_first(Visit::Pre)
    }

    /// Visits each node between its left and right subtrees. Because of the
    /// ordering invariant this yields the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.dfs_in_order(), [&3, &5, &7, &10, &15]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&T> {
        self.depth_first(Visit::In)
    }

    /// Visits each node after both of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.dfs_post_order(), [&3, &7, &5, &15, &10]);
    /// ```
    pub fn dfs_post_order(&self) -> Vec<&T> {
        self.depth_first(Visit::Post)
    }

    /// Visits the tree level by level, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.bfs(), [&10, &5, &15, &3, &7]);
    /// ```
    pub fn bfs(&self) -> Vec<&T> {
        let mut visited = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            visited.push(&node.value);
            queue.extend(node.left());
            queue.extend(node.right());
        }

        visited
    }
}
