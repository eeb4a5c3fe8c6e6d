//! An unbalanced BST. Every node exclusively owns its children through a
//! `Box`, the tree owns its root, and nothing is ever rotated: the shape of
//! the tree is decided entirely by the order values are inserted in.
//!
//! # Examples
//!
//! ```
//! use search_tree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//! assert_eq!(tree.remove(&1), Err(TreeError::Empty));
//!
//! tree.insert(1).insert(2);
//! assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
//!
//! // Inserting a value twice changes nothing.
//! tree.insert(1);
//! assert_eq!(tree.dfs_in_order(), [&1, &2]);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::error::TreeError;
use crate::node::{Link, Node};

/// A Binary Search Tree over unique values. This can be used for inserting,
/// finding, and removing values. It does not balance itself.
///
/// Dropping, cloning, comparing, inserting, finding and removing work on trees
/// of any depth. The depth-first traversals, `height`, `is_balanced`,
/// `insert_recursively`, `find_recursively` and `Debug` recurse once per level
/// so they need a stack deep enough for the tree's height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The default drop recurses once per level which overflows the stack on a
    // tree that degenerated into a list.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Wraps an already built node graph in a `Tree`. The caller must make sure
    /// `root` already is a binary search tree; debug builds check this.
    ///
    /// # Panics
    ///
    /// With debug assertions enabled, when an in-order walk of `root` isn't
    /// strictly ascending.
    pub fn with_root(root: Node<T>) -> Self
    where
        T: Ord,
    {
        let tree = Self {
            root: Some(Box::new(root)),
        };
        if cfg!(debug_assertions) {
            assert!(tree.is_ordered(), "root is not a binary search tree");
        }
        tree
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` by walking down from the root and attaching a new leaf
    /// at the first empty slot. Inserting a value that is already present
    /// leaves the tree untouched. Returns the tree so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).insert(1).insert(3).insert(2);
    ///
    /// assert_eq!(tree.dfs_pre_order(), [&2, &1, &3]);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    log::trace!("ignoring duplicate value on insert");
                    return self;
                }
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Box::new(Node::new(value)));

        self
    }

    /// Same as [`Tree::insert`] but descends recursively. Both build the same
    /// shape for the same sequence of values.
    pub fn insert_recursively(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        match &mut self.root {
            Some(root) => root.insert(value),
            None => self.root = Some(Box::new(Node::new(value))),
        }

        self
    }

    /// Potentially finds the node holding `value`. If no node holds it, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| n.value()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Same as [`Tree::find`] but descends recursively.
    pub fn find_recursively(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|n| n.find(value))
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes the node holding `value` and returns the value.
    ///
    /// A node with two children is replaced by its in-order successor. When
    /// that successor is the node's own right child it is moved up in place of
    /// the removed node. Otherwise the successor's value is moved into the
    /// removed node and the successor's right subtree takes the successor's
    /// old slot.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] when the tree has no nodes and
    /// [`TreeError::NotFound`] when no node holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Tree, TreeError};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.dfs_pre_order(), [&8, &3]);
    /// assert_eq!(tree.remove(&42), Err(TreeError::NotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T, TreeError>
    where
        T: Ord,
    {
        if self.is_empty() {
            log::debug!("remove called on an empty tree");
            return Err(TreeError::Empty);
        }

        let removed = Self::remove_from(&mut self.root, value).ok_or(TreeError::NotFound);
        if removed.is_err() {
            log::debug!("remove did not find the requested value");
        }

        if cfg!(debug_assertions) {
            assert!(self.is_ordered());
        }
        removed
    }

    /// Descends from `link` to the node holding `value` and excises it.
    fn remove_from(mut link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        loop {
            let ordering = value.cmp(&link.as_deref()?.value);
            link = match ordering {
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Equal => return Self::excise(link),
                Ordering::Greater => &mut link.as_mut()?.right,
            };
        }
    }

    /// Removes the node `link` points at, relinking its children into `link`.
    fn excise(link: &mut Link<T>) -> Option<T> {
        let mut node = link.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => {
                log::trace!("removing a leaf");
                Some(node.value)
            }
            (None, Some(child)) | (Some(child), None) => {
                log::trace!("removing a node with one child");
                *link = Some(child);
                Some(node.value)
            }
            (Some(left), Some(mut right)) => match Self::take_leftmost(&mut right.left) {
                None => {
                    log::trace!("replacing a removed node with its right child");
                    right.left = Some(left);
                    *link = Some(right);
                    Some(node.value)
                }
                Some(successor) => {
                    log::trace!("replacing a removed value with its in-order successor");
                    let removed = mem::replace(&mut node.value, successor);
                    node.left = Some(left);
                    node.right = Some(right);
                    *link = Some(node);
                    Some(removed)
                }
            },
        }
    }

    /// Detaches the leftmost node below `link`, putting its right subtree in
    /// its place, and returns its value. `None` if `link` is empty.
    fn take_leftmost(mut link: &mut Link<T>) -> Option<T> {
        while link.as_deref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let mut node = link.take()?;
        *link = node.right.take();
        Some(node.value)
    }

    /// The number of nodes on the longest path from the root to a leaf. An
    /// empty tree has height 0.
    pub fn height(&self) -> usize {
        fn height<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |n| height(n.left()).max(height(n.right())) + 1)
        }

        height(self.root())
    }

    /// Whether, for every node, the heights of its two subtrees differ by at
    /// most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let balanced: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    /// let list: Tree<_> = (1..=5).collect();
    ///
    /// assert!(balanced.is_balanced());
    /// assert!(!list.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        /// Returns the height of the subtree or `None` if some node in it is
        /// unbalanced.
        fn balanced_height<T>(node: Option<&Node<T>>) -> Option<usize> {
            let Some(node) = node else {
                return Some(0);
            };
            let left = balanced_height(node.left())?;
            let right = balanced_height(node.right())?;
            (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
        }

        balanced_height(self.root()).is_some()
    }

    /// Returns the value just below the maximum or `None` if the tree has
    /// fewer than two nodes.
    ///
    /// The maximum is at the end of the right spine. If it has a left subtree,
    /// the answer is the largest value in there. Otherwise it is the parent of
    /// the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 20, 15, 17].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&17));
    ///
    /// let tree: Tree<_> = [10].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut parent = None;
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            parent = Some(current);
            current = right;
        }

        match current.left() {
            Some(left) => Some(left.rightmost().value()),
            None => parent.map(Node::value),
        }
    }

    /// Whether an in-order walk is strictly ascending. Walks with an explicit
    /// stack so it can run after every removal on trees of any depth.
    fn is_ordered(&self) -> bool
    where
        T: Ord,
    {
        let mut stack = Vec::new();
        let mut current = self.root();
        let mut previous: Option<&T> = None;
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                return true;
            };
            if previous.map_or(false, |p| *p >= node.value) {
                return false;
            }
            previous = Some(&node.value);
            current = node.right();
        }
    }
}
