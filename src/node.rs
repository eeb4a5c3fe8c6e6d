use std::cmp::Ordering;

/// An owning, possibly empty, pointer to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds a value and up to two children. Children are owned
/// exclusively by their parent, so a tree of `Node`s can never contain a
/// cycle or a shared subtree.
///
/// `Clone` and `PartialEq` walk the subtree with an explicit stack. Dropping a
/// `Node` that isn't owned by a [`Tree`][crate::Tree] recurses once per level.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        /// `Enter` copies a subtree, `Exit` assembles a node from the two
        /// copies its children left on `built`.
        enum Frame<'a, T> {
            Enter(Option<&'a Node<T>>),
            Exit(&'a Node<T>),
        }

        let mut frames = vec![Frame::Enter(self.right()), Frame::Enter(self.left())];
        let mut built: Vec<Link<T>> = Vec::new();
        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Enter(None) => built.push(None),
                Frame::Enter(Some(node)) => frames.extend([
                    Frame::Exit(node),
                    Frame::Enter(node.right()),
                    Frame::Enter(node.left()),
                ]),
                Frame::Exit(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Self {
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        let right = built.pop().flatten();
        let left = built.pop().flatten();
        Self {
            value: self.value.clone(),
            left,
            right,
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.value != b.value {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(a), Some(b)) => pairs.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a `Node` holding `value` with the given children. Nothing
    /// checks that the children respect the ordering invariant; that is left
    /// to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Node, Tree};
    ///
    /// let root = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// let tree = Tree::with_root(root);
    ///
    /// assert_eq!(tree.dfs_in_order(), [&1, &2, &3]);
    /// ```
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recursively inserts `value` below this node. Duplicates are dropped.
    pub(crate) fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                log::trace!("ignoring duplicate value on recursive insert");
                return;
            }
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(node) => node.insert(value),
            None => *child = Some(Box::new(Self::new(value))),
        }
    }

    /// Recursively searches this subtree for the node holding `value`.
    pub(crate) fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left().and_then(|n| n.find(value)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(value)),
        }
    }

    /// The largest node in this subtree, found by following right children.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }
}
