//! A Binary Search Tree over unique values that is built height-balanced and can be rebuilt
//! height-balanced on demand. Insertions and deletions don't rotate anything, so a tree can drift
//! out of balance between calls to [`Tree::rebalance`].
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::new([10, 1, 1, 4, 6, 8, 11, 20, 9]);
//!
//! // Duplicates are dropped and the values come back sorted.
//! assert_eq!(tree.inorder(), [&1, &4, &6, &8, &9, &10, &11, &20]);
//!
//! // Inserting a value that's already there does nothing.
//! assert!(!tree.insert(4));
//!
//! // Deleting a node with two children promotes its in-order successor.
//! tree.delete(&10).unwrap();
//! assert!(tree.find(&10).is_none());
//! assert_eq!(tree.inorder(), [&1, &4, &6, &8, &9, &11, &20]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::node::{Direction, Link, Node};
use crate::render;

/// A Binary Search Tree holding each value at most once.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

/// A stand-in parent for the root. While a deletion runs, its right link owns the real root so
/// the root is unlinked through the same path as any other right child.
struct VirtualParent<T> {
    right: Link<T>,
}

impl<T> VirtualParent<T> {
    fn adopt(root: Link<T>) -> Self {
        Self { right: root }
    }

    fn release(self) -> Link<T> {
        self.right
    }
}

impl<T> Tree<T> {
    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Visits the left subtree, then a node, then its right subtree. This yields the values in
    /// ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        fn visit<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                visit(&node.left, out);
                out.push(&node.value);
                visit(&node.right, out);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        visit(&self.root, &mut out);
        out
    }

    /// Visits a node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Vec<&T> {
        fn visit<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                out.push(&node.value);
                visit(&node.left, out);
                visit(&node.right, out);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        visit(&self.root, &mut out);
        out
    }

    /// Visits the left subtree, then the right subtree, then the node.
    pub fn postorder(&self) -> Vec<&T> {
        fn visit<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                visit(&node.left, out);
                visit(&node.right, out);
                out.push(&node.value);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        visit(&self.root, &mut out);
        out
    }

    /// Visits the tree breadth first: top to bottom, and left to right within a level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            queue.extend(node.left());
            queue.extend(node.right());
            out.push(&node.value);
        }

        out
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        fn height<T>(link: &Link<T>) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + height(&node.left).max(height(&node.right)),
            }
        }

        height(&self.root)
    }

    /// Whether, at every node, the heights of the left and right subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        /// The height of a balanced subtree, or `None` as soon as any node below is unbalanced.
        fn balanced_height<T>(link: &Link<T>) -> Option<usize> {
            let Some(node) = link else {
                return Some(0);
            };
            let left = balanced_height(&node.left)?;
            let right = balanced_height(&node.right)?;

            (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
        }

        balanced_height(&self.root).is_some()
    }

    /// Draws the tree on its side: right subtrees above their parent, left subtrees below. An
    /// empty tree renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3]);
    /// assert_eq!(tree.render(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        render::render_to_string(self.root())
    }
}

impl<T: Ord> Tree<T> {
    /// Builds a height-balanced tree from any collection of values. Duplicates are dropped.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = cleanse(values);
        let len = values.len();
        debug!(len, "building tree");

        Self {
            root: build_tree(values),
            len,
        }
    }

    /// Potentially finds the node holding `value`. If no node holds it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|node| node.value()), Some(&3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right(),
            }
        }

        None
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Inserts `value` by walking down from the root and attaching a new leaf at the first empty
    /// link. Returns `false`, leaving the tree untouched, if the value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            if node.value == value {
                debug!("rejected duplicate insert");
                return false;
            }
            let direction = Direction::toward(&node.value, &value);
            trace!(?direction, "insert descending");
            slot = node.child_mut(direction);
        }

        *slot = Some(Node::boxed(value));
        self.len += 1;
        debug!(len = self.len, "inserted value");
        true
    }

    /// The recursive flavour of [`Tree::insert`]. Each level hands back its (possibly new)
    /// subtree which the level above reattaches. Both flavours produce the same shape for the
    /// same insertion order.
    pub fn insert_recursive(&mut self, value: T) -> bool {
        let (root, inserted) = insert_into(self.root.take(), value);
        self.root = Some(root);
        if inserted {
            self.len += 1;
            debug!(len = self.len, "inserted value");
        } else {
            debug!("rejected duplicate insert");
        }

        inserted
    }

    /// Like [`Tree::insert`] but reports a duplicate as [`TreeError::DuplicateValue`].
    pub fn try_insert(&mut self, value: T) -> Result<()> {
        if self.insert(value) {
            Ok(())
        } else {
            Err(TreeError::DuplicateValue)
        }
    }

    /// Deletes the node holding `value`. If the tree doesn't contain it, nothing changes and
    /// [`TreeError::NotFound`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Ok(()));
    /// assert_eq!(tree.delete(&2), Err(TreeError::NotFound));
    /// assert_eq!(tree.inorder(), [&1, &3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<()> {
        let mut parent = VirtualParent::adopt(self.root.take());
        let deleted = delete_below(&mut parent.right, value);
        self.root = parent.release();

        match deleted {
            Some(_) => {
                self.len -= 1;
                debug!(len = self.len, "deleted value");
                Ok(())
            }
            None => {
                debug!("delete missed");
                Err(TreeError::NotFound)
            }
        }
    }

    /// The number of edges between the root and the node holding `value`. The root itself has a
    /// depth of 0.
    pub fn depth(&self, value: &T) -> Result<usize> {
        let mut current = self.root().ok_or(TreeError::EmptyTree)?;
        let mut depth = 0;
        while current.value != *value {
            current = current
                .child(Direction::toward(&current.value, value))
                .ok_or(TreeError::NotFound)?;
            depth += 1;
        }

        Ok(depth)
    }

    /// Throws away the current shape and rebuilds a height-balanced tree from the same values.
    pub fn rebalance(&mut self) {
        let values = cleanse(drain_level_order(self.root.take()));
        debug!(len = values.len(), "rebalancing tree");
        self.len = values.len();
        self.root = build_tree(values);
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Ord> From<Vec<T>> for Tree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Sorts ascending and drops duplicates.
fn cleanse<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut values: Vec<T> = values.into_iter().collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Builds a height-balanced subtree from sorted, unique values.
fn build_tree<T>(values: Vec<T>) -> Link<T> {
    let mut values: Vec<Option<T>> = values.into_iter().map(Some).collect();
    build_range(&mut values)
}

/// The middle value becomes the subtree's root and each half builds a child. For an even number
/// of values the lower of the two middle values is chosen.
fn build_range<T>(values: &mut [Option<T>]) -> Link<T> {
    if values.is_empty() {
        return None;
    }
    let (left, rest) = values.split_at_mut((values.len() - 1) / 2);
    let (mid, right) = rest.split_first_mut()?;

    Some(Box::new(Node {
        value: mid.take()?,
        left: build_range(left),
        right: build_range(right),
    }))
}

/// Consumes a subtree, handing back its values in level order.
fn drain_level_order<T>(root: Link<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut queue: VecDeque<Box<Node<T>>> = root.into_iter().collect();

    while let Some(mut node) = queue.pop_front() {
        queue.extend(node.left.take());
        queue.extend(node.right.take());
        out.push(node.value);
    }

    out
}

fn insert_into<T: Ord>(link: Link<T>, value: T) -> (Box<Node<T>>, bool) {
    match link {
        None => (Node::boxed(value), true),
        Some(node) if node.value == value => (node, false),
        Some(mut node) => {
            let direction = Direction::toward(&node.value, &value);
            let slot = node.child_mut(direction);
            let (child, inserted) = insert_into(slot.take(), value);
            *slot = Some(child);
            (node, inserted)
        }
    }
}

/// Walks down from `slot` to the node holding `value` and unlinks it, returning its value.
/// `slot` is always the parent's link toward the current node so the parent can be rewritten
/// directly.
fn delete_below<T: Ord>(mut slot: &mut Link<T>, value: &T) -> Option<T> {
    loop {
        let direction = match slot.as_deref() {
            None => return None,
            Some(node) if node.value == *value => break,
            Some(node) => Direction::toward(&node.value, value),
        };
        slot = match slot {
            Some(node) => node.child_mut(direction),
            None => return None,
        };
    }

    unlink(slot)
}

/// Removes the node held by `slot` from the tree and returns its value.
///
/// - A leaf is simply detached.
/// - A node with one child is replaced by that child.
/// - A node with two children stays put: it takes over its in-order successor's value and the
///   successor (which never has a left child) is unlinked instead.
fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;
    match (node.left.is_some(), node.right.is_some()) {
        (false, false) => {
            trace!("detaching leaf");
            slot.take().map(|node| node.value)
        }
        (true, true) => {
            trace!("promoting in-order successor");
            let successor = unlink_leftmost(&mut node.right)?;
            Some(mem::replace(&mut node.value, successor))
        }
        _ => {
            trace!("splicing out node with one child");
            let child = node.left.take().or_else(|| node.right.take());
            mem::replace(slot, child).map(|node| node.value)
        }
    }
}

/// Follows left links from `slot` until the node there has no left child and unlinks that node.
fn unlink_leftmost<T>(slot: &mut Link<T>) -> Option<T> {
    match slot {
        Some(node) if node.left.is_some() => unlink_leftmost(&mut node.left),
        _ => unlink(slot),
    }
}
