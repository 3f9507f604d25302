//! The building block of a [`Tree`][crate::Tree]. A `Node` holds one value and owns up to two
//! children. It has no behaviour of its own beyond handing out its fields - every algorithm lives
//! on the tree.

/// Exclusive ownership of a subtree, or `None` where there is no subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Which child slot of a parent to look at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The slot holding strictly smaller values.
    Left,
    /// The slot holding strictly larger values.
    Right,
}

impl Direction {
    /// The direction a search for `target` takes when standing on a node holding `value`: left if
    /// the node's value is larger, right otherwise.
    pub(crate) fn toward<T: Ord>(value: &T, target: &T) -> Self {
        if value > target {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// A single value and its two children. For every `Node`, all values in its left subtree are
/// strictly less than its value and all values in its right subtree are strictly greater.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// The child in the given direction.
    pub fn child(&self, direction: Direction) -> Option<&Node<T>> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> &mut Link<T> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Leaf nodes have no children at all.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
