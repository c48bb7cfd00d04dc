//! The label-plus-nested-array encoding.
//!
//! A branch is a label paired with an array of subtrees; a leaf is the bare label. This mirrors
//! the compact `[label, [children...]]` shape common in serialized tree data. Constructing a
//! node with an empty children sequence collapses it back to a bare leaf, which is what keeps
//! the encoding round-trip-lossless.

use crate::{traversal::TreeLens, LensContractError};
use core::marker::PhantomData;

/// A tree in the label-plus-nested-array encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrayTree<T> {
    /// A bare label without children.
    Leaf(T),
    /// A label paired with its ordered subtrees.
    Branch(T, Vec<ArrayTree<T>>),
}
impl<T> ArrayTree<T> {
    /// Returns the node's label.
    #[inline]
    pub fn label(&self) -> &T {
        match self {
            Self::Leaf(label) | Self::Branch(label, _) => label,
        }
    }
    /// Returns the node's children; empty for leaves.
    #[inline]
    pub fn children(&self) -> &[ArrayTree<T>] {
        match self {
            Self::Leaf(..) => &[],
            Self::Branch(_, children) => children,
        }
    }
}

/// The lens over [`ArrayTree`] nodes.
///
/// [`ArrayTree`]: enum.ArrayTree.html " "
#[derive(Copy, Clone, Debug, Default)]
pub struct ArrayTreeLens<T>(PhantomData<fn() -> T>);

impl<T> ArrayTreeLens<T> {
    /// Creates the lens.
    #[inline]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T: Clone> TreeLens for ArrayTreeLens<T> {
    type Node = ArrayTree<T>;
    type Label = T;

    #[inline]
    fn label_of(&self, node: &Self::Node) -> Result<Self::Label, LensContractError> {
        Ok(node.label().clone())
    }
    #[inline]
    fn children_of(&self, node: &Self::Node) -> Result<Vec<Self::Node>, LensContractError> {
        Ok(node.children().to_vec())
    }
    #[inline]
    fn construct(&self, label: Self::Label, children: Vec<Self::Node>) -> Self::Node {
        if children.is_empty() {
            ArrayTree::Leaf(label)
        } else {
            ArrayTree::Branch(label, children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_law() {
        let lens = ArrayTreeLens::new();
        let children = vec![ArrayTree::Leaf(2), ArrayTree::Leaf(3)];
        let node = lens.construct(1, children.clone());
        assert_eq!(lens.label_of(&node).unwrap(), 1);
        assert_eq!(lens.children_of(&node).unwrap(), children);
    }

    #[test]
    fn empty_children_collapse_to_a_leaf() {
        let lens = ArrayTreeLens::new();
        assert_eq!(lens.construct(7, Vec::new()), ArrayTree::Leaf(7));
    }
}
