//! The plain label-plus-children record encoding.
//!
//! This is the most literal tree shape there is: a node owns its label and a vector of child
//! nodes. It doubles as the reference encoding for the round-trip tests of the other lenses.
//!
//! # Example
//! ```rust
//! use canopy::label_tree::{LabelTree, LabelTreeLens};
//! use canopy::traversal::TreeLens;
//!
//! let lens = LabelTreeLens::new();
//! let tree = LabelTree::branch(1, vec![LabelTree::new(2), LabelTree::new(3)]);
//! assert_eq!(lens.label_of(&tree).unwrap(), 1);
//! assert_eq!(lens.children_of(&tree).unwrap().len(), 2);
//! ```

use crate::{traversal::TreeLens, LensContractError};
use core::marker::PhantomData;

/// A tree node carrying a label and an ordered sequence of children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabelTree<T> {
    /// The payload of this node.
    pub label: T,
    /// The ordered children of this node.
    pub children: Vec<LabelTree<T>>,
}
impl<T> LabelTree<T> {
    /// Creates a leaf node.
    #[inline]
    pub fn new(label: T) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }
    /// Creates a node with the specified children.
    #[inline]
    pub fn branch(label: T, children: Vec<Self>) -> Self {
        Self { label, children }
    }
    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The lens over [`LabelTree`] nodes.
///
/// All three accessors are total: any `LabelTree` value is a well-formed node, so this lens
/// never produces a contract error.
///
/// [`LabelTree`]: struct.LabelTree.html " "
#[derive(Copy, Clone, Debug, Default)]
pub struct LabelTreeLens<T>(PhantomData<fn() -> T>);

impl<T> LabelTreeLens<T> {
    /// Creates the lens.
    #[inline]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T: Clone> TreeLens for LabelTreeLens<T> {
    type Node = LabelTree<T>;
    type Label = T;

    #[inline]
    fn label_of(&self, node: &Self::Node) -> Result<Self::Label, LensContractError> {
        Ok(node.label.clone())
    }
    #[inline]
    fn children_of(&self, node: &Self::Node) -> Result<Vec<Self::Node>, LensContractError> {
        Ok(node.children.clone())
    }
    #[inline]
    fn construct(&self, label: Self::Label, children: Vec<Self::Node>) -> Self::Node {
        LabelTree { label, children }
    }
}
