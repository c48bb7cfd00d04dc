//! The path-hash-indexed encoding.
//!
//! The whole tree lives in one flat table mapping cursor strings to labels; a node is a cursor
//! into that table. The cursor of the `i`-th child of a node at cursor `c` is `c`, the
//! separator, then `i`, so children are found by probing the table for consecutive indices.
//! There are no child vectors anywhere: structure is entirely implied by the cursor scheme.
//!
//! # Example
//! ```rust
//! use canopy::hashed_tree::{HashedTree, HashedTreeLens};
//! use canopy::traversal::TreeLens;
//! use std::collections::HashMap;
//!
//! let mut hash = HashMap::new();
//! hash.insert("0".to_owned(), "root");
//! hash.insert("0.0".to_owned(), "left");
//! hash.insert("0.1".to_owned(), "right");
//!
//! let lens = HashedTreeLens::new(".");
//! let tree = HashedTree::new("0", hash);
//! let children = lens.children_of(&tree).unwrap();
//! assert_eq!(children.len(), 2);
//! assert_eq!(lens.label_of(&children[1]).unwrap().value, "right");
//! ```

use crate::{map_over_tree, traversal::TreeLens, LensContractError};
use core::marker::PhantomData;
use std::collections::HashMap;

/// A node of a path-hash-indexed tree: a cursor into the flat label table.
///
/// Every node handle carries the full table, so the handles of one tree all see the same
/// labels. The engine clones handles as it enqueues them; for large tables the clone cost is
/// the price of this encoding's flatness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashedTree<T> {
    /// The cursor of this node within the table.
    pub cursor: String,
    /// The flat cursor-to-label table holding the entire tree.
    pub hash: HashMap<String, T>,
}
impl<T> HashedTree<T> {
    /// Creates a node handle from a cursor and the label table.
    #[inline]
    pub fn new(cursor: impl Into<String>, hash: HashMap<String, T>) -> Self {
        Self {
            cursor: cursor.into(),
            hash,
        }
    }
}

/// The label read out of a hashed tree: the label value together with the cursor it was found
/// at, which `construct` needs to know where the node goes back into the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashedLabel<T> {
    /// The cursor the label was read from.
    pub cursor: String,
    /// The label value itself.
    pub value: T,
}

/// The lens over [`HashedTree`] nodes, parameterized by the cursor separator.
///
/// `label_of` refuses a node whose cursor has no entry in the table; a dangling cursor is the
/// one way a hashed tree can be malformed.
///
/// [`HashedTree`]: struct.HashedTree.html " "
#[derive(Clone, Debug)]
pub struct HashedTreeLens<T> {
    separator: String,
    _label: PhantomData<fn() -> T>,
}

impl<T> HashedTreeLens<T> {
    /// Creates the lens with the specified cursor separator.
    #[inline]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            _label: PhantomData,
        }
    }

    fn child_cursor(&self, parent: &str, index: usize) -> String {
        format!("{}{}{}", parent, self.separator, index)
    }
}
impl<T: Clone> TreeLens for HashedTreeLens<T> {
    type Node = HashedTree<T>;
    type Label = HashedLabel<T>;

    fn label_of(&self, node: &Self::Node) -> Result<Self::Label, LensContractError> {
        node.hash
            .get(&node.cursor)
            .map(|value| HashedLabel {
                cursor: node.cursor.clone(),
                value: value.clone(),
            })
            .ok_or_else(|| {
                LensContractError::new(
                    "label_of",
                    format!("no label recorded at cursor `{}`", node.cursor),
                )
            })
    }

    fn children_of(&self, node: &Self::Node) -> Result<Vec<Self::Node>, LensContractError> {
        let mut children = Vec::new();
        let mut index = 0;
        loop {
            let cursor = self.child_cursor(&node.cursor, index);
            if !node.hash.contains_key(&cursor) {
                break;
            }
            children.push(HashedTree {
                cursor,
                hash: node.hash.clone(),
            });
            index += 1;
        }
        Ok(children)
    }

    fn construct(&self, label: Self::Label, children: Vec<Self::Node>) -> Self::Node {
        // The rebuilt table is the union of the children's tables plus this node's own entry.
        let mut hash = children
            .into_iter()
            .fold(HashMap::new(), |mut merged, child| {
                merged.extend(child.hash);
                merged
            });
        hash.insert(label.cursor.clone(), label.value);
        HashedTree {
            cursor: label.cursor,
            hash,
        }
    }
}

/// Applies a function to every label value of a hashed tree, keeping cursors and structure.
///
/// # Example
/// ```rust
/// use canopy::hashed_tree::{map_over_hashed_tree, HashedTree};
/// use std::collections::HashMap;
///
/// let mut hash = HashMap::new();
/// hash.insert("0".to_owned(), 1);
/// hash.insert("0.0".to_owned(), 2);
///
/// let mapped = map_over_hashed_tree(".", |value| value * 10, &HashedTree::new("0", hash)).unwrap();
/// assert_eq!(mapped.hash["0"], 10);
/// assert_eq!(mapped.hash["0.0"], 20);
/// ```
pub fn map_over_hashed_tree<T, F>(
    separator: impl Into<String>,
    mut map_fn: F,
    tree: &HashedTree<T>,
) -> Result<HashedTree<T>, LensContractError>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    let lens = HashedTreeLens::new(separator);
    map_over_tree(
        &lens,
        |label: HashedLabel<T>| HashedLabel {
            cursor: label.cursor,
            value: map_fn(label.value),
        },
        tree,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> HashMap<String, u32> {
        let mut hash = HashMap::new();
        hash.insert("0".to_owned(), 1);
        hash.insert("0.0".to_owned(), 2);
        hash.insert("0.1".to_owned(), 3);
        hash.insert("0.1.0".to_owned(), 4);
        hash
    }

    #[test]
    fn children_are_probed_by_consecutive_cursors() {
        let lens = HashedTreeLens::new(".");
        let tree = HashedTree::new("0", table());
        let children = lens.children_of(&tree).unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].cursor, "0.0");
        assert_eq!(children[1].cursor, "0.1");
        assert!(lens.children_of(&children[0]).unwrap().is_empty());
    }

    #[test]
    fn dangling_cursor_is_a_contract_error() {
        let lens = HashedTreeLens::<u32>::new(".");
        let tree = HashedTree::new("9", table());
        let err = lens.label_of(&tree).unwrap_err();
        assert_eq!(err.accessor, "label_of");
    }

    #[test]
    fn round_trip_law() {
        let lens = HashedTreeLens::new(".");
        let tree = HashedTree::new("0", table());
        let label = lens.label_of(&tree).unwrap();
        let children = lens.children_of(&tree).unwrap();
        let rebuilt = lens.construct(label.clone(), children.clone());
        assert_eq!(lens.label_of(&rebuilt).unwrap(), label);
        assert_eq!(lens.children_of(&rebuilt).unwrap(), children);
    }

    #[test]
    fn mapping_rewrites_every_table_entry() {
        let mapped =
            map_over_hashed_tree(".", |value| value * 10, &HashedTree::new("0", table())).unwrap();
        assert_eq!(mapped.cursor, "0");
        assert_eq!(mapped.hash["0"], 10);
        assert_eq!(mapped.hash["0.0"], 20);
        assert_eq!(mapped.hash["0.1"], 30);
        assert_eq!(mapped.hash["0.1.0"], 40);
        assert_eq!(mapped.hash.len(), 4);
    }
}
