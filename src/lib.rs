//! Generic work-list tree traversal: fold, map, prune and convert arbitrary tree encodings
//! through pluggable lenses.
//!
//! ------------------------
//!
//! # Overview
//! Canopy walks trees it knows nothing about. A tree encoding plugs into the engine by
//! implementing [`TreeLens`], a three-operation capability set: extract a node's label, extract
//! its ordered children, and build a new node from a label and a children sequence. Everything
//! else is derived from a single work-list loop over that contract:
//!
//! - breadth-first, preorder and postorder folds ([`breadth_first_traverse_tree`],
//!   [`preorder_traverse_tree`], [`post_order_traverse_tree`]);
//! - structure-preserving label mapping ([`map_over_tree`]);
//! - conditional pruning ([`prune_when`]);
//! - conversion between two encodings of the same data ([`switch_tree_encoding`]);
//! - strategy-by-name dispatch ([`reduce_tree`], [`for_each_in_tree`]).
//!
//! The loop never recurses: all three strategies run on a flat frontier, postorder included,
//! which requeues a branch node behind its own children to simulate the unwind phase of a
//! recursive traversal. Stack depth stays constant no matter how deep the tree is.
//!
//! The engine assumes trees are finite and acyclic and performs no cycle detection; feeding it
//! a cyclic structure through a lens will loop forever.
//!
//! # Tree encodings
//! Four encodings ship with the crate, each behind its own feature flag (all enabled by
//! default):
//! - [`label_tree`] - the plain label-plus-children record.
//! - [`array_tree`] - labels paired with nested child arrays, leaves collapsed to bare labels.
//! - [`hashed_tree`] - a flat path-indexed table of labels addressed by cursor strings.
//! - [`json_tree`] - nested [`serde_json`] objects viewed as trees of single-key maps.
//!
//! # Example
//! ```rust
//! use canopy::{
//!     label_tree::{LabelTree, LabelTreeLens},
//!     traversal::{Concat, TraversalState, TraverseSpec, TreePath, VisitStep},
//!     preorder_traverse_tree,
//! };
//!
//! let tree = LabelTree::branch("root", vec![
//!     LabelTree::new("left"),
//!     LabelTree::new("right"),
//! ]);
//!
//! let labels = preorder_traverse_tree(
//!     &LabelTreeLens::new(),
//!     TraverseSpec::fold(
//!         Concat::new(),
//!         |_state: &TraversalState, _path: &TreePath, label, children, _node: &LabelTree<&str>| {
//!             VisitStep::new(vec![label], children)
//!         },
//!     ),
//!     &tree,
//! ).unwrap();
//!
//! assert_eq!(labels, ["root", "left", "right"]);
//! ```
//!
//! # Feature flags
//! - `label_tree` (**enabled by default**) - the [`label_tree`] encoding.
//! - `array_tree` (**enabled by default**) - the [`array_tree`] encoding.
//! - `hashed_tree` (**enabled by default**) - the [`hashed_tree`] encoding.
//! - `json_tree` (**enabled by default**) - the [`json_tree`] encoding, pulls in `serde_json`.
//!
//! # Public dependencies
//! - `smallvec` (**required**) - `^1`
//! - `serde_json` (*optional*) - `^1`
//!
//! [`TreeLens`]: traversal/trait.TreeLens.html " "
//! [`breadth_first_traverse_tree`]: traversal/fn.breadth_first_traverse_tree.html " "
//! [`preorder_traverse_tree`]: traversal/fn.preorder_traverse_tree.html " "
//! [`post_order_traverse_tree`]: traversal/fn.post_order_traverse_tree.html " "
//! [`map_over_tree`]: traversal/algorithms/fn.map_over_tree.html " "
//! [`prune_when`]: traversal/algorithms/fn.prune_when.html " "
//! [`switch_tree_encoding`]: traversal/algorithms/fn.switch_tree_encoding.html " "
//! [`reduce_tree`]: traversal/algorithms/fn.reduce_tree.html " "
//! [`for_each_in_tree`]: traversal/algorithms/fn.for_each_in_tree.html " "
//! [`label_tree`]: label_tree/index.html " "
//! [`array_tree`]: array_tree/index.html " "
//! [`hashed_tree`]: hashed_tree/index.html " "
//! [`json_tree`]: json_tree/index.html " "

#![warn(
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::map_unwrap_or,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::single_match_else,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::unwrap_used, // Only .expect() allowed
)]
#![deny(anonymous_parameters, bare_trait_objects)]

pub mod traversal;
#[doc(no_inline)]
pub use traversal::{
    algorithms::{for_each_in_tree, map_over_tree, prune_when, reduce_tree, switch_tree_encoding},
    breadth_first_traverse_tree, post_order_traverse_tree, preorder_traverse_tree, TraversalState,
    TraverseSpec, TreeLens, TreePath, VisitStep,
};

#[cfg(feature = "label_tree")]
pub mod label_tree;
#[cfg(feature = "label_tree")]
pub use label_tree::LabelTree;

#[cfg(feature = "array_tree")]
pub mod array_tree;
#[cfg(feature = "array_tree")]
pub use array_tree::ArrayTree;

#[cfg(feature = "hashed_tree")]
pub mod hashed_tree;
#[cfg(feature = "hashed_tree")]
pub use hashed_tree::HashedTree;

#[cfg(feature = "json_tree")]
pub mod json_tree;

/// A prelude for using Canopy, containing the most used types in a renamed form for safe
/// glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        traversal::{
            TraverseSpec as TreeTraverseSpec, TreeLens, TreePath as TreeCursorPath,
            VisitStep as TreeVisitStep,
        },
        Strategy as TreeStrategy,
    };
    #[cfg(feature = "label_tree")]
    #[doc(no_inline)]
    pub use crate::label_tree::{LabelTree, LabelTreeLens};
    #[cfg(feature = "array_tree")]
    #[doc(no_inline)]
    pub use crate::array_tree::{ArrayTree, ArrayTreeLens};
    #[cfg(feature = "hashed_tree")]
    #[doc(no_inline)]
    pub use crate::hashed_tree::{HashedTree, HashedTreeLens};
    #[cfg(feature = "json_tree")]
    #[doc(no_inline)]
    pub use crate::json_tree::JsonTreeLens;
}

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use thiserror::Error;

/// The order in which a traversal visits nodes.
///
/// The by-name dispatch wrappers ([`reduce_tree`] and [`for_each_in_tree`]) recognize exactly
/// the three tags produced by [`tag`](#method.tag); anything else is a [`StrategyError`].
///
/// [`reduce_tree`]: traversal/algorithms/fn.reduce_tree.html " "
/// [`for_each_in_tree`]: traversal/algorithms/fn.for_each_in_tree.html " "
/// [`StrategyError`]: struct.StrategyError.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Visit nodes level by level, left to right.
    BreadthFirst,
    /// Visit every node before any of its descendants, left to right.
    PreOrder,
    /// Visit every node after all of its descendants, left to right.
    PostOrder,
}
impl Strategy {
    /// Returns the wire name of the strategy, as recognized by the dispatch wrappers.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::PreOrder => "PRE_ORDER",
            Self::PostOrder => "POST_ORDER",
        }
    }
}
impl Display for Strategy {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}
impl FromStr for Strategy {
    type Err = StrategyError;
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BFS" => Ok(Self::BreadthFirst),
            "PRE_ORDER" => Ok(Self::PreOrder),
            "POST_ORDER" => Ok(Self::PostOrder),
            other => Err(StrategyError {
                tag: other.to_owned(),
            }),
        }
    }
}

/// The error produced by the dispatch wrappers when a strategy tag is not one of the three
/// recognized values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tree traversal strategy `{tag}`")]
pub struct StrategyError {
    /// The tag that failed to parse.
    pub tag: String,
}

/// The error produced by a lens accessor which refuses a node it cannot interpret.
///
/// The engine propagates these unmodified; it never catches or wraps them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lens contract violation in `{accessor}`: {reason}")]
pub struct LensContractError {
    /// The name of the lens accessor that rejected the node.
    pub accessor: &'static str,
    /// What was unexpected about the node's shape.
    pub reason: String,
}
impl LensContractError {
    /// Creates a contract error for the named accessor.
    #[inline]
    pub fn new(accessor: &'static str, reason: impl Into<String>) -> Self {
        Self {
            accessor,
            reason: reason.into(),
        }
    }
}

/// Any error a dispatched traversal can end with.
///
/// Both kinds are fatal to the traversal in progress: there are no partial results and nothing
/// is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraverseError {
    /// The strategy tag was not recognized.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    /// A lens accessor rejected a node.
    #[error(transparent)]
    Lens(#[from] LensContractError),
}
