//! Operations derived from the traversal engine.
//!
//! This includes:
//! - [`map_over_tree`], [`prune_when`] and [`switch_tree_encoding`] — postorder reconstruction
//!   through a path-keyed scratch table
//! - [`reduce_tree`] and [`for_each_in_tree`] — strategy-by-name dispatch over the three
//!   traversal adapters
//!
//! Everything here is expressed purely in terms of the engine and the [`TreeLens`] contract;
//! none of it assumes a concrete tree representation.
//!
//! [`map_over_tree`]: fn.map_over_tree.html " "
//! [`prune_when`]: fn.prune_when.html " "
//! [`switch_tree_encoding`]: fn.switch_tree_encoding.html " "
//! [`reduce_tree`]: fn.reduce_tree.html " "
//! [`for_each_in_tree`]: fn.for_each_in_tree.html " "
//! [`TreeLens`]: ../trait.TreeLens.html " "

mod dispatch;
mod rebuild;

pub use dispatch::*;
pub use rebuild::*;

#[cfg(all(test, feature = "label_tree"))]
mod tests;
