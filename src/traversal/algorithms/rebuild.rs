use super::super::{post_order_gated, Discard, TraversalState, TreeLens, TreePath, VisitStep};
use crate::LensContractError;
use std::collections::HashMap;

/// The shared reconstruction loop behind mapping, pruning and conversion.
///
/// Runs postorder over the origin lens; every resolved node transforms its label, collects its
/// already rebuilt children from a path-keyed scratch table and stores its own rebuilt node
/// under its path. Once the frontier drains, the entry at the root path is the whole rebuilt
/// tree. Children are `remove`d from the table as they are consumed, so every rebuilt node is
/// moved into its parent exactly once.
fn rebuild_tree<A, B, M, G>(
    origin: &A,
    target: &B,
    mut map_label: M,
    gate: G,
    root: &A::Node,
) -> Result<B::Node, LensContractError>
where
    A: TreeLens,
    B: TreeLens<Label = A::Label>,
    M: FnMut(A::Label) -> B::Label,
    G: FnMut(&A::Node, &TreePath, &TraversalState) -> bool,
{
    let mut built: HashMap<TreePath, B::Node> = HashMap::new();
    post_order_gated(
        origin,
        &Discard,
        gate,
        |_state, path, label, children, _node| {
            let arity = children.len();
            let rebuilt_children = (0..arity)
                .map(|index| {
                    built
                        .remove(&path.child(index))
                        .expect("child missing from the scratch table at its parent's turn")
                })
                .collect();
            built.insert(path.clone(), target.construct(map_label(label), rebuilt_children));
            VisitStep::new((), children)
        },
        |_total, _state| (),
        root,
    )?;
    Ok(built
        .remove(&TreePath::root())
        .expect("postorder left no rebuilt tree at the root path"))
}

/// Applies a function to every label of a tree, keeping the tree structure.
///
/// The result has the same child count and order at every position as the input; only labels
/// differ. An identity function therefore rebuilds a structurally equal tree. The traversal
/// strategy is not a parameter: every node is reached regardless, and the function is assumed
/// to be pure.
///
/// # Example
/// ```rust
/// use canopy::{label_tree::{LabelTree, LabelTreeLens}, map_over_tree};
///
/// let tree = LabelTree::branch("a".to_owned(), vec![LabelTree::new("b".to_owned())]);
/// let shouted = map_over_tree(&LabelTreeLens::new(), |label| label.to_uppercase(), &tree).unwrap();
/// assert_eq!(
///     shouted,
///     LabelTree::branch("A".to_owned(), vec![LabelTree::new("B".to_owned())]),
/// );
/// ```
pub fn map_over_tree<L, M>(lens: &L, map_fn: M, root: &L::Node) -> Result<L::Node, LensContractError>
where
    L: TreeLens,
    M: FnMut(L::Label) -> L::Label,
{
    rebuild_tree(lens, lens, map_fn, |_node, _path, _state| false, root)
}

/// Rebuilds the tree with the children of every node matching the predicate cut off.
///
/// A matching node is retained, childless; its descendants are never enqueued at all rather
/// than visited and discarded. The predicate sees the node, its path and the traversal state,
/// and must be pure. A predicate that never matches rebuilds the tree unchanged.
pub fn prune_when<L, P>(lens: &L, predicate: P, root: &L::Node) -> Result<L::Node, LensContractError>
where
    L: TreeLens,
    P: FnMut(&L::Node, &TreePath, &TraversalState) -> bool,
{
    rebuild_tree(lens, lens, |label| label, predicate, root)
}

/// Rebuilds a tree read through the `origin` lens into the encoding of the `target` lens.
///
/// The two encodings must agree on the label type. The result is structurally equivalent to
/// the input: same labels, same child counts and order at every position, so for
/// shape-preserving lens pairs converting there and back yields the original tree.
///
/// # Example
/// ```rust
/// use canopy::{
///     array_tree::{ArrayTree, ArrayTreeLens},
///     label_tree::{LabelTree, LabelTreeLens},
///     switch_tree_encoding,
/// };
///
/// let tree = LabelTree::branch(1, vec![LabelTree::new(2)]);
/// let converted = switch_tree_encoding(&LabelTreeLens::new(), &ArrayTreeLens::new(), &tree).unwrap();
/// assert_eq!(converted, ArrayTree::Branch(1, vec![ArrayTree::Leaf(2)]));
/// ```
pub fn switch_tree_encoding<A, B>(
    origin: &A,
    target: &B,
    root: &A::Node,
) -> Result<B::Node, LensContractError>
where
    A: TreeLens,
    B: TreeLens<Label = A::Label>,
{
    rebuild_tree(origin, target, |label| label, |_node, _path, _state| false, root)
}
