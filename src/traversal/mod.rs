//! The generic work-list traversal engine and the contracts it is built from.
//!
//! The module is home to the following items:
//! - [`TreeLens`] — *the trait a tree encoding implements* to plug into the engine
//! - [`TreePath`] and [`TraversalState`] — per-traversal node identity and bookkeeping
//! - [`Frontier`] with its [`FifoFrontier`] and [`LifoFrontier`] disciplines — the work-list
//!   abstraction whose insertion order is the only difference between the strategies
//! - [`Accumulator`] with the [`Concat`], [`Discard`] and [`Replace`] instances — the monoid
//!   combining per-node visit values
//! - [`TraverseSpec`] and [`VisitStep`] — what a caller supplies to and returns from a visit
//! - The three strategy adapters: [`breadth_first_traverse_tree`],
//!   [`preorder_traverse_tree`] and [`post_order_traverse_tree`]
//! - Derived operations, in the [`algorithms`] module
//!
//! All three adapters run the same single loop: remove one node from the frontier, read its
//! label and children through the lens, let the visit callback fold a value and shape the batch
//! of children to enqueue, record the children's paths, and push the batch back onto the
//! frontier. Postorder is not a separate algorithm; it is the preorder discipline with a
//! decorated visit that holds a branch node back until everything below it has been processed
//! (see [`post_order_traverse_tree`] for the mechanism).
//!
//! [`TreeLens`]: trait.TreeLens.html " "
//! [`TreePath`]: struct.TreePath.html " "
//! [`TraversalState`]: struct.TraversalState.html " "
//! [`Frontier`]: trait.Frontier.html " "
//! [`FifoFrontier`]: struct.FifoFrontier.html " "
//! [`LifoFrontier`]: struct.LifoFrontier.html " "
//! [`Accumulator`]: trait.Accumulator.html " "
//! [`Concat`]: struct.Concat.html " "
//! [`Discard`]: struct.Discard.html " "
//! [`Replace`]: struct.Replace.html " "
//! [`TraverseSpec`]: struct.TraverseSpec.html " "
//! [`VisitStep`]: struct.VisitStep.html " "
//! [`breadth_first_traverse_tree`]: fn.breadth_first_traverse_tree.html " "
//! [`preorder_traverse_tree`]: fn.preorder_traverse_tree.html " "
//! [`post_order_traverse_tree`]: fn.post_order_traverse_tree.html " "
//! [`algorithms`]: algorithms/index.html " "

pub mod algorithms;

mod accumulator;
mod frontier;
mod path;
mod state;

pub use accumulator::{Accumulator, Concat, Discard, Replace};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier};
pub use path::TreePath;
pub use state::TraversalState;

use crate::LensContractError;
use core::fmt::{self, Debug, Formatter};
use log::trace;

/// The capability set a tree encoding must expose to be traversable.
///
/// A lens is the only way the engine ever touches a tree: nodes are opaque handles, owned by
/// the caller and never mutated. `label_of` and `children_of` may refuse a node whose shape
/// they cannot interpret; the resulting [`LensContractError`] aborts the traversal and reaches
/// the caller unmodified.
///
/// # The round-trip law
/// For any conforming lens, constructing a node and reading it back must be lossless:
/// `children_of(construct(l, cs))` yields `cs` and `label_of(construct(l, cs))` yields `l`.
/// The reconstruction operations ([`map_over_tree`] and friends) rely on this to guarantee
/// shape preservation.
///
/// [`LensContractError`]: ../struct.LensContractError.html " "
/// [`map_over_tree`]: algorithms/fn.map_over_tree.html " "
pub trait TreeLens {
    /// The node handle of this encoding. Cloned when enqueued, so it should be cheap to clone
    /// or the cost must be acceptable to the caller.
    type Node: Clone;
    /// The payload attached to a node.
    type Label;

    /// Extracts the node's label.
    fn label_of(&self, node: &Self::Node) -> Result<Self::Label, LensContractError>;
    /// Extracts the node's ordered children. Order is traversal-significant.
    fn children_of(&self, node: &Self::Node) -> Result<Vec<Self::Node>, LensContractError>;
    /// Builds a new node from a label and a children sequence.
    fn construct(&self, label: Self::Label, children: Vec<Self::Node>) -> Self::Node;
}
impl<L: TreeLens> TreeLens for &L {
    type Node = L::Node;
    type Label = L::Label;
    #[inline]
    fn label_of(&self, node: &Self::Node) -> Result<Self::Label, LensContractError> {
        (*self).label_of(node)
    }
    #[inline]
    fn children_of(&self, node: &Self::Node) -> Result<Vec<Self::Node>, LensContractError> {
        (*self).children_of(node)
    }
    #[inline]
    fn construct(&self, label: Self::Label, children: Vec<Self::Node>) -> Self::Node {
        (*self).construct(label, children)
    }
}

/// What a visit callback hands back to the engine: the folded value for this node and the
/// children to enqueue.
///
/// Returning fewer children than the lens reported is how a visit prunes or short-circuits a
/// branch under breadth-first and preorder strategies. Postorder visits fire only once a node's
/// real children are already processed, so their returned children are ignored; it is too late
/// to prune there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitStep<N, V> {
    /// The value this node contributes to the accumulator.
    pub value: V,
    /// The children to enqueue, in order.
    pub children: Vec<N>,
}
impl<N, V> VisitStep<N, V> {
    /// Creates a visit step from a fold value and the children to keep traversing.
    #[inline]
    pub fn new(value: V, children: Vec<N>) -> Self {
        Self { value, children }
    }
}

/// The caller-supplied half of a traversal: the visit callback, the accumulator monoid and the
/// finalize step run once the frontier drains.
///
/// The visit callback receives the read-only [`TraversalState`], the current node's
/// [`TreePath`], its label, its children as read through the lens, and the node itself.
///
/// [`TraversalState`]: struct.TraversalState.html " "
/// [`TreePath`]: struct.TreePath.html " "
pub struct TraverseSpec<Vis, A, Fin> {
    /// Called once per processed node.
    pub visit: Vis,
    /// The monoid folding visit values together.
    pub accumulator: A,
    /// Extracts the final result from the accumulated total and the traversal state.
    pub finalize: Fin,
}
impl<Vis, A, Fin> TraverseSpec<Vis, A, Fin> {
    /// Assembles a traversal spec from its three parts.
    #[inline]
    pub fn new(accumulator: A, visit: Vis, finalize: Fin) -> Self {
        Self {
            visit,
            accumulator,
            finalize,
        }
    }
}
impl<Vis, A: Accumulator> TraverseSpec<Vis, A, fn(A::Value, &TraversalState) -> A::Value> {
    /// Assembles a plain fold: the result is the accumulated total itself.
    #[inline]
    pub fn fold(accumulator: A, visit: Vis) -> Self {
        Self {
            visit,
            accumulator,
            finalize: |total, _state| total,
        }
    }
}
impl<Vis, A: Debug, Fin> Debug for TraverseSpec<Vis, A, Fin> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraverseSpec")
            .field("visit", &format_args!(".."))
            .field("accumulator", &self.accumulator)
            .field("finalize", &format_args!(".."))
            .finish()
    }
}

/// A frontier entry: a node handle together with the path assigned at discovery.
///
/// Carrying the path in the work item is what makes path assignment idempotent: when postorder
/// requeues a node behind its own children, the requeued item keeps the path recorded at first
/// discovery instead of being assigned a fresh one.
struct WorkItem<N> {
    path: TreePath,
    node: N,
}

/// What a decorated (engine-level) visit produces; `requeue` re-enqueues the current item at
/// the tail of its own children batch.
struct EngineStep<N, V> {
    value: V,
    children: Vec<N>,
    requeue: bool,
}

/// The single work-list loop all strategies share.
///
/// Termination requires the tree to be finite and acyclic; no cycle guard is performed.
fn drive<S, L, A, Vis, Fin, R>(
    lens: &L,
    accumulator: &A,
    mut visit: Vis,
    finalize: Fin,
    root: &L::Node,
) -> Result<R, LensContractError>
where
    S: Frontier<WorkItem<L::Node>>,
    L: TreeLens,
    A: Accumulator,
    Vis: FnMut(
        &TraversalState,
        &TreePath,
        L::Label,
        Vec<L::Node>,
        &L::Node,
    ) -> EngineStep<L::Node, A::Value>,
    Fin: FnOnce(A::Value, &TraversalState) -> R,
{
    let mut store = S::new();
    let mut state = TraversalState::new();
    let mut total = accumulator.empty();
    let mut steps = 0_usize;

    let root_path = TreePath::root();
    state.discover(root_path.clone());
    store.add(vec![WorkItem {
        path: root_path,
        node: root.clone(),
    }]);
    trace!("traversal started");

    while let Some(item) = store.take_one() {
        steps += 1;
        let children = lens.children_of(&item.node)?;
        let label = lens.label_of(&item.node)?;
        let step = visit(&state, &item.path, label, children, &item.node);

        let mut batch = Vec::with_capacity(step.children.len() + usize::from(step.requeue));
        for (index, child) in step.children.into_iter().enumerate() {
            let path = item.path.child(index);
            // Idempotent: a position discovered earlier keeps its original entry.
            state.discover(path.clone());
            batch.push(WorkItem { path, node: child });
        }
        if step.requeue {
            batch.push(WorkItem {
                path: item.path.clone(),
                node: item.node,
            });
        }
        if !batch.is_empty() {
            state.mark_visited(&item.path);
        }

        total = accumulator.combine(total, step.value);
        store.add(batch);
    }

    trace!(
        "traversal finished: {} steps, {} positions discovered",
        steps,
        state.len()
    );
    Ok(finalize(total, &state))
}

/// Traverses the tree level by level, left to right, folding visit values in that order.
///
/// # Example
/// ```rust
/// use canopy::{
///     label_tree::{LabelTree, LabelTreeLens},
///     traversal::{Concat, TraversalState, TraverseSpec, TreePath, VisitStep},
///     breadth_first_traverse_tree,
/// };
///
/// let tree = LabelTree::branch("root", vec![
///     LabelTree::branch("a", vec![LabelTree::new("a0")]),
///     LabelTree::new("b"),
/// ]);
/// let labels = breadth_first_traverse_tree(
///     &LabelTreeLens::new(),
///     TraverseSpec::fold(
///         Concat::new(),
///         |_state: &TraversalState, _path: &TreePath, label, children, _node: &LabelTree<&str>| {
///             VisitStep::new(vec![label], children)
///         },
///     ),
///     &tree,
/// ).unwrap();
/// // Both children come before the grandchild:
/// assert_eq!(labels, ["root", "a", "b", "a0"]);
/// ```
pub fn breadth_first_traverse_tree<L, A, Vis, Fin, R>(
    lens: &L,
    traverse: TraverseSpec<Vis, A, Fin>,
    root: &L::Node,
) -> Result<R, LensContractError>
where
    L: TreeLens,
    A: Accumulator,
    Vis: FnMut(
        &TraversalState,
        &TreePath,
        L::Label,
        Vec<L::Node>,
        &L::Node,
    ) -> VisitStep<L::Node, A::Value>,
    Fin: FnOnce(A::Value, &TraversalState) -> R,
{
    let TraverseSpec {
        mut visit,
        accumulator,
        finalize,
    } = traverse;
    drive::<FifoFrontier<_>, _, _, _, _, _>(
        lens,
        &accumulator,
        move |state, path, label, children, node| {
            let step = visit(state, path, label, children, node);
            EngineStep {
                value: step.value,
                children: step.children,
                requeue: false,
            }
        },
        finalize,
        root,
    )
}

/// Traverses the tree depth-first, visiting every node before its descendants, left to right.
///
/// Only the frontier discipline differs from [`breadth_first_traverse_tree`]: child batches are
/// inserted at the head of the work-list instead of its tail.
///
/// [`breadth_first_traverse_tree`]: fn.breadth_first_traverse_tree.html " "
pub fn preorder_traverse_tree<L, A, Vis, Fin, R>(
    lens: &L,
    traverse: TraverseSpec<Vis, A, Fin>,
    root: &L::Node,
) -> Result<R, LensContractError>
where
    L: TreeLens,
    A: Accumulator,
    Vis: FnMut(
        &TraversalState,
        &TreePath,
        L::Label,
        Vec<L::Node>,
        &L::Node,
    ) -> VisitStep<L::Node, A::Value>,
    Fin: FnOnce(A::Value, &TraversalState) -> R,
{
    let TraverseSpec {
        mut visit,
        accumulator,
        finalize,
    } = traverse;
    drive::<LifoFrontier<_>, _, _, _, _, _>(
        lens,
        &accumulator,
        move |state, path, label, children, node| {
            let step = visit(state, path, label, children, node);
            EngineStep {
                value: step.value,
                children: step.children,
                requeue: false,
            }
        },
        finalize,
        root,
    )
}

/// Traverses the tree depth-first, visiting every node after all of its descendants, left to
/// right.
///
/// This is preorder traversal with a decorated visit, not a separate algorithm. A node is
/// *resolved* once it has no children or its children have already been enqueued. A resolved
/// node fires the user visit; an unresolved one contributes `empty()` to the accumulator and is
/// requeued *behind its own children*, so it is processed a second time once everything below
/// it is done. That requeue is a flat-work-list simulation of the unwind phase of recursive
/// postorder, at the cost of one boolean per node.
///
/// Every node fires the user visit exactly once, and all of its descendants fire strictly
/// before it. The children a postorder visit returns are ignored: the subtree is already
/// processed, so it is too late to prune or extend it.
pub fn post_order_traverse_tree<L, A, Vis, Fin, R>(
    lens: &L,
    traverse: TraverseSpec<Vis, A, Fin>,
    root: &L::Node,
) -> Result<R, LensContractError>
where
    L: TreeLens,
    A: Accumulator,
    Vis: FnMut(
        &TraversalState,
        &TreePath,
        L::Label,
        Vec<L::Node>,
        &L::Node,
    ) -> VisitStep<L::Node, A::Value>,
    Fin: FnOnce(A::Value, &TraversalState) -> R,
{
    let TraverseSpec {
        visit,
        accumulator,
        finalize,
    } = traverse;
    post_order_gated(
        lens,
        &accumulator,
        |_node, _path, _state| false,
        visit,
        finalize,
        root,
    )
}

/// Postorder with a children gate evaluated ahead of the resolution check.
///
/// When the gate holds for a node, its children are dropped before they can be enqueued and
/// the node resolves immediately as a leaf. This is what the pruning operation builds on: the
/// gate must run before resolution, or the descendants would already be on the frontier.
pub(crate) fn post_order_gated<L, A, Gate, Vis, Fin, R>(
    lens: &L,
    accumulator: &A,
    mut gate: Gate,
    mut visit: Vis,
    finalize: Fin,
    root: &L::Node,
) -> Result<R, LensContractError>
where
    L: TreeLens,
    A: Accumulator,
    Gate: FnMut(&L::Node, &TreePath, &TraversalState) -> bool,
    Vis: FnMut(
        &TraversalState,
        &TreePath,
        L::Label,
        Vec<L::Node>,
        &L::Node,
    ) -> VisitStep<L::Node, A::Value>,
    Fin: FnOnce(A::Value, &TraversalState) -> R,
{
    let decorated = move |state: &TraversalState,
                          path: &TreePath,
                          label: L::Label,
                          mut children: Vec<L::Node>,
                          node: &L::Node| {
        if gate(node, path, state) {
            children.clear();
        }
        if children.is_empty() || state.visited(path) {
            // Resolved: leaf, pruned, or second pass after the children ran.
            let step = visit(state, path, label, children, node);
            EngineStep {
                value: step.value,
                children: Vec::new(),
                requeue: false,
            }
        } else {
            // First pass over a branch node: hold the visit back and requeue the node behind
            // its own children.
            EngineStep {
                value: accumulator.empty(),
                children,
                requeue: true,
            }
        }
    };
    drive::<LifoFrontier<_>, _, _, _, _, _>(lens, accumulator, decorated, finalize, root)
}
