use super::super::{
    breadth_first_traverse_tree, post_order_traverse_tree, preorder_traverse_tree, Accumulator,
    Discard, TraversalState, TraverseSpec, TreeLens, TreePath, VisitStep,
};
use crate::{Strategy, TraverseError};

/// Folds a tree with the traversal strategy selected by name.
///
/// The recognized tags are `"BFS"`, `"PRE_ORDER"` and `"POST_ORDER"`; each behaves exactly like
/// calling the corresponding adapter directly. Anything else fails with
/// [`TraverseError::Strategy`] before touching the tree.
///
/// [`TraverseError::Strategy`]: ../../enum.TraverseError.html#variant.Strategy " "
pub fn reduce_tree<L, A, Vis, Fin, R>(
    lens: &L,
    strategy: &str,
    traverse: TraverseSpec<Vis, A, Fin>,
    root: &L::Node,
) -> Result<R, TraverseError>
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
    let result = match strategy.parse::<Strategy>()? {
        Strategy::BreadthFirst => breadth_first_traverse_tree(lens, traverse, root),
        Strategy::PreOrder => preorder_traverse_tree(lens, traverse, root),
        Strategy::PostOrder => post_order_traverse_tree(lens, traverse, root),
    }?;
    Ok(result)
}

/// Applies an action to every node of a tree, with the traversal strategy selected by name.
///
/// This is [`reduce_tree`] specialized with a result-discarding accumulator. The strategy does
/// matter here: the action runs once per node *in visit order*, so ordering-sensitive side
/// effects (logging, counters) can rely on it.
///
/// [`reduce_tree`]: fn.reduce_tree.html " "
pub fn for_each_in_tree<L, Act>(
    lens: &L,
    strategy: &str,
    mut action: Act,
    root: &L::Node,
) -> Result<(), TraverseError>
where
    L: TreeLens,
    Act: FnMut(&L::Node, &TreePath, &TraversalState),
{
    reduce_tree(
        lens,
        strategy,
        TraverseSpec::new(
            Discard,
            move |state: &TraversalState,
                  path: &TreePath,
                  _label: L::Label,
                  children: Vec<L::Node>,
                  node: &L::Node| {
                action(node, path, state);
                VisitStep::new((), children)
            },
            |_total: (), _state: &TraversalState| (),
        ),
        root,
    )
}
