use super::{for_each_in_tree, map_over_tree, prune_when, reduce_tree};
use crate::{
    label_tree::{LabelTree, LabelTreeLens},
    traversal::{breadth_first_traverse_tree, Concat, TraversalState, TraverseSpec, TreePath, VisitStep},
    Strategy, TraverseError,
};
use pretty_assertions::assert_eq;

fn fixture() -> LabelTree<String> {
    LabelTree::branch(
        "root".to_owned(),
        vec![
            LabelTree::new("left".to_owned()),
            LabelTree::branch(
                "middle".to_owned(),
                vec![
                    LabelTree::new("midleft".to_owned()),
                    LabelTree::new("midright".to_owned()),
                ],
            ),
            LabelTree::new("right".to_owned()),
        ],
    )
}

#[test]
fn mapping_identity_rebuilds_an_equal_tree() {
    let lens = LabelTreeLens::new();
    assert_eq!(map_over_tree(&lens, |label| label, &fixture()).unwrap(), fixture());
}

#[test]
fn mapping_rewrites_every_label_in_place() {
    let lens = LabelTreeLens::new();
    let mapped = map_over_tree(&lens, |label| format!("Map:{}", label), &fixture()).unwrap();
    assert_eq!(
        mapped,
        LabelTree::branch(
            "Map:root".to_owned(),
            vec![
                LabelTree::new("Map:left".to_owned()),
                LabelTree::branch(
                    "Map:middle".to_owned(),
                    vec![
                        LabelTree::new("Map:midleft".to_owned()),
                        LabelTree::new("Map:midright".to_owned()),
                    ],
                ),
                LabelTree::new("Map:right".to_owned()),
            ],
        )
    );
}

#[test]
fn mapping_composes() {
    let lens = LabelTreeLens::new();
    let f = |label: String| format!("f({})", label);
    let g = |label: String| format!("g({})", label);
    let two_passes =
        map_over_tree(&lens, g, &map_over_tree(&lens, f, &fixture()).unwrap()).unwrap();
    let one_pass = map_over_tree(&lens, |label| g(f(label)), &fixture()).unwrap();
    assert_eq!(two_passes, one_pass);
}

#[test]
fn pruning_nothing_rebuilds_an_equal_tree() {
    let lens = LabelTreeLens::new();
    let kept = prune_when(&lens, |_node, _path, _state| false, &fixture()).unwrap();
    assert_eq!(kept, fixture());
}

#[test]
fn pruning_cuts_below_matching_nodes_but_keeps_them() {
    let lens = LabelTreeLens::new();
    let pruned = prune_when(
        &lens,
        |_node: &LabelTree<String>, path: &TreePath, _state| path.depth() == 1,
        &fixture(),
    )
    .unwrap();
    assert_eq!(
        pruned,
        LabelTree::branch(
            "root".to_owned(),
            vec![
                LabelTree::new("left".to_owned()),
                LabelTree::new("middle".to_owned()),
                LabelTree::new("right".to_owned()),
            ],
        )
    );
}

#[test]
fn pruning_by_label_drops_a_whole_subtree_of_children() {
    let lens = LabelTreeLens::new();
    let pruned = prune_when(
        &lens,
        |node: &LabelTree<String>, _path, _state| node.label == "middle",
        &fixture(),
    )
    .unwrap();
    assert!(pruned.children[1].is_leaf());
    assert_eq!(pruned.children[1].label, "middle");
    assert_eq!(pruned.children.len(), 3);
}

#[cfg(feature = "array_tree")]
#[test]
fn switching_encodings_preserves_labels_and_shape() {
    use super::switch_tree_encoding;
    use crate::array_tree::{ArrayTree, ArrayTreeLens};

    let converted =
        switch_tree_encoding(&LabelTreeLens::new(), &ArrayTreeLens::new(), &fixture()).unwrap();
    assert_eq!(
        converted,
        ArrayTree::Branch(
            "root".to_owned(),
            vec![
                ArrayTree::Leaf("left".to_owned()),
                ArrayTree::Branch(
                    "middle".to_owned(),
                    vec![
                        ArrayTree::Leaf("midleft".to_owned()),
                        ArrayTree::Leaf("midright".to_owned()),
                    ],
                ),
                ArrayTree::Leaf("right".to_owned()),
            ],
        )
    );
    let back =
        switch_tree_encoding(&ArrayTreeLens::new(), &LabelTreeLens::new(), &converted).unwrap();
    assert_eq!(back, fixture());
}

fn labels_by_tag(tag: &str) -> Result<Vec<String>, TraverseError> {
    reduce_tree(
        &LabelTreeLens::new(),
        tag,
        TraverseSpec::fold(
            Concat::new(),
            |_state: &TraversalState, _path: &TreePath, label, children, _node: &LabelTree<String>| {
                VisitStep::new(vec![label], children)
            },
        ),
        &fixture(),
    )
}

#[test]
fn dispatch_by_name_matches_the_direct_adapters() {
    let direct = breadth_first_traverse_tree(
        &LabelTreeLens::new(),
        TraverseSpec::fold(
            Concat::new(),
            |_state: &TraversalState, _path: &TreePath, label, children, _node: &LabelTree<String>| {
                VisitStep::new(vec![label], children)
            },
        ),
        &fixture(),
    )
    .unwrap();
    assert_eq!(labels_by_tag(Strategy::BreadthFirst.tag()).unwrap(), direct);
    assert_eq!(
        labels_by_tag("PRE_ORDER").unwrap(),
        ["root", "left", "middle", "midleft", "midright", "right"]
    );
    assert_eq!(
        labels_by_tag("POST_ORDER").unwrap(),
        ["left", "midleft", "midright", "middle", "right", "root"]
    );
}

#[test]
fn unknown_tags_are_rejected_with_the_offending_tag() {
    match labels_by_tag("ZIGZAG") {
        Err(TraverseError::Strategy(err)) => assert_eq!(err.tag, "ZIGZAG"),
        other => panic!("expected a strategy error, got {:?}", other),
    }
}

#[test]
fn for_each_runs_the_action_in_visit_order() {
    let mut seen = Vec::new();
    for_each_in_tree(
        &LabelTreeLens::new(),
        "POST_ORDER",
        |node: &LabelTree<String>, path: &TreePath, _state| {
            seen.push((node.label.clone(), path.depth()));
        },
        &fixture(),
    )
    .unwrap();
    assert_eq!(
        seen,
        [
            ("left".to_owned(), 1),
            ("midleft".to_owned(), 2),
            ("midright".to_owned(), 2),
            ("middle".to_owned(), 1),
            ("right".to_owned(), 1),
            ("root".to_owned(), 0),
        ]
    );
}
