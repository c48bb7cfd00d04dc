//! Nested JSON objects viewed as trees of single-key maps.
//!
//! A node in this encoding is a [`serde_json::Value`] that must be an object with exactly one
//! entry: the key is the node's name, the value its content. If the content is itself an
//! object, each of its entries becomes a child node (wrapped back into a single-key object);
//! any other content makes the node a leaf. Any other node shape is a [`LensContractError`].
//!
//! Two helpers cover the common whole-document uses: [`map_over_json`] rewrites keys and leaf
//! values in place, and [`traverse_json`] folds over a document's entries with a by-name
//! strategy. Both wrap the document under a synthetic `root` key first, since an arbitrary
//! JSON document is not itself a single-key object.
//!
//! Note that `serde_json` object entries iterate in key order, so sibling order in this
//! encoding is alphabetical by key.
//!
//! [`serde_json::Value`]: https://docs.rs/serde_json/*/serde_json/enum.Value.html " "
//! [`LensContractError`]: ../struct.LensContractError.html " "
//! [`map_over_json`]: fn.map_over_json.html " "
//! [`traverse_json`]: fn.traverse_json.html " "

use crate::{
    map_over_tree, reduce_tree,
    traversal::{Accumulator, TraversalState, TraverseSpec, TreeLens, TreePath, VisitStep},
    LensContractError, TraverseError,
};
use serde_json::{Map, Value};

/// The label of a JSON tree node: its key and its raw content value.
///
/// For branch nodes `value` is the whole object the children were derived from; reconstruction
/// replaces it with the rebuilt children, so label transforms should only rewrite `value` on
/// leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonLabel {
    /// The single key of the node object.
    pub key: String,
    /// The content under that key.
    pub value: Value,
}
impl JsonLabel {
    /// Returns `true` if a node with this label has no children, i.e. its content is anything
    /// but a non-empty object.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        !matches!(&self.value, Value::Object(map) if !map.is_empty())
    }
}

/// The lens over single-key JSON objects.
#[derive(Copy, Clone, Debug, Default)]
pub struct JsonTreeLens;

fn single_entry<'a>(
    node: &'a Value,
    accessor: &'static str,
) -> Result<(&'a String, &'a Value), LensContractError> {
    match node {
        Value::Object(map) if map.len() == 1 => {
            Ok(map.iter().next().expect("a one-entry map has a first entry"))
        }
        other => Err(LensContractError::new(
            accessor,
            format!("expected a single-key object, got `{}`", other),
        )),
    }
}

fn single_key_object(key: String, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key, value);
    Value::Object(map)
}

impl TreeLens for JsonTreeLens {
    type Node = Value;
    type Label = JsonLabel;

    fn label_of(&self, node: &Self::Node) -> Result<Self::Label, LensContractError> {
        let (key, value) = single_entry(node, "label_of")?;
        Ok(JsonLabel {
            key: key.clone(),
            value: value.clone(),
        })
    }

    fn children_of(&self, node: &Self::Node) -> Result<Vec<Self::Node>, LensContractError> {
        let (_, value) = single_entry(node, "children_of")?;
        match value {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(key, value)| single_key_object(key.clone(), value.clone()))
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    fn construct(&self, label: Self::Label, children: Vec<Self::Node>) -> Self::Node {
        if children.is_empty() {
            single_key_object(label.key, label.value)
        } else {
            let merged = children
                .into_iter()
                .fold(Map::new(), |mut merged, child| {
                    if let Value::Object(map) = child {
                        merged.extend(map);
                    }
                    merged
                });
            single_key_object(label.key, Value::Object(merged))
        }
    }
}

/// Rewrites a JSON document in place: every key through `map_key`, every non-empty leaf value
/// through `map_leaf`. Empty objects are kept as they are, and branch content is rebuilt from
/// the mapped children.
///
/// The document is wrapped under a synthetic `root` key for the traversal; `map_key` applies
/// to that synthetic key too, matching what it does to every other key.
///
/// # Example
/// ```rust
/// use canopy::json_tree::map_over_json;
/// use serde_json::{json, Value};
///
/// let doc = json!({ "a": 1, "b": { "c": "x" } });
/// let mapped = map_over_json(
///     |key| format!("K{}", key),
///     |value| Value::String(format!("V{}", value)),
///     &doc,
/// ).unwrap();
/// assert_eq!(mapped, json!({ "Ka": "V1", "Kb": { "Kc": "V\"x\"" } }));
/// ```
pub fn map_over_json<K, V>(
    mut map_key: K,
    mut map_leaf: V,
    value: &Value,
) -> Result<Value, LensContractError>
where
    K: FnMut(&str) -> String,
    V: FnMut(&Value) -> Value,
{
    let mapped_root_key = map_key("root");
    let mapped = map_over_tree(
        &JsonTreeLens,
        |label: JsonLabel| {
            let is_empty_object = matches!(&label.value, Value::Object(map) if map.is_empty());
            let value = if label.is_leaf() && !is_empty_object {
                map_leaf(&label.value)
            } else {
                label.value
            };
            JsonLabel {
                key: map_key(&label.key),
                value,
            }
        },
        &single_key_object("root".to_owned(), value.clone()),
    )?;
    match mapped {
        Value::Object(mut map) => Ok(map
            .remove(&mapped_root_key)
            .expect("reconstruction kept the mapped root key")),
        other => Ok(other),
    }
}

/// Folds over every entry of a JSON document with the traversal strategy selected by name.
///
/// The document is wrapped under a synthetic `root` key; the wrapper node itself is skipped,
/// contributing `empty()` to the accumulator, so the visit only ever sees the document's own
/// entries. Tags and errors behave as in [`reduce_tree`].
///
/// [`reduce_tree`]: ../traversal/algorithms/fn.reduce_tree.html " "
pub fn traverse_json<A, Vis, Fin, R>(
    strategy: &str,
    traverse: TraverseSpec<Vis, A, Fin>,
    value: &Value,
) -> Result<R, TraverseError>
where
    A: Accumulator,
    Vis: FnMut(&TraversalState, &TreePath, JsonLabel, Vec<Value>, &Value) -> VisitStep<Value, A::Value>,
    Fin: FnOnce(A::Value, &TraversalState) -> R,
{
    let TraverseSpec {
        mut visit,
        accumulator,
        finalize,
    } = traverse;
    let root = single_key_object("root".to_owned(), value.clone());
    reduce_tree(
        &JsonTreeLens,
        strategy,
        TraverseSpec::new(
            &accumulator,
            |state: &TraversalState,
             path: &TreePath,
             label: JsonLabel,
             children: Vec<Value>,
             node: &Value| {
                if path.is_root() {
                    VisitStep::new(accumulator.empty(), children)
                } else {
                    visit(state, path, label, children, node)
                }
            },
            finalize,
        ),
        &root,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::Concat;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "componentName": "sinkUpdatingComponent",
            "emits": {
                "identifier": "a_circular_behavior_source",
                "notification": {
                    "kind": "N",
                    "value": { "key": "value" }
                },
                "type": 0
            },
            "id": 3,
            "logType": "runtime",
            "path": [0, 0, 0, 2],
            "settings": {}
        })
    }

    // The loose string coercion the mapped fixture expects.
    fn coerce(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| coerce(item))
                .collect::<Vec<_>>()
                .join(","),
            other => other.to_string(),
        }
    }

    #[test]
    fn non_single_key_objects_are_contract_errors() {
        let err = JsonTreeLens.label_of(&json!({ "a": 1, "b": 2 })).unwrap_err();
        assert_eq!(err.accessor, "label_of");
        let err = JsonTreeLens.children_of(&json!([1, 2])).unwrap_err();
        assert_eq!(err.accessor, "children_of");
    }

    #[test]
    fn round_trip_law() {
        let lens = JsonTreeLens;
        let node = json!({ "emits": { "identifier": "x", "type": 0 } });
        let label = lens.label_of(&node).unwrap();
        let children = lens.children_of(&node).unwrap();
        let rebuilt = lens.construct(label.clone(), children.clone());
        assert_eq!(lens.label_of(&rebuilt).unwrap(), label);
        assert_eq!(lens.children_of(&rebuilt).unwrap(), children);
    }

    #[test]
    fn map_over_json_rewrites_keys_and_leaf_values() {
        let mapped = map_over_json(
            |key| format!("K{}", key),
            |value| Value::String(format!("K{}", coerce(value))),
            &fixture(),
        )
        .unwrap();
        assert_eq!(
            mapped,
            json!({
                "KcomponentName": "KsinkUpdatingComponent",
                "Kemits": {
                    "Kidentifier": "Ka_circular_behavior_source",
                    "Knotification": {
                        "Kkind": "KN",
                        "Kvalue": { "Kkey": "Kvalue" }
                    },
                    "Ktype": "K0"
                },
                "Kid": "K3",
                "KlogType": "Kruntime",
                "Kpath": "K0,0,0,2",
                "Ksettings": {}
            })
        );
    }

    #[test]
    fn traverse_json_walks_entries_breadth_first_and_skips_the_wrapper() {
        let traces = traverse_json(
            "BFS",
            TraverseSpec::fold(
                Concat::new(),
                |_state: &TraversalState, path: &TreePath, label: JsonLabel, children, _node: &Value| {
                    VisitStep::new(vec![format!("{}: {}", path, label.key)], children)
                },
            ),
            &fixture(),
        )
        .unwrap();
        assert_eq!(
            traces,
            [
                "0.0: componentName",
                "0.1: emits",
                "0.2: id",
                "0.3: logType",
                "0.4: path",
                "0.5: settings",
                "0.1.0: identifier",
                "0.1.1: notification",
                "0.1.2: type",
                "0.1.1.0: kind",
                "0.1.1.1: value",
                "0.1.1.1.0: key",
            ]
        );
    }

    #[test]
    fn unknown_strategy_is_reported_before_touching_the_document(){
        let err = traverse_json(
            "IN_ORDER",
            TraverseSpec::fold(
                Concat::<String>::new(),
                |_state: &TraversalState, _path: &TreePath, _label: JsonLabel, children, _node: &Value| {
                    VisitStep::new(vec![], children)
                },
            ),
            &fixture(),
        )
        .unwrap_err();
        assert!(matches!(err, TraverseError::Strategy(_)));
    }
}
