//! Structural equivalence between tree fragments and ESTree patterns.
//!
//! Two fragments are equivalent when they have the same node types and field
//! values. Source position and raw-text fields are ignored, and a missing field
//! equals a field holding `null`, `false` or an empty list.

use serde_json::{Map, Value};

use crate::base::{NodeIndex, NodeList};
use crate::estree::node_to_json;
use crate::tree::SyntaxTree;

/// Fields that only describe where or how a node was written.
pub const FORMATTING_FIELDS: [&str; 5] = ["loc", "start", "end", "range", "raw"];

/// Whether the subtree at `index` is structurally equivalent to `pattern`.
pub fn node_matches(tree: &SyntaxTree, index: NodeIndex, pattern: &Value) -> bool {
    normalize(node_to_json(tree, index)) == normalize(pattern.clone())
}

/// Whether `list` is element-wise equivalent to the array `pattern`.
pub fn list_matches(tree: &SyntaxTree, list: &NodeList, pattern: &Value) -> bool {
    let Value::Array(expected) = pattern else {
        return false;
    };
    list.len() == expected.len()
        && list
            .nodes
            .iter()
            .zip(expected)
            .all(|(&index, item)| node_matches(tree, index, item))
}

/// Whether two subtrees, possibly from different trees, are equivalent.
pub fn nodes_equivalent(
    left_tree: &SyntaxTree,
    left: NodeIndex,
    right_tree: &SyntaxTree,
    right: NodeIndex,
) -> bool {
    normalize(node_to_json(left_tree, left)) == normalize(node_to_json(right_tree, right))
}

fn is_default(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn normalize(value: Value) -> Value {
    match value {
        Value::Object(object) if matches!(object.get("type"), Some(Value::String(_))) => {
            let normalized: Map<String, Value> = object
                .into_iter()
                .filter(|(name, value)| {
                    !FORMATTING_FIELDS.contains(&name.as_str()) && !is_default(value)
                })
                .map(|(name, value)| (name, normalize(value)))
                .collect();
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}

#[cfg(test)]
#[path = "tests/equivalence_tests.rs"]
mod equivalence_tests;
