//! ESTree JSON loading and printing.
//!
//! Any JSON object with a string `type` is a node. Arrays made only of nodes
//! and `null` are node lists; every other value is kept verbatim. Printing
//! writes `type` first and then the remaining fields in their original order.

use relaymod_common::SourcePosition;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::base::{FieldSlot, NodeIndex, NodeList};
use crate::error::AstError;
use crate::node::{FieldValue, Node};
use crate::tree::SyntaxTree;

/// Maximum nesting accepted by the recursive loader.
pub const MAX_TREE_DEPTH: usize = 2_048;

/// Each tree level adds at most an array and an object of JSON nesting, plus
/// the `loc` objects of the deepest node.
const MAX_JSON_NESTING: usize = 2 * MAX_TREE_DEPTH + 4;

/// Parse ESTree JSON text into a syntax tree.
///
/// Parsers emit long operator chains as left-nested nodes, so serde_json's
/// recursion limit is lifted and the nesting is bounded by a scan instead.
pub fn tree_from_str(source: &str) -> Result<SyntaxTree, AstError> {
    if json_nesting(source) > MAX_JSON_NESTING {
        return Err(AstError::TooDeep {
            limit: MAX_TREE_DEPTH,
        });
    }

    let mut deserializer = serde_json::Deserializer::from_str(source);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer).map_err(AstError::InvalidJson)?;
    deserializer.end().map_err(AstError::InvalidJson)?;
    tree_from_json(value)
}

/// Deepest bracket nesting in `source`, ignoring brackets inside strings.
fn json_nesting(source: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for byte in source.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Build a syntax tree from an ESTree JSON value.
pub fn tree_from_json(value: Value) -> Result<SyntaxTree, AstError> {
    let Value::Object(object) = value else {
        return Err(AstError::RootNotNode);
    };
    if !is_node_object(&object) {
        return Err(AstError::RootNotNode);
    }

    let mut tree = SyntaxTree::new();
    let root = load_node(&mut tree, object, NodeIndex::NONE, None, 0)?;
    tree.set_root(root);
    tracing::trace!(nodes = tree.len(), "loaded ESTree document");
    Ok(tree)
}

fn is_node_object(object: &Map<String, Value>) -> bool {
    matches!(object.get("type"), Some(Value::String(_)))
}

fn is_node_value(value: &Value) -> bool {
    matches!(value, Value::Object(object) if is_node_object(object))
}

fn is_node_list(items: &[Value]) -> bool {
    items.iter().all(|item| item.is_null() || is_node_value(item))
        && (items.is_empty() || items.iter().any(is_node_value))
}

fn read_position(object: &Map<String, Value>) -> Option<SourcePosition> {
    let start = object.get("loc")?.get("start")?;
    let line = u32::try_from(start.get("line")?.as_u64()?).ok()?;
    let column = u32::try_from(start.get("column")?.as_u64()?).ok()?;
    Some(SourcePosition::from_estree(line, column))
}

fn load_node(
    tree: &mut SyntaxTree,
    object: Map<String, Value>,
    parent: NodeIndex,
    slot: Option<FieldSlot>,
    depth: usize,
) -> Result<NodeIndex, AstError> {
    if depth > MAX_TREE_DEPTH {
        return Err(AstError::TooDeep {
            limit: MAX_TREE_DEPTH,
        });
    }

    let type_name = match object.get("type") {
        Some(Value::String(name)) => name.clone(),
        _ => return Err(AstError::RootNotNode),
    };

    let mut node = Node::new(&type_name);
    node.parent = parent;
    node.slot = slot;
    node.position = read_position(&object);

    // Reserve the index before the children so indices follow pre-order.
    let index = tree.add(node);

    let mut fields = Vec::with_capacity(object.len());
    for (name, value) in object {
        if name == "type" {
            continue;
        }
        let field = match value {
            Value::Object(child) if is_node_object(&child) => {
                let child_idx = load_node(
                    tree,
                    child,
                    index,
                    Some(FieldSlot::field(&name)),
                    depth + 1,
                )?;
                FieldValue::Node(child_idx)
            }
            Value::Array(items) if is_node_list(&items) => {
                let mut nodes = Vec::with_capacity(items.len());
                for (position, item) in items.into_iter().enumerate() {
                    match item {
                        Value::Object(child) => nodes.push(load_node(
                            tree,
                            child,
                            index,
                            Some(FieldSlot::element(&name, position)),
                            depth + 1,
                        )?),
                        _ => nodes.push(NodeIndex::NONE),
                    }
                }
                FieldValue::List(NodeList::new(nodes))
            }
            other => FieldValue::Value(other),
        };
        fields.push((name, field));
    }

    if let Some(node) = tree.get_mut(index) {
        node.fields.extend(fields);
    }
    Ok(index)
}

/// Serialize the whole tree back to an ESTree JSON value.
pub fn tree_to_json(tree: &SyntaxTree) -> Value {
    node_to_json(tree, tree.root())
}

/// Serialize the subtree rooted at `index`; `NodeIndex::NONE` becomes `null`.
pub fn node_to_json(tree: &SyntaxTree, index: NodeIndex) -> Value {
    let Some(node) = tree.get(index) else {
        return Value::Null;
    };

    let mut object = Map::with_capacity(node.fields.len() + 1);
    object.insert("type".to_string(), Value::String(node.type_name.clone()));
    for (name, field) in &node.fields {
        let value = match field {
            FieldValue::Node(child) => node_to_json(tree, *child),
            FieldValue::List(list) => Value::Array(
                list.nodes
                    .iter()
                    .map(|&child| node_to_json(tree, child))
                    .collect(),
            ),
            FieldValue::Value(value) => value.clone(),
        };
        object.insert(name.clone(), value);
    }
    Value::Object(object)
}

#[cfg(test)]
#[path = "tests/estree_tests.rs"]
mod estree_tests;
