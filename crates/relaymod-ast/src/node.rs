//! Syntax tree nodes.

use indexmap::IndexMap;
use relaymod_common::SourcePosition;
use serde_json::Value;

use crate::base::{FieldSlot, NodeIndex, NodeList};
use crate::syntax_kind::SyntaxKind;

/// The value held by one named field of a node.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// A single child node.
    Node(NodeIndex),
    /// An array of child nodes (elided elements are `NodeIndex::NONE`).
    List(NodeList),
    /// Anything that is not a node: strings, numbers, flags, `null`,
    /// and non-node objects such as `loc` or `regex`.
    Value(Value),
}

impl FieldValue {
    /// The node indices held by this field, in order.
    pub fn node_indices(&self) -> &[NodeIndex] {
        match self {
            FieldValue::Node(idx) => std::slice::from_ref(idx),
            FieldValue::List(list) => list.nodes.as_slice(),
            FieldValue::Value(_) => &[],
        }
    }
}

/// A node in the arena. Field order follows the source document so printing
/// reproduces it.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    /// The ESTree `type` string, kept verbatim for unknown kinds.
    pub type_name: String,
    pub fields: IndexMap<String, FieldValue>,
    pub parent: NodeIndex,
    /// Where this node sits in `parent`; `None` for the root and detached nodes.
    pub slot: Option<FieldSlot>,
    pub position: Option<SourcePosition>,
}

impl Node {
    pub fn new(type_name: &str) -> Node {
        Node {
            kind: SyntaxKind::from_type_name(type_name),
            type_name: type_name.to_string(),
            fields: IndexMap::new(),
            parent: NodeIndex::NONE,
            slot: None,
            position: None,
        }
    }

    /// The child node stored in `name`, or `NodeIndex::NONE`.
    pub fn child(&self, name: &str) -> NodeIndex {
        match self.fields.get(name) {
            Some(FieldValue::Node(idx)) => *idx,
            _ => NodeIndex::NONE,
        }
    }

    pub fn list(&self, name: &str) -> Option<&NodeList> {
        match self.fields.get(name) {
            Some(FieldValue::List(list)) => Some(list),
            _ => None,
        }
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.fields.get(name) {
            Some(FieldValue::Value(value)) => Some(value),
            _ => None,
        }
    }

    pub fn str_value(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(Value::as_str)
    }

    /// Boolean flag; a missing field reads as `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.value(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Whether a key-bearing node evaluates its key (`obj[x]`, `{ [x]: 1 }`).
    #[inline]
    pub fn is_computed(&self) -> bool {
        self.flag("computed")
    }

    /// Iterate child node indices in field order, skipping elided elements.
    pub fn child_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.fields
            .values()
            .flat_map(FieldValue::node_indices)
            .copied()
            .filter(|idx| idx.is_some())
    }
}
