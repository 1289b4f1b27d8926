//! Arena storage for a syntax tree.
//!
//! Nodes are stored contiguously and referenced by `NodeIndex`. Loading
//! assigns indices in pre-order. Mutations never reuse indices: a node
//! removed from its parent stays in the arena, detached, and is no longer
//! reachable from the root.

use serde_json::Value;

use crate::base::{FieldSlot, NodeIndex};
use crate::node::{FieldValue, Node};
use crate::syntax_kind::SyntaxKind;

#[derive(Clone, Debug)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: NodeIndex,
}

impl Default for SyntaxTree {
    fn default() -> Self {
        SyntaxTree {
            nodes: Vec::new(),
            root: NodeIndex::NONE,
        }
    }
}

impl SyntaxTree {
    pub fn new() -> SyntaxTree {
        SyntaxTree::default()
    }

    #[inline]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: NodeIndex) {
        self.root = root;
    }

    /// Add a node to the arena and return its index
    pub(crate) fn add(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable node by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Number of nodes in the arena, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind)
    }

    #[inline]
    pub fn is_kind(&self, index: NodeIndex, kind: SyntaxKind) -> bool {
        self.kind(index) == Some(kind)
    }

    /// The `name` of an `Identifier` node.
    pub fn identifier_name(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        if node.kind != SyntaxKind::Identifier {
            return None;
        }
        node.str_value("name")
    }

    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |n| n.parent)
    }

    /// Pre-order walk of the subtree rooted at `index`, `index` included.
    pub fn descendants(&self, index: NodeIndex) -> Descendants<'_> {
        let mut stack = Vec::new();
        if self.get(index).is_some() {
            stack.push(index);
        }
        Descendants { tree: self, stack }
    }

    /// Replace a non-node field value, returning the previous one.
    pub fn set_value(&mut self, index: NodeIndex, field: &str, value: Value) -> Option<FieldValue> {
        let node = self.get_mut(index)?;
        node.fields.insert(field.to_string(), FieldValue::Value(value))
    }

    /// Drop a non-node field entirely, keeping the order of the others.
    pub fn remove_value(&mut self, index: NodeIndex, field: &str) -> Option<Value> {
        let node = self.get_mut(index)?;
        match node.fields.get(field) {
            Some(FieldValue::Value(_)) => {}
            _ => return None,
        }
        match node.fields.shift_remove(field) {
            Some(FieldValue::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Change the `type` of a node in place.
    pub fn retag(&mut self, index: NodeIndex, type_name: &str) {
        if let Some(node) = self.get_mut(index) {
            node.kind = SyntaxKind::from_type_name(type_name);
            node.type_name = type_name.to_string();
        }
    }

    /// Remove element `position` from the list field `field` of `index`.
    ///
    /// The removed node is detached; the slots of the following siblings are
    /// renumbered so parent links stay accurate.
    pub fn remove_list_item(
        &mut self,
        index: NodeIndex,
        field: &str,
        position: usize,
    ) -> Option<NodeIndex> {
        let node = self.get_mut(index)?;
        let Some(FieldValue::List(list)) = node.fields.get_mut(field) else {
            return None;
        };
        if position >= list.nodes.len() {
            return None;
        }
        let removed = list.nodes.remove(position);
        let shifted: Vec<(usize, NodeIndex)> = list
            .nodes
            .iter()
            .copied()
            .enumerate()
            .skip(position)
            .collect();

        for (new_position, sibling) in shifted {
            if let Some(sibling_node) = self.get_mut(sibling) {
                sibling_node.slot = Some(FieldSlot::element(field, new_position));
            }
        }
        if let Some(removed_node) = self.get_mut(removed) {
            removed_node.parent = NodeIndex::NONE;
            removed_node.slot = None;
        }
        Some(removed)
    }
}

/// Iterator returned by [`SyntaxTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeIndex>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let index = self.stack.pop()?;
        if let Some(node) = self.tree.get(index) {
            let start = self.stack.len();
            self.stack.extend(node.child_indices());
            self.stack[start..].reverse();
        }
        Some(index)
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tree_tests;
