//! Shared base types: node indices, node lists and parent slots.

use serde::Serialize;

/// Index of a node in a [`SyntaxTree`](crate::SyntaxTree) arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// An ordered list of child nodes.
/// Elided array elements (`[a, , b]`) are stored as `NodeIndex::NONE`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First element, `NodeIndex::NONE` when the list is empty.
    #[inline]
    pub fn first(&self) -> NodeIndex {
        self.nodes.first().copied().unwrap_or(NodeIndex::NONE)
    }
}

/// The field (and list position, for list fields) a node occupies in its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSlot {
    pub field: String,
    pub index: Option<usize>,
}

impl FieldSlot {
    pub fn field(name: &str) -> FieldSlot {
        FieldSlot {
            field: name.to_string(),
            index: None,
        }
    }

    pub fn element(name: &str, index: usize) -> FieldSlot {
        FieldSlot {
            field: name.to_string(),
            index: Some(index),
        }
    }
}
