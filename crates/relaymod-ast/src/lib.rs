//! Syntax tree model for the relaymod codemod.
//!
//! - Arena storage (`SyntaxTree`, `NodeIndex`, `Node`)
//! - ESTree node kinds and the static field-role table
//! - ESTree JSON loading and printing
//! - Structural equivalence against ESTree patterns
//! - The `SyntaxToolkit` parse/print capability

pub mod base;
pub use base::{FieldSlot, NodeIndex, NodeList};

pub mod builders;
pub mod equivalence;

pub mod error;
pub use error::AstError;

pub mod estree;
pub use estree::{node_to_json, tree_from_json, tree_from_str, tree_to_json};

pub mod field_roles;
pub use field_roles::{FieldRole, field_role};

pub mod node;
pub use node::{FieldValue, Node};

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod toolkit;
pub use toolkit::{EstreeJsonToolkit, PrintOptions, SyntaxToolkit};

pub mod tree;
pub use tree::SyntaxTree;
