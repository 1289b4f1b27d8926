//! Errors raised while loading, querying or printing a syntax tree.

use std::fmt;

#[derive(Debug)]
pub enum AstError {
    /// The input is not valid JSON.
    InvalidJson(serde_json::Error),
    /// The document root is not an object with a string `type`.
    RootNotNode,
    /// The document nests deeper than the loader accepts.
    TooDeep { limit: usize },
    /// The field-role table has no entry for this node type.
    UnknownNodeKind { type_name: String },
    /// The field-role table knows the node type but not this field.
    UnknownField { type_name: String, field: String },
    /// A node does not have the shape its type requires.
    MalformedNode {
        type_name: String,
        expected: &'static str,
    },
    /// Serializing the tree back to JSON failed.
    Print(serde_json::Error),
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstError::InvalidJson(err) => write!(f, "invalid ESTree JSON: {err}"),
            AstError::RootNotNode => write!(f, "document root is not an ESTree node"),
            AstError::TooDeep { limit } => {
                write!(f, "syntax tree nests deeper than {limit} levels")
            }
            AstError::UnknownNodeKind { type_name } => {
                write!(f, "no field roles are defined for node type '{type_name}'")
            }
            AstError::UnknownField { type_name, field } => {
                write!(f, "node type '{type_name}' has no field '{field}' in the field-role table")
            }
            AstError::MalformedNode {
                type_name,
                expected,
            } => write!(f, "malformed '{type_name}' node: expected {expected}"),
            AstError::Print(err) => write!(f, "failed to print syntax tree: {err}"),
        }
    }
}

impl std::error::Error for AstError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AstError::InvalidJson(err) | AstError::Print(err) => Some(err),
            _ => None,
        }
    }
}
