//! In-place rewrite of an eligible constructor into `didReceiveProps`.

use relaymod_ast::{AstError, NodeIndex, SyntaxKind, SyntaxTree};
use serde_json::Value;

use crate::eligibility::constructor_parts;
use crate::matcher::Candidate;

pub const NEW_METHOD_NAME: &str = "didReceiveProps";

/// Turn `constructor(props) { super(props); ...rest }` into
/// `didReceiveProps() { ...rest }`.
///
/// Only call this for candidates that `check_eligibility` accepted: it assumes
/// one parameter and a leading `super(...)` statement.
pub fn rewrite_constructor(tree: &mut SyntaxTree, candidate: &Candidate) -> Result<(), AstError> {
    let malformed = |expected| AstError::MalformedNode {
        type_name: "MethodDefinition".to_string(),
        expected,
    };

    let (function, block) = {
        let parts = constructor_parts(tree, candidate.constructor)?;
        if parts.params.len() != 1 || parts.statements.is_empty() {
            return Err(malformed("an eligible constructor"));
        }
        (parts.function, parts.block)
    };
    let key = tree
        .get(candidate.constructor)
        .map_or(NodeIndex::NONE, |method| method.child("key"));
    let key_kind = tree.kind(key);
    if !matches!(key_kind, Some(SyntaxKind::Identifier | SyntaxKind::Literal)) {
        return Err(malformed("an identifier or string literal `key`"));
    }

    tree.set_value(candidate.constructor, "kind", Value::from("method"));
    if key_kind == Some(SyntaxKind::Literal) {
        // `"constructor"() {}`
        tree.remove_value(key, "value");
        tree.remove_value(key, "raw");
        tree.retag(key, "Identifier");
    }
    tree.set_value(key, "name", Value::from(NEW_METHOD_NAME));
    tree.remove_list_item(function, "params", 0);
    tree.remove_list_item(block, "body", 0);

    tracing::debug!(constructor = candidate.constructor.0, "rewrote constructor");
    Ok(())
}

#[cfg(test)]
#[path = "tests/rewriter_tests.rs"]
mod rewriter_tests;
