//! Variable reference classification.
//!
//! `foo.bar` and `{ bar: 1 }` contain an identifier named `bar` that is only a
//! property name; `foo[bar]`, `{ [bar]: 1 }` and a plain `bar` read the
//! variable. The distinction comes from the field-role table.

use relaymod_ast::{AstError, FieldRole, NodeIndex, SyntaxTree, field_role};

/// Whether the identifier at `occurrence` refers to a variable.
///
/// A node without a parent is not a reference. An unknown parent kind or an
/// unlisted field is an error of the role table and is returned as such.
pub fn is_variable_reference(tree: &SyntaxTree, occurrence: NodeIndex) -> Result<bool, AstError> {
    let Some(node) = tree.get(occurrence) else {
        return Ok(false);
    };
    let (Some(slot), Some(parent)) = (node.slot.as_ref(), tree.get(node.parent)) else {
        return Ok(false);
    };

    match field_role(parent.kind, &parent.type_name, &slot.field)? {
        FieldRole::Expression => Ok(true),
        FieldRole::Key => Ok(parent.is_computed()),
        FieldRole::Binding | FieldRole::Label | FieldRole::Name | FieldRole::Structure => Ok(false),
    }
}

/// Every `Identifier` named `name` under `roots` (roots included) that is a
/// variable reference, in pre-order.
pub fn find_variable_references(
    tree: &SyntaxTree,
    roots: &[NodeIndex],
    name: &str,
) -> Result<Vec<NodeIndex>, AstError> {
    let mut references = Vec::new();
    for &root in roots {
        for index in tree.descendants(root) {
            if tree.identifier_name(index) == Some(name) && is_variable_reference(tree, index)? {
                references.push(index);
            }
        }
    }
    Ok(references)
}

#[cfg(test)]
#[path = "tests/references_tests.rs"]
mod references_tests;
