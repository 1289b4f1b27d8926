//! Import binding resolution.
//!
//! Finds the local name a file uses for a module:
//!
//! ```javascript
//! const Relay = require('react-relay');
//! import Relay from 'react-relay';
//! import * as Relay from 'react-relay';
//! ```
//!
//! A binding is only trusted when exactly one declaration imports the module.
//! Two imports of the same module are ambiguous and resolve to nothing.

use relaymod_ast::{Node, NodeIndex, SyntaxKind, SyntaxTree};

/// The local name bound to an imported module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub local_name: String,
    /// The `VariableDeclarator` or import specifier that introduces the name.
    pub declaration: NodeIndex,
}

/// Resolve the unique local binding of any of `modules`.
pub fn resolve_import_binding(tree: &SyntaxTree, modules: &[&str]) -> Option<Binding> {
    let mut declarations: Vec<(NodeIndex, Option<&str>)> = Vec::new();

    for index in tree.descendants(tree.root()) {
        let Some(node) = tree.get(index) else {
            continue;
        };
        match node.kind {
            SyntaxKind::VariableDeclarator => {
                if requires_module(tree, node.child("init"), modules) {
                    declarations.push((index, tree.identifier_name(node.child("id"))));
                }
            }
            SyntaxKind::ImportDeclaration => {
                if !imports_module(tree, node, modules) {
                    continue;
                }
                let Some(specifiers) = node.list("specifiers") else {
                    continue;
                };
                for &specifier in &specifiers.nodes {
                    let Some(spec_node) = tree.get(specifier) else {
                        continue;
                    };
                    if matches!(
                        spec_node.kind,
                        SyntaxKind::ImportDefaultSpecifier | SyntaxKind::ImportNamespaceSpecifier
                    ) {
                        let local_name = tree.identifier_name(spec_node.child("local"));
                        declarations.push((specifier, local_name));
                    }
                }
            }
            _ => {}
        }
    }

    match declarations.as_slice() {
        [(declaration, Some(local_name))] => Some(Binding {
            local_name: (*local_name).to_string(),
            declaration: *declaration,
        }),
        [] => None,
        found => {
            tracing::debug!(
                modules = ?modules,
                declarations = found.len(),
                "module import is ambiguous or not bound to an identifier"
            );
            None
        }
    }
}

/// `require('<module>')` with a string literal first argument.
fn requires_module(tree: &SyntaxTree, init: NodeIndex, modules: &[&str]) -> bool {
    let Some(call) = tree.get(init) else {
        return false;
    };
    if call.kind != SyntaxKind::CallExpression
        || tree.identifier_name(call.child("callee")) != Some("require")
    {
        return false;
    }
    let Some(arguments) = call.list("arguments") else {
        return false;
    };
    string_literal_in(tree, arguments.first(), modules)
}

fn imports_module(tree: &SyntaxTree, import: &Node, modules: &[&str]) -> bool {
    string_literal_in(tree, import.child("source"), modules)
}

fn string_literal_in(tree: &SyntaxTree, index: NodeIndex, modules: &[&str]) -> bool {
    let Some(node) = tree.get(index) else {
        return false;
    };
    node.kind == SyntaxKind::Literal
        && node
            .str_value("value")
            .is_some_and(|value| modules.contains(&value))
}

#[cfg(test)]
#[path = "tests/bindings_tests.rs"]
mod bindings_tests;
