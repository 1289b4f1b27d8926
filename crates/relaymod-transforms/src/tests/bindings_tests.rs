use super::*;
use relaymod_ast::builders as b;
use relaymod_ast::tree_from_json;
use serde_json::Value;

const RELAY_MODULES: &[&str] = &["react-relay", "Relay"];

fn program(body: Vec<Value>) -> SyntaxTree {
    tree_from_json(b::program(body)).unwrap()
}

#[test]
fn test_require_binding_resolves() {
    let tree = program(vec![b::require_declaration("Relay", "react-relay")]);
    let binding = resolve_import_binding(&tree, RELAY_MODULES).unwrap();
    assert_eq!(binding.local_name, "Relay");
    assert!(tree.is_kind(binding.declaration, SyntaxKind::VariableDeclarator));
}

#[test]
fn test_any_listed_module_name_resolves() {
    let tree = program(vec![b::require_declaration("R", "Relay")]);
    assert_eq!(
        resolve_import_binding(&tree, RELAY_MODULES).unwrap().local_name,
        "R"
    );
}

#[test]
fn test_import_specifiers_resolve() {
    let tree = program(vec![b::import_default("Relay", "react-relay")]);
    let binding = resolve_import_binding(&tree, RELAY_MODULES).unwrap();
    assert_eq!(binding.local_name, "Relay");
    assert!(tree.is_kind(binding.declaration, SyntaxKind::ImportDefaultSpecifier));

    let tree = program(vec![b::import_namespace("RelayNS", "react-relay")]);
    assert_eq!(
        resolve_import_binding(&tree, RELAY_MODULES).unwrap().local_name,
        "RelayNS"
    );
}

#[test]
fn test_no_import_resolves_to_nothing() {
    let tree = program(vec![b::require_declaration("React", "react")]);
    assert_eq!(resolve_import_binding(&tree, RELAY_MODULES), None);
}

#[test]
fn test_two_imports_are_ambiguous() {
    let tree = program(vec![
        b::require_declaration("Relay", "react-relay"),
        b::require_declaration("RelayAgain", "Relay"),
    ]);
    assert_eq!(resolve_import_binding(&tree, RELAY_MODULES), None);
}

#[test]
fn test_destructured_require_is_not_a_binding() {
    // const { Mutation } = require('react-relay');
    let pattern = serde_json::json!({
        "type": "ObjectPattern",
        "properties": [b::shorthand_property("Mutation")],
    });
    let tree = program(vec![b::variable_declaration(
        "const",
        vec![b::variable_declarator(pattern, Some(b::require_call("react-relay")))],
    )]);
    assert_eq!(resolve_import_binding(&tree, RELAY_MODULES), None);
}

#[test]
fn test_require_needs_a_string_literal_argument() {
    // const Relay = require(name);
    let tree = program(vec![b::variable_declaration(
        "const",
        vec![b::variable_declarator(
            b::identifier("Relay"),
            Some(b::call(b::identifier("require"), vec![b::identifier("name")])),
        )],
    )]);
    assert_eq!(resolve_import_binding(&tree, RELAY_MODULES), None);

    // const Relay = load('react-relay');
    let tree = program(vec![b::variable_declaration(
        "const",
        vec![b::variable_declarator(
            b::identifier("Relay"),
            Some(b::call(b::identifier("load"), vec![b::string_literal("react-relay")])),
        )],
    )]);
    assert_eq!(resolve_import_binding(&tree, RELAY_MODULES), None);
}

#[test]
fn test_nested_require_is_found() {
    // function f() { const Relay = require('react-relay'); }
    let tree = program(vec![b::expression_statement(b::function_expression(
        vec![],
        vec![b::require_declaration("Relay", "react-relay")],
    ))]);
    assert_eq!(
        resolve_import_binding(&tree, RELAY_MODULES).unwrap().local_name,
        "Relay"
    );
}
