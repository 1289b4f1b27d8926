use super::*;
use crate::matcher::{BaseClassDescriptor, find_matching_constructors};
use relaymod_ast::builders as b;
use relaymod_ast::tree_from_json;
use relaymod_common::diagnostic_codes;
use serde_json::json;

fn tree_with_constructor(params: Vec<Value>, body: Vec<Value>) -> SyntaxTree {
    let constructor = b::with_loc(b::constructor(params, body), 2, 2);
    tree_from_json(b::program(vec![b::class_declaration(
        "LikeMutation",
        Some(b::identifier("RelayMutation")),
        vec![constructor],
    )]))
    .unwrap()
}

fn verdict(tree: &SyntaxTree) -> EligibilityVerdict {
    let descriptor = BaseClassDescriptor::Identifier("RelayMutation".to_string());
    let candidates = find_matching_constructors(tree, &descriptor);
    assert_eq!(candidates.len(), 1);
    check_eligibility(tree, &candidates[0]).unwrap()
}

fn skip_reason(tree: &SyntaxTree) -> SkipReason {
    match verdict(tree) {
        EligibilityVerdict::Skipped { reason, position } => {
            assert_eq!(position, Some(SourcePosition::new(2, 3)));
            reason
        }
        EligibilityVerdict::Eligible { param_name } => {
            panic!("expected a skip, got eligible with `{param_name}`")
        }
    }
}

fn super_props() -> Value {
    b::expression_statement(b::super_call(vec![b::identifier("props")]))
}

/// `this.<field> = <value>;`
fn assign_this(field: &str, value: Value) -> Value {
    b::expression_statement(b::assignment(b::member(b::this_expression(), field), value))
}

#[test]
fn test_plain_constructor_is_eligible() {
    let tree = tree_with_constructor(
        vec![b::identifier("props")],
        vec![super_props(), assign_this("x", b::number_literal(1.0))],
    );
    let verdict = verdict(&tree);
    assert!(verdict.is_eligible());
    assert_eq!(
        verdict,
        EligibilityVerdict::Eligible {
            param_name: "props".to_string()
        }
    );
}

#[test]
fn test_parameter_must_be_a_single_identifier() {
    let none = tree_with_constructor(vec![], vec![super_props()]);
    assert_eq!(skip_reason(&none), SkipReason::ParameterNotIdentifier);

    let two = tree_with_constructor(
        vec![b::identifier("props"), b::identifier("context")],
        vec![super_props()],
    );
    assert_eq!(skip_reason(&two), SkipReason::ParameterNotIdentifier);

    let pattern = json!({ "type": "ObjectPattern", "properties": [b::shorthand_property("relay")] });
    let destructured = tree_with_constructor(vec![pattern], vec![super_props()]);
    assert_eq!(skip_reason(&destructured), SkipReason::ParameterNotIdentifier);

    let default = json!({
        "type": "AssignmentPattern",
        "left": b::identifier("props"),
        "right": b::object_expression(vec![]),
    });
    let defaulted = tree_with_constructor(vec![default], vec![super_props()]);
    assert_eq!(skip_reason(&defaulted), SkipReason::ParameterNotIdentifier);
}

#[test]
fn test_first_statement_must_be_super_with_the_parameter() {
    let expected = SkipReason::FirstStatementNotSuperCall {
        param_name: "props".to_string(),
    };

    let empty = tree_with_constructor(vec![b::identifier("props")], vec![]);
    assert_eq!(skip_reason(&empty), expected);

    let extra_argument = tree_with_constructor(
        vec![b::identifier("props")],
        vec![b::expression_statement(b::super_call(vec![
            b::identifier("props"),
            b::identifier("extra"),
        ]))],
    );
    assert_eq!(skip_reason(&extra_argument), expected);

    let other_argument = tree_with_constructor(
        vec![b::identifier("props")],
        vec![b::expression_statement(b::super_call(vec![b::identifier("other")]))],
    );
    assert_eq!(skip_reason(&other_argument), expected);

    let late_super = tree_with_constructor(
        vec![b::identifier("props")],
        vec![assign_this("x", b::number_literal(1.0)), super_props()],
    );
    assert_eq!(skip_reason(&late_super), expected);

    let not_super = tree_with_constructor(
        vec![b::identifier("props")],
        vec![b::expression_statement(b::call(
            b::identifier("init"),
            vec![b::identifier("props")],
        ))],
    );
    assert_eq!(skip_reason(&not_super), expected);
}

#[test]
fn test_parameter_used_after_super_is_rejected() {
    let tree = tree_with_constructor(
        vec![b::identifier("props")],
        vec![super_props(), assign_this("story", b::member(b::identifier("props"), "story"))],
    );
    assert_eq!(
        skip_reason(&tree),
        SkipReason::ParameterUsedOutsideSuper {
            param_name: "props".to_string()
        }
    );
}

#[test]
fn test_property_named_like_the_parameter_is_allowed() {
    // this.props = 1; ({ props: 2 });
    let tree = tree_with_constructor(
        vec![b::identifier("props")],
        vec![
            super_props(),
            assign_this("props", b::number_literal(1.0)),
            b::expression_statement(b::object_expression(vec![b::property(
                b::identifier("props"),
                b::number_literal(2.0),
                false,
            )])),
        ],
    );
    assert!(verdict(&tree).is_eligible());
}

#[test]
fn test_arguments_object_rejects_an_otherwise_eligible_constructor() {
    // super(props); this.args = arguments;
    let tree = tree_with_constructor(
        vec![b::identifier("props")],
        vec![super_props(), assign_this("args", b::identifier("arguments"))],
    );
    assert_eq!(skip_reason(&tree), SkipReason::ArgumentsObjectUsed);

    // `this.arguments` is only a property name.
    let tree = tree_with_constructor(
        vec![b::identifier("props")],
        vec![super_props(), assign_this("arguments", b::number_literal(1.0))],
    );
    assert!(verdict(&tree).is_eligible());
}

#[test]
fn test_checks_stop_at_the_first_failure() {
    // Both check 3 and check 4 fail; check 3 is reported.
    let tree = tree_with_constructor(
        vec![b::identifier("props")],
        vec![
            super_props(),
            b::expression_statement(b::call(
                b::identifier("f"),
                vec![b::identifier("props"), b::identifier("arguments")],
            )),
        ],
    );
    assert_eq!(
        skip_reason(&tree).code(),
        diagnostic_codes::CONSTRUCTOR_PARAMETER_USED_OUTSIDE_SUPER
    );
}

#[test]
fn test_skip_reason_diagnostics() {
    let reason = SkipReason::FirstStatementNotSuperCall {
        param_name: "props".to_string(),
    };
    let diagnostic = reason.to_diagnostic("LikeMutation.json", Some(SourcePosition::new(3, 5)));
    assert_eq!(diagnostic.code, diagnostic_codes::FIRST_STATEMENT_NOT_SUPER_CALL);
    assert_eq!(diagnostic.message_text, "first statement is not `super(props)`.");
    assert_eq!(
        diagnostic.to_string(),
        "LikeMutation.json:3:5 - warning RM9002: first statement is not `super(props)`."
    );

    let diagnostic = SkipReason::ArgumentsObjectUsed.to_diagnostic("a.json", None);
    assert_eq!(
        diagnostic.message_text,
        "legacy arguments object is used in the constructor."
    );
}

#[test]
fn test_malformed_constructor_is_an_error() {
    let constructor = json!({
        "type": "MethodDefinition",
        "kind": "constructor",
        "key": b::identifier("constructor"),
        "value": { "type": "FunctionExpression", "params": [], "body": null },
    });
    let tree = tree_from_json(b::program(vec![b::class_declaration(
        "A",
        Some(b::identifier("RelayMutation")),
        vec![constructor],
    )]))
    .unwrap();
    let descriptor = BaseClassDescriptor::Identifier("RelayMutation".to_string());
    let candidates = find_matching_constructors(&tree, &descriptor);

    let err = check_eligibility(&tree, &candidates[0]).unwrap_err();
    assert!(matches!(err, AstError::MalformedNode { .. }), "{err}");
}
