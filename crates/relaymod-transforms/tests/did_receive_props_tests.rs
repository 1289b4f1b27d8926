//! End-to-end rewrites through the ESTree JSON toolkit.

use relaymod_ast::builders as b;
use relaymod_ast::equivalence::nodes_equivalent;
use relaymod_ast::{EstreeJsonToolkit, PrintOptions, SyntaxToolkit, tree_from_json, tree_to_json};
use relaymod_transforms::{run_transform, transform_source, transform_tree};
use serde_json::Value;

fn run(program: &Value) -> Option<Value> {
    run_transform(
        &EstreeJsonToolkit,
        "LikeMutation.json",
        &program.to_string(),
        &PrintOptions::default(),
    )
    .unwrap()
    .map(|output| serde_json::from_str(&output).unwrap())
}

fn super_call(arguments: Vec<Value>) -> Value {
    b::expression_statement(b::super_call(arguments))
}

fn this_x_equals_one() -> Value {
    b::expression_statement(b::assignment(
        b::member(b::this_expression(), "x"),
        b::number_literal(1.0),
    ))
}

fn mutation_class(super_class: Value, params: Vec<Value>, body: Vec<Value>) -> Value {
    b::class_declaration(
        "LikeMutation",
        Some(super_class),
        vec![b::constructor(params, body)],
    )
}

fn relay_mutation() -> Value {
    b::member(b::identifier("Relay"), "Mutation")
}

#[test]
fn test_scenario_constructor_is_rewritten() {
    // const Mutation = require('RelayMutation');
    // class LikeMutation extends Mutation { constructor(props) { super(props); this.x = 1; } }
    let input = b::program(vec![
        b::require_declaration("Mutation", "RelayMutation"),
        mutation_class(
            b::identifier("Mutation"),
            vec![b::identifier("props")],
            vec![super_call(vec![b::identifier("props")]), this_x_equals_one()],
        ),
    ]);
    let expected = b::program(vec![
        b::require_declaration("Mutation", "RelayMutation"),
        b::class_declaration(
            "LikeMutation",
            Some(b::identifier("Mutation")),
            vec![b::method_definition(
                "method",
                b::identifier("didReceiveProps"),
                vec![],
                vec![this_x_equals_one()],
            )],
        ),
    ]);

    let source = input.to_string();
    let transformed = transform_source(
        &EstreeJsonToolkit,
        "LikeMutation.json",
        &source,
        &PrintOptions::default(),
    )
    .unwrap();
    assert!(transformed.outcome.changed);
    assert!(transformed.outcome.skipped.is_empty());
    let output: Value = serde_json::from_str(&transformed.output.unwrap()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_scenario_extra_super_argument_is_skipped() {
    let input = b::program(vec![
        b::require_declaration("Relay", "react-relay"),
        mutation_class(
            relay_mutation(),
            vec![b::identifier("props")],
            vec![super_call(vec![b::identifier("props"), b::identifier("extra")])],
        ),
    ]);
    let transformed = transform_source(
        &EstreeJsonToolkit,
        "LikeMutation.json",
        &input.to_string(),
        &PrintOptions::default(),
    )
    .unwrap();

    assert!(!transformed.outcome.changed);
    assert_eq!(transformed.output, None);
    let [diagnostic] = transformed.outcome.skipped.as_slice() else {
        panic!("expected one diagnostic, got {:?}", transformed.outcome.skipped);
    };
    assert_eq!(diagnostic.message_text, "first statement is not `super(props)`.");
    assert_eq!(diagnostic.file, "LikeMutation.json");
}

#[test]
fn test_scenario_unrelated_base_is_ignored() {
    let input = b::program(vec![
        b::require_declaration("Relay", "react-relay"),
        b::require_declaration("React", "react"),
        mutation_class(
            b::member(b::identifier("React"), "Component"),
            vec![b::identifier("props")],
            vec![super_call(vec![b::identifier("props")])],
        ),
    ]);
    let mut tree = tree_from_json(input).unwrap();
    let outcome = transform_tree(&mut tree, "Component.json").unwrap();
    assert!(!outcome.changed);
    assert!(outcome.rewritten.is_empty());
    assert!(outcome.skipped.is_empty());
}

#[test]
fn test_rejected_candidates_leave_the_tree_untouched() {
    let rejected = [
        // super(props); this.story = props.story;
        vec![
            super_call(vec![b::identifier("props")]),
            b::expression_statement(b::assignment(
                b::member(b::this_expression(), "story"),
                b::member(b::identifier("props"), "story"),
            )),
        ],
        // super(props); f(arguments);
        vec![
            super_call(vec![b::identifier("props")]),
            b::expression_statement(b::call(b::identifier("f"), vec![b::identifier("arguments")])),
        ],
        // this.x = 1; super(props);
        vec![this_x_equals_one(), super_call(vec![b::identifier("props")])],
    ];

    for body in rejected {
        let input = b::program(vec![
            b::require_declaration("Relay", "react-relay"),
            mutation_class(relay_mutation(), vec![b::identifier("props")], body),
        ]);
        let original = tree_from_json(input.clone()).unwrap();
        let mut tree = tree_from_json(input).unwrap();

        let outcome = transform_tree(&mut tree, "a.json").unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.skipped.len(), 1);
        assert!(nodes_equivalent(&original, original.root(), &tree, tree.root()));
        assert_eq!(tree_to_json(&original), tree_to_json(&tree));
    }
}

#[test]
fn test_ambiguous_binding_disables_the_family() {
    let input = b::program(vec![
        b::require_declaration("Relay", "react-relay"),
        b::require_declaration("RelayClassic", "Relay"),
        mutation_class(
            relay_mutation(),
            vec![b::identifier("props")],
            vec![super_call(vec![b::identifier("props")])],
        ),
    ]);
    assert_eq!(run(&input), None);
}

#[test]
fn test_es_module_import_is_recognized() {
    // import * as Relay from 'react-relay';
    let input = b::program(vec![
        b::import_namespace("Relay", "react-relay"),
        mutation_class(
            relay_mutation(),
            vec![b::identifier("props")],
            vec![super_call(vec![b::identifier("props")]), this_x_equals_one()],
        ),
    ]);
    let output = run(&input).unwrap();
    let method = &output["body"][1]["body"]["body"][0];
    assert_eq!(method["kind"], "method");
    assert_eq!(method["key"]["name"], "didReceiveProps");
    assert_eq!(method["value"]["params"], Value::Array(vec![]));
    assert_eq!(method["value"]["body"]["body"].as_array().unwrap().len(), 1);
}

#[test]
fn test_only_statement_super_leaves_an_empty_method() {
    let input = b::program(vec![
        b::import_default("RelayMutation", "RelayMutation"),
        mutation_class(
            b::identifier("RelayMutation"),
            vec![b::identifier("props")],
            vec![super_call(vec![b::identifier("props")])],
        ),
    ]);
    let output = run(&input).unwrap();
    let method = &output["body"][1]["body"]["body"][0];
    assert_eq!(method["value"]["body"]["body"], Value::Array(vec![]));
}

#[test]
fn test_unknown_node_in_constructor_fails_the_file() {
    let unknown = serde_json::json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "FancyExpression",
            "operand": { "type": "Identifier", "name": "props" },
        },
    });
    let input = b::program(vec![
        b::require_declaration("Relay", "react-relay"),
        mutation_class(
            relay_mutation(),
            vec![b::identifier("props")],
            vec![super_call(vec![b::identifier("props")]), unknown],
        ),
    ]);
    let result = run_transform(
        &EstreeJsonToolkit,
        "a.json",
        &input.to_string(),
        &PrintOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_positions_survive_printing() {
    let input = b::program(vec![
        b::require_declaration("Relay", "react-relay"),
        b::with_loc(
            mutation_class(
                relay_mutation(),
                vec![b::identifier("props")],
                vec![super_call(vec![b::identifier("props")]), this_x_equals_one()],
            ),
            4,
            0,
        ),
    ]);
    let output = run(&input).unwrap();
    assert_eq!(output["body"][1]["loc"]["start"]["line"], 4);

    let printed = EstreeJsonToolkit
        .print(
            &tree_from_json(input).unwrap(),
            &PrintOptions {
                pretty: false,
                indent: 0,
            },
        )
        .unwrap();
    assert!(printed.contains(r#""loc":{"start":{"line":4,"column":0}"#));
}

#[test]
fn test_long_concatenation_does_not_block_the_rewrite() {
    let input = b::program(vec![
        b::require_declaration("RelayMutation", "RelayMutation"),
        b::expression_statement(b::concatenation("a", 300)),
        mutation_class(
            b::identifier("RelayMutation"),
            vec![b::identifier("props")],
            vec![super_call(vec![b::identifier("props")]), this_x_equals_one()],
        ),
    ]);
    let output = run_transform(
        &EstreeJsonToolkit,
        "LikeMutation.json",
        &input.to_string(),
        &PrintOptions::default(),
    )
    .unwrap()
    .expect("constructor should be rewritten");

    let tree = EstreeJsonToolkit.parse(&output).unwrap();
    let method = tree_to_json(&tree)["body"][2]["body"]["body"][0].clone();
    assert_eq!(method["kind"], "method");
    assert_eq!(method["key"]["name"], "didReceiveProps");
    assert_eq!(method["value"]["params"], Value::Array(vec![]));
}
