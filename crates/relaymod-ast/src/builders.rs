//! Builders for ESTree JSON fragments.
//!
//! Used for structural patterns (the base classes the matcher looks for, the
//! expected `super(param)` arguments) and for assembling documents in tests.

use serde_json::{Value, json};

pub fn identifier(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

pub fn string_literal(value: &str) -> Value {
    json!({ "type": "Literal", "value": value, "raw": format!("'{value}'") })
}

pub fn number_literal(value: f64) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

pub fn this_expression() -> Value {
    json!({ "type": "ThisExpression" })
}

pub fn super_node() -> Value {
    json!({ "type": "Super" })
}

/// `object.property`
pub fn member(object: Value, property: &str) -> Value {
    json!({
        "type": "MemberExpression",
        "object": object,
        "property": identifier(property),
        "computed": false,
        "optional": false,
    })
}

/// `object[property]`
pub fn computed_member(object: Value, property: Value) -> Value {
    json!({
        "type": "MemberExpression",
        "object": object,
        "property": property,
        "computed": true,
        "optional": false,
    })
}

pub fn call(callee: Value, arguments: Vec<Value>) -> Value {
    json!({
        "type": "CallExpression",
        "callee": callee,
        "arguments": arguments,
        "optional": false,
    })
}

/// `super(arguments...)`
pub fn super_call(arguments: Vec<Value>) -> Value {
    call(super_node(), arguments)
}

/// `require('module')`
pub fn require_call(module: &str) -> Value {
    call(identifier("require"), vec![string_literal(module)])
}

pub fn assignment(left: Value, right: Value) -> Value {
    json!({
        "type": "AssignmentExpression",
        "operator": "=",
        "left": left,
        "right": right,
    })
}

pub fn binary(operator: &str, left: Value, right: Value) -> Value {
    json!({
        "type": "BinaryExpression",
        "operator": operator,
        "left": left,
        "right": right,
    })
}

/// `operand + operand + ...` with `count` operands, left-nested the way
/// parsers emit it.
pub fn concatenation(operand: &str, count: usize) -> Value {
    (1..count).fold(identifier(operand), |chain, _| {
        binary("+", chain, identifier(operand))
    })
}

pub fn expression_statement(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

pub fn return_statement(argument: Option<Value>) -> Value {
    json!({ "type": "ReturnStatement", "argument": argument })
}

pub fn block(body: Vec<Value>) -> Value {
    json!({ "type": "BlockStatement", "body": body })
}

pub fn function_expression(params: Vec<Value>, body: Vec<Value>) -> Value {
    json!({
        "type": "FunctionExpression",
        "id": null,
        "expression": false,
        "generator": false,
        "async": false,
        "params": params,
        "body": block(body),
    })
}

pub fn arrow_function(params: Vec<Value>, body: Value) -> Value {
    let is_expression = body.get("type").and_then(Value::as_str) != Some("BlockStatement");
    json!({
        "type": "ArrowFunctionExpression",
        "id": null,
        "expression": is_expression,
        "generator": false,
        "async": false,
        "params": params,
        "body": body,
    })
}

pub fn method_definition(kind: &str, key: Value, params: Vec<Value>, body: Vec<Value>) -> Value {
    json!({
        "type": "MethodDefinition",
        "static": false,
        "computed": false,
        "key": key,
        "kind": kind,
        "value": function_expression(params, body),
    })
}

/// `constructor(params) { body }`
pub fn constructor(params: Vec<Value>, body: Vec<Value>) -> Value {
    method_definition("constructor", identifier("constructor"), params, body)
}

pub fn class_declaration(name: &str, super_class: Option<Value>, members: Vec<Value>) -> Value {
    json!({
        "type": "ClassDeclaration",
        "id": identifier(name),
        "superClass": super_class,
        "body": { "type": "ClassBody", "body": members },
    })
}

pub fn class_expression(super_class: Option<Value>, members: Vec<Value>) -> Value {
    json!({
        "type": "ClassExpression",
        "id": null,
        "superClass": super_class,
        "body": { "type": "ClassBody", "body": members },
    })
}

pub fn variable_declarator(id: Value, init: Option<Value>) -> Value {
    json!({ "type": "VariableDeclarator", "id": id, "init": init })
}

pub fn variable_declaration(kind: &str, declarators: Vec<Value>) -> Value {
    json!({ "type": "VariableDeclaration", "declarations": declarators, "kind": kind })
}

/// `const name = require('module');`
pub fn require_declaration(name: &str, module: &str) -> Value {
    variable_declaration(
        "const",
        vec![variable_declarator(identifier(name), Some(require_call(module)))],
    )
}

/// `import name from 'module';`
pub fn import_default(name: &str, module: &str) -> Value {
    json!({
        "type": "ImportDeclaration",
        "specifiers": [{ "type": "ImportDefaultSpecifier", "local": identifier(name) }],
        "source": string_literal(module),
    })
}

/// `import * as name from 'module';`
pub fn import_namespace(name: &str, module: &str) -> Value {
    json!({
        "type": "ImportDeclaration",
        "specifiers": [{ "type": "ImportNamespaceSpecifier", "local": identifier(name) }],
        "source": string_literal(module),
    })
}

pub fn object_expression(properties: Vec<Value>) -> Value {
    json!({ "type": "ObjectExpression", "properties": properties })
}

/// `key: value`, `[key]: value` when `computed`.
pub fn property(key: Value, value: Value, computed: bool) -> Value {
    json!({
        "type": "Property",
        "method": false,
        "shorthand": false,
        "computed": computed,
        "key": key,
        "value": value,
        "kind": "init",
    })
}

/// `{ name }`
pub fn shorthand_property(name: &str) -> Value {
    json!({
        "type": "Property",
        "method": false,
        "shorthand": true,
        "computed": false,
        "key": identifier(name),
        "value": identifier(name),
        "kind": "init",
    })
}

pub fn program(body: Vec<Value>) -> Value {
    json!({ "type": "Program", "body": body, "sourceType": "module" })
}

/// Attach an ESTree `loc` (1-based line, 0-based column) to a node.
pub fn with_loc(mut node: Value, line: u32, column: u32) -> Value {
    if let Value::Object(object) = &mut node {
        object.insert(
            "loc".to_string(),
            json!({
                "start": { "line": line, "column": column },
                "end": { "line": line, "column": column },
            }),
        );
    }
    node
}
