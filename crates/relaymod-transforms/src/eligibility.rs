//! Structural checks deciding whether a constructor can become `didReceiveProps`.
//!
//! The checks run in a fixed order and stop at the first failure:
//!
//! 1. the constructor takes exactly one parameter, a plain identifier;
//! 2. the body starts with `super(param)`;
//! 3. nothing after that statement references the parameter;
//! 4. nothing in the body references `arguments`.
//!
//! Checks 1 and 2 fix the shape the rewriter edits. Checks 3 and 4 ensure the
//! parameter is not needed once the constructor stops receiving it.

use relaymod_ast::builders;
use relaymod_ast::equivalence::list_matches;
use relaymod_ast::{AstError, NodeIndex, NodeList, SyntaxKind, SyntaxTree};
use relaymod_common::{Diagnostic, DiagnosticMessage, SourcePosition, diagnostic_messages};
use serde_json::Value;

use crate::matcher::Candidate;
use crate::references::find_variable_references;

/// Why a matched constructor was left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    ParameterNotIdentifier,
    FirstStatementNotSuperCall { param_name: String },
    ParameterUsedOutsideSuper { param_name: String },
    ArgumentsObjectUsed,
}

impl SkipReason {
    pub const fn message(&self) -> &'static DiagnosticMessage {
        match self {
            SkipReason::ParameterNotIdentifier => {
                &diagnostic_messages::CONSTRUCTOR_PARAMETER_NOT_IDENTIFIER
            }
            SkipReason::FirstStatementNotSuperCall { .. } => {
                &diagnostic_messages::FIRST_STATEMENT_NOT_SUPER_CALL
            }
            SkipReason::ParameterUsedOutsideSuper { .. } => {
                &diagnostic_messages::CONSTRUCTOR_PARAMETER_USED_OUTSIDE_SUPER
            }
            SkipReason::ArgumentsObjectUsed => &diagnostic_messages::ARGUMENTS_OBJECT_USED,
        }
    }

    pub const fn code(&self) -> u32 {
        self.message().code
    }

    pub fn to_diagnostic(&self, file: &str, position: Option<SourcePosition>) -> Diagnostic {
        let param_name = match self {
            SkipReason::FirstStatementNotSuperCall { param_name }
            | SkipReason::ParameterUsedOutsideSuper { param_name } => Some(param_name.as_str()),
            SkipReason::ParameterNotIdentifier | SkipReason::ArgumentsObjectUsed => None,
        };
        let args: Vec<&str> = param_name.into_iter().collect();
        Diagnostic::from_message(file, position, self.message(), &args)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EligibilityVerdict {
    Eligible {
        param_name: String,
    },
    Skipped {
        reason: SkipReason,
        /// Position of the constructor, or of its class when the constructor
        /// carries no `loc`.
        position: Option<SourcePosition>,
    },
}

impl EligibilityVerdict {
    pub const fn is_eligible(&self) -> bool {
        matches!(self, EligibilityVerdict::Eligible { .. })
    }
}

/// The pieces of a constructor the checks and the rewriter work on.
pub(crate) struct ConstructorParts<'a> {
    /// The constructor's `FunctionExpression`.
    pub function: NodeIndex,
    pub params: &'a NodeList,
    /// The function's `BlockStatement`.
    pub block: NodeIndex,
    pub statements: &'a NodeList,
}

pub(crate) fn constructor_parts(
    tree: &SyntaxTree,
    constructor: NodeIndex,
) -> Result<ConstructorParts<'_>, AstError> {
    let method = tree.get(constructor).ok_or(AstError::MalformedNode {
        type_name: "MethodDefinition".to_string(),
        expected: "a node in the tree",
    })?;
    let malformed = |expected| AstError::MalformedNode {
        type_name: method.type_name.clone(),
        expected,
    };

    let function = method.child("value");
    let function_node = tree.get(function).ok_or_else(|| malformed("a function `value`"))?;
    let params = function_node
        .list("params")
        .ok_or_else(|| malformed("a `params` list on its function"))?;
    let block = function_node.child("body");
    let statements = tree
        .get(block)
        .filter(|node| node.kind == SyntaxKind::BlockStatement)
        .and_then(|node| node.list("body"))
        .ok_or_else(|| malformed("a block statement body on its function"))?;

    Ok(ConstructorParts {
        function,
        params,
        block,
        statements,
    })
}

/// Run the four checks against `candidate`.
///
/// Errors only for malformed constructors or gaps in the field-role table;
/// an ineligible constructor is a `Skipped` verdict.
pub fn check_eligibility(
    tree: &SyntaxTree,
    candidate: &Candidate,
) -> Result<EligibilityVerdict, AstError> {
    let parts = constructor_parts(tree, candidate.constructor)?;
    let skipped = |reason| EligibilityVerdict::Skipped {
        reason,
        position: candidate_position(tree, candidate),
    };

    let param_name = match parts.params.nodes.as_slice() {
        [param] => tree.identifier_name(*param),
        _ => None,
    };
    let Some(param_name) = param_name else {
        return Ok(skipped(SkipReason::ParameterNotIdentifier));
    };

    let statements = parts.statements.nodes.as_slice();
    let Some((&first, rest)) = statements.split_first() else {
        return Ok(skipped(SkipReason::FirstStatementNotSuperCall {
            param_name: param_name.to_string(),
        }));
    };
    if !is_super_call_with(tree, first, &builders::identifier(param_name)) {
        return Ok(skipped(SkipReason::FirstStatementNotSuperCall {
            param_name: param_name.to_string(),
        }));
    }

    if !find_variable_references(tree, rest, param_name)?.is_empty() {
        return Ok(skipped(SkipReason::ParameterUsedOutsideSuper {
            param_name: param_name.to_string(),
        }));
    }

    if !find_variable_references(tree, statements, "arguments")?.is_empty() {
        return Ok(skipped(SkipReason::ArgumentsObjectUsed));
    }

    Ok(EligibilityVerdict::Eligible {
        param_name: param_name.to_string(),
    })
}

/// `super(<argument>);`
fn is_super_call_with(tree: &SyntaxTree, statement: NodeIndex, argument: &Value) -> bool {
    let Some(node) = tree.get(statement) else {
        return false;
    };
    if node.kind != SyntaxKind::ExpressionStatement {
        return false;
    }
    let Some(call) = tree.get(node.child("expression")) else {
        return false;
    };
    if call.kind != SyntaxKind::CallExpression
        || !tree.is_kind(call.child("callee"), SyntaxKind::Super)
    {
        return false;
    }
    let expected = Value::Array(vec![argument.clone()]);
    call.list("arguments")
        .is_some_and(|arguments| list_matches(tree, arguments, &expected))
}

fn candidate_position(tree: &SyntaxTree, candidate: &Candidate) -> Option<SourcePosition> {
    tree.get(candidate.constructor)
        .and_then(|node| node.position)
        .or_else(|| tree.get(candidate.class).and_then(|node| node.position))
}

#[cfg(test)]
#[path = "tests/eligibility_tests.rs"]
mod eligibility_tests;
