//! Constructor matching by superclass shape.

use relaymod_ast::builders;
use relaymod_ast::equivalence::node_matches;
use relaymod_ast::{NodeIndex, SyntaxKind, SyntaxTree};
use serde_json::Value;

/// The superclass expression a mutation class must extend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BaseClassDescriptor {
    /// `extends Name`
    Identifier(String),
    /// `extends Namespace.Member`
    Member { namespace: String, member: String },
}

impl BaseClassDescriptor {
    /// The ESTree fragment a matching `superClass` must be equivalent to.
    pub fn pattern(&self) -> Value {
        match self {
            BaseClassDescriptor::Identifier(name) => builders::identifier(name),
            BaseClassDescriptor::Member { namespace, member } => {
                builders::member(builders::identifier(namespace), member)
            }
        }
    }
}

/// A constructor whose class extends a recognized base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The `MethodDefinition` with `kind: "constructor"`.
    pub constructor: NodeIndex,
    /// The enclosing `ClassDeclaration` or `ClassExpression`.
    pub class: NodeIndex,
}

/// All constructors, in pre-order, whose class extends `descriptor`.
pub fn find_matching_constructors(
    tree: &SyntaxTree,
    descriptor: &BaseClassDescriptor,
) -> Vec<Candidate> {
    let pattern = descriptor.pattern();
    tree.descendants(tree.root())
        .filter(|&index| is_constructor(tree, index))
        .filter_map(|constructor| {
            let class = enclosing_class(tree, constructor)?;
            let super_class = tree.get(class)?.child("superClass");
            (super_class.is_some() && node_matches(tree, super_class, &pattern))
                .then_some(Candidate { constructor, class })
        })
        .collect()
}

fn is_constructor(tree: &SyntaxTree, index: NodeIndex) -> bool {
    tree.get(index).is_some_and(|node| {
        node.kind == SyntaxKind::MethodDefinition && node.str_value("kind") == Some("constructor")
    })
}

/// `MethodDefinition` → `ClassBody` → class.
fn enclosing_class(tree: &SyntaxTree, method: NodeIndex) -> Option<NodeIndex> {
    let body = tree.parent(method);
    if !tree.is_kind(body, SyntaxKind::ClassBody) {
        return None;
    }
    let class = tree.parent(body);
    tree.kind(class)?.is_class().then_some(class)
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod matcher_tests;
