//! Static table of node-bearing fields and their semantic role.
//!
//! The reference classifier asks one question of an identifier's position:
//! can the field it sits in hold an expression, and if so is it a property
//! name that only becomes an expression when the owner is `computed`?

use crate::error::AstError;
use crate::syntax_kind::SyntaxKind;

/// Semantic role of a node-bearing field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRole {
    /// Holds an expression; an identifier here reads or writes a variable.
    Expression,
    /// Holds a property or member name; an expression only when the owner is
    /// `computed`.
    Key,
    /// Declares a binding: declarator ids, parameters, patterns.
    Binding,
    /// Statement label.
    Label,
    /// A fixed name that never refers to a variable (`new.target`,
    /// import/export names, JSX names).
    Name,
    /// Statements, bodies and other structural children.
    Structure,
}

use FieldRole::{Binding, Expression, Key, Label, Name, Structure};

type FieldTable = &'static [(&'static str, FieldRole)];

/// Node-bearing fields of `kind`; `None` for `SyntaxKind::Unknown`.
pub fn node_fields(kind: SyntaxKind) -> Option<FieldTable> {
    let table: FieldTable = match kind {
        SyntaxKind::Program => &[("body", Structure)],
        SyntaxKind::File => &[("program", Structure)],

        SyntaxKind::Identifier => &[],
        SyntaxKind::PrivateIdentifier => &[],
        SyntaxKind::Literal => &[],
        SyntaxKind::Super => &[],
        SyntaxKind::ThisExpression => &[],
        SyntaxKind::TemplateElement => &[],

        SyntaxKind::ExpressionStatement => &[("expression", Expression)],
        SyntaxKind::BlockStatement | SyntaxKind::StaticBlock => &[("body", Structure)],
        SyntaxKind::EmptyStatement | SyntaxKind::DebuggerStatement => &[],
        SyntaxKind::WithStatement => &[("object", Expression), ("body", Structure)],
        SyntaxKind::ReturnStatement | SyntaxKind::ThrowStatement => &[("argument", Expression)],
        SyntaxKind::LabeledStatement => &[("label", Label), ("body", Structure)],
        SyntaxKind::BreakStatement | SyntaxKind::ContinueStatement => &[("label", Label)],
        SyntaxKind::IfStatement => &[
            ("test", Expression),
            ("consequent", Structure),
            ("alternate", Structure),
        ],
        SyntaxKind::SwitchStatement => &[("discriminant", Expression), ("cases", Structure)],
        SyntaxKind::SwitchCase => &[("test", Expression), ("consequent", Structure)],
        SyntaxKind::TryStatement => &[
            ("block", Structure),
            ("handler", Structure),
            ("finalizer", Structure),
        ],
        SyntaxKind::CatchClause => &[("param", Binding), ("body", Structure)],
        SyntaxKind::WhileStatement => &[("test", Expression), ("body", Structure)],
        SyntaxKind::DoWhileStatement => &[("body", Structure), ("test", Expression)],
        SyntaxKind::ForStatement => &[
            ("init", Expression),
            ("test", Expression),
            ("update", Expression),
            ("body", Structure),
        ],
        SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => &[
            ("left", Expression),
            ("right", Expression),
            ("body", Structure),
        ],

        SyntaxKind::FunctionDeclaration | SyntaxKind::FunctionExpression => &[
            ("id", Binding),
            ("params", Binding),
            ("body", Structure),
        ],
        SyntaxKind::ArrowFunctionExpression => &[
            ("id", Binding),
            ("params", Binding),
            ("body", Expression),
        ],
        SyntaxKind::VariableDeclaration => &[("declarations", Structure)],
        SyntaxKind::VariableDeclarator => &[("id", Binding), ("init", Expression)],
        SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression => &[
            ("id", Binding),
            ("superClass", Expression),
            ("body", Structure),
            ("decorators", Structure),
        ],

        SyntaxKind::ArrayExpression => &[("elements", Expression)],
        SyntaxKind::ObjectExpression => &[("properties", Structure)],
        SyntaxKind::Property => &[("key", Key), ("value", Expression)],
        SyntaxKind::UnaryExpression
        | SyntaxKind::UpdateExpression
        | SyntaxKind::SpreadElement
        | SyntaxKind::YieldExpression
        | SyntaxKind::AwaitExpression => &[("argument", Expression)],
        SyntaxKind::BinaryExpression
        | SyntaxKind::LogicalExpression
        | SyntaxKind::AssignmentExpression => &[("left", Expression), ("right", Expression)],
        SyntaxKind::MemberExpression => &[("object", Expression), ("property", Key)],
        SyntaxKind::ConditionalExpression => &[
            ("test", Expression),
            ("consequent", Expression),
            ("alternate", Expression),
        ],
        SyntaxKind::CallExpression | SyntaxKind::NewExpression => {
            &[("callee", Expression), ("arguments", Expression)]
        }
        SyntaxKind::SequenceExpression => &[("expressions", Expression)],
        SyntaxKind::TemplateLiteral => &[("quasis", Structure), ("expressions", Expression)],
        SyntaxKind::TaggedTemplateExpression => &[("tag", Expression), ("quasi", Structure)],
        SyntaxKind::ImportExpression => &[("source", Expression), ("options", Expression)],
        SyntaxKind::ChainExpression | SyntaxKind::ParenthesizedExpression => {
            &[("expression", Expression)]
        }
        SyntaxKind::MetaProperty => &[("meta", Name), ("property", Name)],

        SyntaxKind::ClassBody => &[("body", Structure)],
        SyntaxKind::MethodDefinition => &[
            ("key", Key),
            ("value", Structure),
            ("decorators", Structure),
        ],
        SyntaxKind::PropertyDefinition | SyntaxKind::ClassProperty => &[
            ("key", Key),
            ("value", Expression),
            ("decorators", Structure),
        ],

        SyntaxKind::ObjectPattern => &[("properties", Binding)],
        SyntaxKind::ArrayPattern => &[("elements", Binding)],
        SyntaxKind::RestElement => &[("argument", Binding)],
        SyntaxKind::AssignmentPattern => &[("left", Binding), ("right", Expression)],
        SyntaxKind::PropertyPattern => &[("key", Key), ("pattern", Binding)],

        SyntaxKind::ImportDeclaration => &[
            ("specifiers", Structure),
            ("source", Structure),
            ("attributes", Structure),
        ],
        SyntaxKind::ImportSpecifier => &[("imported", Name), ("local", Binding)],
        SyntaxKind::ImportDefaultSpecifier | SyntaxKind::ImportNamespaceSpecifier => {
            &[("local", Binding)]
        }
        SyntaxKind::ImportAttribute => &[("key", Name), ("value", Structure)],
        SyntaxKind::ExportNamedDeclaration => &[
            ("declaration", Structure),
            ("specifiers", Structure),
            ("source", Structure),
            ("attributes", Structure),
        ],
        SyntaxKind::ExportSpecifier => &[("local", Name), ("exported", Name)],
        SyntaxKind::ExportDefaultDeclaration => &[("declaration", Expression)],
        SyntaxKind::ExportAllDeclaration => &[
            ("exported", Name),
            ("source", Structure),
            ("attributes", Structure),
        ],

        SyntaxKind::JSXElement => &[
            ("openingElement", Structure),
            ("closingElement", Structure),
            ("children", Structure),
        ],
        SyntaxKind::JSXFragment => &[
            ("openingFragment", Structure),
            ("closingFragment", Structure),
            ("children", Structure),
        ],
        SyntaxKind::JSXOpeningElement => &[
            ("name", Name),
            ("attributes", Structure),
            ("typeArguments", Structure),
        ],
        SyntaxKind::JSXClosingElement => &[("name", Name)],
        SyntaxKind::JSXOpeningFragment | SyntaxKind::JSXClosingFragment => &[],
        SyntaxKind::JSXAttribute => &[("name", Name), ("value", Structure)],
        SyntaxKind::JSXSpreadAttribute => &[("argument", Expression)],
        SyntaxKind::JSXExpressionContainer | SyntaxKind::JSXSpreadChild => {
            &[("expression", Expression)]
        }
        SyntaxKind::JSXEmptyExpression | SyntaxKind::JSXText | SyntaxKind::JSXIdentifier => &[],
        SyntaxKind::JSXMemberExpression => &[("object", Name), ("property", Name)],
        SyntaxKind::JSXNamespacedName => &[("namespace", Name), ("name", Name)],

        SyntaxKind::Unknown => return None,
    };
    Some(table)
}

/// Role of `field` on a node of `kind` (whose ESTree type is `type_name`).
///
/// Unknown kinds and unlisted fields are errors in the table itself and are
/// reported rather than guessed.
pub fn field_role(kind: SyntaxKind, type_name: &str, field: &str) -> Result<FieldRole, AstError> {
    let table = node_fields(kind).ok_or_else(|| AstError::UnknownNodeKind {
        type_name: type_name.to_string(),
    })?;
    table
        .iter()
        .find(|(name, _)| *name == field)
        .map(|&(_, role)| role)
        .ok_or_else(|| AstError::UnknownField {
            type_name: type_name.to_string(),
            field: field.to_string(),
        })
}

#[cfg(test)]
#[path = "tests/field_roles_tests.rs"]
mod field_roles_tests;
