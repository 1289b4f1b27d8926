//! ESTree node kinds known to relaymod.
//!
//! Node types outside this list still load (as `SyntaxKind::Unknown`, with the
//! original `type` string kept on the node) and print back unchanged. They only
//! become an error when the reference classifier needs the role of one of
//! their fields.

macro_rules! syntax_kinds {
    ($($variant:ident),+ $(,)?) => {
        /// The `type` tag of an ESTree node.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum SyntaxKind {
            $($variant,)+
            Unknown,
        }

        impl SyntaxKind {
            /// Map an ESTree `type` string to its kind.
            pub fn from_type_name(name: &str) -> SyntaxKind {
                match name {
                    $(stringify!($variant) => SyntaxKind::$variant,)+
                    _ => SyntaxKind::Unknown,
                }
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(SyntaxKind::$variant => stringify!($variant),)+
                    SyntaxKind::Unknown => "Unknown",
                }
            }
        }
    };
}

syntax_kinds!(
    // Programs
    Program,
    File,
    // Names and literals
    Identifier,
    PrivateIdentifier,
    Literal,
    Super,
    ThisExpression,
    TemplateElement,
    // Statements
    ExpressionStatement,
    BlockStatement,
    StaticBlock,
    EmptyStatement,
    DebuggerStatement,
    WithStatement,
    ReturnStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    IfStatement,
    SwitchStatement,
    SwitchCase,
    ThrowStatement,
    TryStatement,
    CatchClause,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    // Declarations
    FunctionDeclaration,
    VariableDeclaration,
    VariableDeclarator,
    ClassDeclaration,
    // Expressions
    ArrayExpression,
    ObjectExpression,
    Property,
    FunctionExpression,
    ArrowFunctionExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    AssignmentExpression,
    LogicalExpression,
    MemberExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    SequenceExpression,
    TemplateLiteral,
    TaggedTemplateExpression,
    ClassExpression,
    SpreadElement,
    YieldExpression,
    AwaitExpression,
    ImportExpression,
    ChainExpression,
    MetaProperty,
    ParenthesizedExpression,
    // Classes
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    ClassProperty,
    // Patterns
    ObjectPattern,
    ArrayPattern,
    RestElement,
    AssignmentPattern,
    PropertyPattern,
    // Modules
    ImportDeclaration,
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportAttribute,
    ExportNamedDeclaration,
    ExportSpecifier,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
    // JSX
    JSXElement,
    JSXFragment,
    JSXOpeningElement,
    JSXClosingElement,
    JSXOpeningFragment,
    JSXClosingFragment,
    JSXAttribute,
    JSXSpreadAttribute,
    JSXExpressionContainer,
    JSXEmptyExpression,
    JSXSpreadChild,
    JSXText,
    JSXIdentifier,
    JSXMemberExpression,
    JSXNamespacedName,
);

impl SyntaxKind {
    #[inline]
    pub const fn is_class(self) -> bool {
        matches!(self, SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression)
    }
}
