//! The parse/print capability handed to the transform driver.
//!
//! The driver never parses or prints on its own: it receives a
//! `SyntaxToolkit` and uses it to turn source text into a tree and, only when
//! something was rewritten, the tree back into text.

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::AstError;
use crate::estree::{tree_from_str, tree_to_json};
use crate::tree::SyntaxTree;

/// Rendering hints for the printer. The transforms never read them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintOptions {
    /// Multi-line output instead of a single line.
    pub pretty: bool,
    /// Indentation width for pretty output.
    pub indent: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            pretty: true,
            indent: 2,
        }
    }
}

pub trait SyntaxToolkit {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn parse(&self, source: &str) -> Result<SyntaxTree, AstError>;

    fn print(&self, tree: &SyntaxTree, options: &PrintOptions) -> Result<String, AstError>;
}

/// Reads and writes ESTree JSON, as produced by acorn, espree or esprima with
/// locations enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct EstreeJsonToolkit;

impl SyntaxToolkit for EstreeJsonToolkit {
    fn name(&self) -> &'static str {
        "estree-json"
    }

    fn parse(&self, source: &str) -> Result<SyntaxTree, AstError> {
        tree_from_str(source)
    }

    fn print(&self, tree: &SyntaxTree, options: &PrintOptions) -> Result<String, AstError> {
        let value = tree_to_json(tree);
        let mut output = if options.pretty {
            let indent = " ".repeat(options.indent);
            let mut buffer = Vec::new();
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
            value
                .serialize(&mut serializer)
                .map_err(AstError::Print)?;
            // serde_json only ever writes UTF-8.
            String::from_utf8_lossy(&buffer).into_owned()
        } else {
            serde_json::to_string(&value).map_err(AstError::Print)?
        };
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "tests/toolkit_tests.rs"]
mod toolkit_tests;
