//! Source positions for diagnostics.
//!
//! ESTree reports `loc.start.line` 1-based and `loc.start.column` 0-based.
//! Everything user-facing in relaymod is 1-based, so the conversion happens
//! once, when a position is read from the tree.

use serde::Serialize;
use std::fmt;

/// A 1-based line/column position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourcePosition {
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column
    pub column: u32,
}

impl SourcePosition {
    pub const fn new(line: u32, column: u32) -> Self {
        SourcePosition { line, column }
    }

    /// Build from an ESTree `loc` position (1-based line, 0-based column).
    pub const fn from_estree(line: u32, column: u32) -> Self {
        SourcePosition {
            line,
            column: column.saturating_add(1),
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
