//! Diagnostic types and message lookup for skipped rewrites.
//!
//! Diagnostics are advisory: they describe why a matched constructor was left
//! untouched and never influence whether the rest of a file is processed.

use serde::Serialize;
use std::fmt;

use crate::position::SourcePosition;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category. Skipped rewrites are the only diagnostics relaymod
/// reports, and they never fail a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
}

impl DiagnosticCategory {
    pub const fn name(self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "warning",
        }
    }
}

/// A diagnostic attached to a position in a file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    /// `None` when the tree carried no `loc` information for the node.
    pub position: Option<SourcePosition>,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a warning from a message definition and its template arguments.
    #[must_use]
    pub fn from_message(
        file: impl Into<String>,
        position: Option<SourcePosition>,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: file.into(),
            position,
            message_text: format_message(message.message, args),
            category: message.category,
            code: message.code,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{}:{}", self.file, position)?,
            None => write!(f, "{}", self.file)?,
        }
        write!(
            f,
            " - {} RM{}: {}",
            self.category.name(),
            self.code,
            self.message_text
        )
    }
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

pub mod diagnostic_codes {
    pub const CONSTRUCTOR_PARAMETER_NOT_IDENTIFIER: u32 = 9001;
    pub const FIRST_STATEMENT_NOT_SUPER_CALL: u32 = 9002;
    pub const CONSTRUCTOR_PARAMETER_USED_OUTSIDE_SUPER: u32 = 9003;
    pub const ARGUMENTS_OBJECT_USED: u32 = 9004;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const CONSTRUCTOR_PARAMETER_NOT_IDENTIFIER: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::CONSTRUCTOR_PARAMETER_NOT_IDENTIFIER,
        category: DiagnosticCategory::Warning,
        message: "constructor does not take an identifier as its only argument.",
    };

    pub const FIRST_STATEMENT_NOT_SUPER_CALL: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::FIRST_STATEMENT_NOT_SUPER_CALL,
        category: DiagnosticCategory::Warning,
        message: "first statement is not `super({0})`.",
    };

    pub const CONSTRUCTOR_PARAMETER_USED_OUTSIDE_SUPER: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::CONSTRUCTOR_PARAMETER_USED_OUTSIDE_SUPER,
        category: DiagnosticCategory::Warning,
        message: "constructor parameter is used outside the call to super.",
    };

    pub const ARGUMENTS_OBJECT_USED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::ARGUMENTS_OBJECT_USED,
        category: DiagnosticCategory::Warning,
        message: "legacy arguments object is used in the constructor.",
    };

    pub const ALL: [DiagnosticMessage; 4] = [
        CONSTRUCTOR_PARAMETER_NOT_IDENTIFIER,
        FIRST_STATEMENT_NOT_SUPER_CALL,
        CONSTRUCTOR_PARAMETER_USED_OUTSIDE_SUPER,
        ARGUMENTS_OBJECT_USED,
    ];
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    diagnostic_messages::ALL.iter().find(|m| m.code == code)
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
