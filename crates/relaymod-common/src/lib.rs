//! Common types and utilities for the relaymod codemod.
//!
//! This crate provides foundational types used across all relaymod crates:
//! - Line/column source positions (`SourcePosition`)
//! - Diagnostics reported for skipped rewrites (`Diagnostic`, codes, message templates)

// Position types for line/column source locations
pub mod position;
pub use position::SourcePosition;

// Diagnostic types, codes and message templates
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message,
};
