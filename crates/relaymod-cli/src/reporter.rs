use colored::Colorize;
use relaymod_common::{Diagnostic, DiagnosticCategory};

use crate::driver::{FileReport, FileStatus, RunSummary};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub const fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// Diagnostics, failed files and (when `verbose`) per-file status lines,
    /// one per line, followed by the summary.
    pub fn render(&self, summary: &RunSummary, verbose: bool) -> String {
        let mut lines = Vec::new();
        for report in &summary.reports {
            lines.extend(report.diagnostics.iter().map(|d| self.format_diagnostic(d)));
            if let Some(line) = self.format_report(report, verbose) {
                lines.push(line);
            }
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(self.format_summary(summary));
        lines.join("\n")
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let location = match diagnostic.position {
            Some(position) => format!("{}:{}", diagnostic.file, position),
            None if diagnostic.file.is_empty() => "<unknown>".to_string(),
            None => diagnostic.file.clone(),
        };
        format!(
            "{} - {} {}: {}",
            location,
            self.format_category(diagnostic.category),
            self.format_code(diagnostic.code),
            diagnostic.message_text
        )
    }

    fn format_report(&self, report: &FileReport, verbose: bool) -> Option<String> {
        let path = report.path.display();
        match &report.status {
            FileStatus::Failed { error } => {
                Some(format!("{} {path}: {error}", self.paint("ERR", Paint::Red)))
            }
            FileStatus::Changed { .. } if verbose => {
                Some(format!("{} {path}", self.paint("OKK", Paint::Green)))
            }
            FileStatus::Unmodified if verbose => {
                Some(format!("{} {path}", self.paint("NOC", Paint::Dimmed)))
            }
            FileStatus::Changed { .. } | FileStatus::Unmodified => None,
        }
    }

    pub fn format_summary(&self, summary: &RunSummary) -> String {
        let errors = format!("{} errors", summary.errors);
        let errors = if summary.errors > 0 {
            self.paint(&errors, Paint::Red)
        } else {
            errors
        };
        format!(
            "Results:\n{}\n{} unmodified\n{}\n{}",
            errors,
            summary.unmodified,
            self.paint(&format!("{} skipped", summary.skipped), Paint::Yellow),
            self.paint(&format!("{} changed", summary.changed), Paint::Green),
        )
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.name();
        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        let label = format!("RM{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }

    fn paint(&self, text: &str, paint: Paint) -> String {
        if !self.color {
            return text.to_string();
        }
        match paint {
            Paint::Red => text.red().to_string(),
            Paint::Green => text.green().to_string(),
            Paint::Yellow => text.yellow().to_string(),
            Paint::Dimmed => text.dimmed().to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum Paint {
    Red,
    Green,
    Yellow,
    Dimmed,
}
