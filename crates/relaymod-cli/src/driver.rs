//! Sequential per-file runner.
//!
//! Each file is read, transformed and written on its own. A failure in one
//! file is recorded in its report and the run moves on to the next file.

use anyhow::{Context, Result};
use relaymod_ast::SyntaxToolkit;
use relaymod_common::Diagnostic;
use relaymod_transforms::transform_source;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

use crate::config::RunOptions;
use crate::fs::SourceFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// At least one constructor was rewritten. `written_to` is `None` for dry
    /// runs.
    Changed { written_to: Option<PathBuf> },
    Unmodified,
    /// Reading, parsing, transforming or writing failed.
    Failed { error: String },
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Skip diagnostics for candidates left untouched.
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub changed: usize,
    pub unmodified: usize,
    /// Skipped candidates, across all files.
    pub skipped: usize,
    pub errors: usize,
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    fn record(&mut self, report: FileReport) {
        match report.status {
            FileStatus::Changed { .. } => self.changed += 1,
            FileStatus::Unmodified => self.unmodified += 1,
            FileStatus::Failed { .. } => self.errors += 1,
        }
        self.skipped += report.diagnostics.len();
        self.reports.push(report);
    }

    pub const fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub const fn exit_code(&self) -> i32 {
        if self.has_errors() { 1 } else { 0 }
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.reports.iter().flat_map(|report| report.diagnostics.iter())
    }
}

/// Transform every file in order.
///
/// With `print`, transformed documents are written to `stdout`; an error
/// writing there aborts the run.
pub fn run(
    options: &RunOptions,
    toolkit: &dyn SyntaxToolkit,
    files: &[SourceFile],
    stdout: &mut dyn Write,
) -> Result<RunSummary> {
    let _span = info_span!("run", files = files.len(), dry = options.dry).entered();
    let mut summary = RunSummary::default();

    for file in files {
        let report = match process_file(options, toolkit, file) {
            Ok((report, output)) => {
                if options.print
                    && let Some(output) = output
                {
                    stdout
                        .write_all(output.as_bytes())
                        .context("failed to write to stdout")?;
                }
                report
            }
            Err(err) => {
                tracing::error!(file = %file.path.display(), "{err:#}");
                FileReport {
                    path: file.path.clone(),
                    status: FileStatus::Failed {
                        error: format!("{err:#}"),
                    },
                    diagnostics: Vec::new(),
                }
            }
        };
        summary.record(report);
    }

    Ok(summary)
}

/// Transform one file, returning its report and the new text if it changed.
pub fn process_file(
    options: &RunOptions,
    toolkit: &dyn SyntaxToolkit,
    file: &SourceFile,
) -> Result<(FileReport, Option<String>)> {
    let path = &file.path;
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path.display().to_string();
    let transformed = transform_source(toolkit, &file_name, &source, &options.print_options)
        .with_context(|| format!("failed to transform {}", path.display()))?;

    let status = match &transformed.output {
        None => FileStatus::Unmodified,
        Some(_) if options.dry => FileStatus::Changed { written_to: None },
        Some(output) => {
            let destination = output_path(options.out_dir.as_deref(), file);
            write_output(&destination, output)?;
            debug!(file = %path.display(), to = %destination.display(), "wrote transformed file");
            FileStatus::Changed {
                written_to: Some(destination),
            }
        }
    };

    let report = FileReport {
        path: path.clone(),
        status,
        diagnostics: transformed.outcome.skipped,
    };
    Ok((report, transformed.output))
}

/// Where the transformed text for `file` goes.
pub fn output_path(out_dir: Option<&Path>, file: &SourceFile) -> PathBuf {
    match out_dir {
        Some(out_dir) => out_dir.join(&file.relative),
        None => file.path.clone(),
    }
}

fn write_output(destination: &Path, output: &str) -> Result<()> {
    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(destination, output)
        .with_context(|| format!("failed to write {}", destination.display()))
}
