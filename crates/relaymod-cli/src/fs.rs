//! Input discovery: explicit files plus recursive directory walks.

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories never entered while walking.
const SKIPPED_DIRECTORIES: [&str; 1] = ["node_modules"];

/// A file to transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path below the argument it was found under; the file name for files
    /// given directly. Used to place output under `--out-dir`.
    pub relative: PathBuf,
}

pub struct FileDiscovery {
    extensions: Vec<String>,
    ignore: GlobSet,
}

impl FileDiscovery {
    pub fn new(extensions: &[String], ignore_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in ignore_patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(false)
                .build()
                .with_context(|| format!("invalid ignore pattern: {pattern}"))?;
            builder.add(glob);
        }
        let ignore = builder.build().context("failed to build ignore patterns")?;

        Ok(FileDiscovery {
            extensions: extensions.to_vec(),
            ignore,
        })
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.ignore.is_match(path)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(ext))
            })
    }

    /// Expand `paths` into the files to transform, in argument order and
    /// sorted by name within each directory.
    ///
    /// Files named directly are always kept, even when they do not exist, so
    /// the runner can report them. Each file is returned once.
    pub fn discover(&self, paths: &[PathBuf]) -> Vec<SourceFile> {
        let mut seen = FxHashSet::default();
        let mut files = Vec::new();
        let mut push = |file: SourceFile| {
            if seen.insert(file.path.clone()) {
                files.push(file);
            }
        };

        for root in paths {
            if !root.is_dir() {
                let relative = root
                    .file_name()
                    .map_or_else(|| root.clone(), PathBuf::from);
                push(SourceFile {
                    path: root.clone(),
                    relative,
                });
                continue;
            }

            let walker = WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| entry.depth() == 0 || !is_skipped_directory(entry));
            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::warn!(root = %root.display(), "skipping unreadable entry: {err}");
                        continue;
                    }
                };
                let path = entry.path();
                if !entry.file_type().is_file() || !self.has_extension(path) || self.is_ignored(path)
                {
                    continue;
                }
                let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
                push(SourceFile {
                    path: path.to_path_buf(),
                    relative,
                });
            }
        }

        tracing::debug!(files = files.len(), "discovered input files");
        files
    }
}

/// Hidden directories and `node_modules`.
fn is_skipped_directory(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    entry.file_name().to_str().is_some_and(|name| {
        name.starts_with('.') || SKIPPED_DIRECTORIES.contains(&name)
    })
}
