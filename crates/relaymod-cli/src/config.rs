//! `relaymod.json` loading and merging with command-line flags.

use anyhow::{Context, Result, bail};
use relaymod_ast::PrintOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "relaymod.json";
pub const DEFAULT_EXTENSIONS: [&str; 1] = ["json"];

/// Contents of a `relaymod.json` file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RelaymodConfig {
    #[serde(default)]
    pub print_options: Option<PrintOptions>,
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub ignore_patterns: Option<Vec<String>>,
}

pub fn parse_config(source: &str) -> Result<RelaymodConfig> {
    serde_json::from_str(source).context("invalid relaymod config")
}

pub fn load_config(path: &Path) -> Result<RelaymodConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// The config file to use: an explicit `--config` path, which must exist, or
/// `relaymod.json` in `cwd` if there is one.
pub fn resolve_config_path(cwd: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(explicit) = explicit else {
        let candidate = cwd.join(CONFIG_FILE_NAME);
        return Ok(candidate.is_file().then_some(candidate));
    };

    let candidate = if explicit.is_absolute() {
        explicit.to_path_buf()
    } else {
        cwd.join(explicit)
    };
    if !candidate.is_file() {
        bail!("config file not found at {}", candidate.display());
    }
    Ok(Some(candidate))
}

/// Settings for one run, after merging the config file and the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub print_options: PrintOptions,
    /// Lowercase, without leading dots.
    pub extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub dry: bool,
    pub print: bool,
    pub out_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            print_options: PrintOptions::default(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
            ignore_patterns: Vec::new(),
            dry: false,
            print: false,
            out_dir: None,
            verbose: false,
        }
    }
}

impl RunOptions {
    /// Flags win over the config file. Ignore patterns from both are kept.
    pub fn resolve(args: &CliArgs, config: RelaymodConfig) -> RunOptions {
        let mut print_options = config.print_options.unwrap_or_default();
        if let Some(pretty) = args.pretty_override() {
            print_options.pretty = pretty;
        }
        if let Some(indent) = args.indent {
            print_options.indent = indent;
        }

        let extensions = args
            .extensions
            .clone()
            .or(config.extensions)
            .map(|extensions| normalize_extensions(&extensions))
            .filter(|extensions| !extensions.is_empty())
            .unwrap_or_else(|| RunOptions::default().extensions);

        let mut ignore_patterns = config.ignore_patterns.unwrap_or_default();
        ignore_patterns.extend(args.ignore_pattern.iter().cloned());

        RunOptions {
            print_options,
            extensions,
            ignore_patterns,
            dry: args.dry,
            print: args.print,
            out_dir: args.out_dir.clone(),
            verbose: args.verbose,
        }
    }
}

fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}
