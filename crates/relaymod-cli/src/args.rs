use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the relaymod binary.
#[derive(Parser, Debug)]
#[command(
    name = "relaymod",
    version,
    about = "Rewrite Relay mutation constructors into didReceiveProps methods"
)]
pub struct CliArgs {
    /// ESTree JSON files or directories to transform.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    // ==================== Output ====================
    /// Do not write any files.
    #[arg(short = 'd', long)]
    pub dry: bool,

    /// Print transformed documents to stdout.
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Write results under this directory instead of overwriting the inputs.
    #[arg(long = "out-dir", alias = "outDir")]
    pub out_dir: Option<PathBuf>,

    // ==================== Discovery ====================
    /// File extensions picked up when walking directories.
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Glob of paths to skip; may be repeated.
    #[arg(long = "ignore-pattern", alias = "ignorePattern")]
    pub ignore_pattern: Vec<String>,

    /// Path to a relaymod.json config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // ==================== Printing ====================
    /// Print multi-line, indented JSON.
    #[arg(long, conflicts_with = "compact")]
    pub pretty: bool,

    /// Print single-line JSON.
    #[arg(long)]
    pub compact: bool,

    /// Indentation width for pretty output.
    #[arg(long)]
    pub indent: Option<usize>,

    // ==================== Reporting ====================
    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Also list files that were left unmodified.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// `Some(true)` for `--pretty`, `Some(false)` for `--compact`.
    pub const fn pretty_override(&self) -> Option<bool> {
        if self.pretty {
            Some(true)
        } else if self.compact {
            Some(false)
        } else {
            None
        }
    }
}
