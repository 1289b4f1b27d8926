#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use relaymod_ast::EstreeJsonToolkit;
use std::io::IsTerminal;

use relaymod_cli::args::CliArgs;
use relaymod_cli::config::{RelaymodConfig, RunOptions, load_config, resolve_config_path};
use relaymod_cli::fs::FileDiscovery;
use relaymod_cli::reporter::Reporter;
use relaymod_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // Only when RELAYMOD_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let config = match resolve_config_path(&cwd, args.config.as_deref())? {
        Some(path) => load_config(&path)?,
        None => RelaymodConfig::default(),
    };
    let options = RunOptions::resolve(&args, config);

    let discovery = FileDiscovery::new(&options.extensions, &options.ignore_patterns)?;
    let files = discovery.discover(&args.paths);

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let summary = driver::run(&options, &EstreeJsonToolkit, &files, &mut stdout)?;

    let color = !args.no_color && std::io::stderr().is_terminal();
    eprintln!("{}", Reporter::new(color).render(&summary, options.verbose));

    std::process::exit(summary.exit_code());
}
