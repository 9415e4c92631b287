//! Count the frequency of each word in a file, then answer queries about the
//! counts read from stdin.

mod cli;
mod session;
mod words;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn init_tracing(cli: &Cli) {
    // --quiet disables all logs, --verbose honours RUST_LOG if set and
    // otherwise shows debug logs. By default only warnings are shown.
    let filter = if cli.quiet {
        EnvFilter::new("off")
    } else if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into())
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let input = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("cannot open file [{}]", cli.file.display()))?;

    let mut tree = words::new_tree(cli.node_limit);
    let tally = words::count_words(&mut tree, &input);
    info!(
        words = tally.words,
        distinct = tally.distinct,
        dropped = tally.dropped,
        height = tree.height(),
        "counted words"
    );

    session::run(tree, io::stdin().lock(), io::stdout().lock(), io::stderr())
        .context("session failed")
}
