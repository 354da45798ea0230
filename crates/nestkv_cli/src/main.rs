//! NestKV CLI
//!
//! A line-oriented shell over an in-process NestKV store.
//!
//! # Commands
//!
//! - `READ <key>` / `WRITE <key> <val>` / `DELETE <key>`
//! - `START` / `COMMIT` / `ABORT` for nested transactions
//! - `HELP`, `QUIT`

mod repl;

use clap::Parser;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// NestKV interactive key-value shell.
#[derive(Parser)]
#[command(name = "nestkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging. Diagnostics go to stderr so they never mix with
    // the shell's own output stream.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(core = nestkv_core::VERSION, "starting interactive session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(stdin.lock(), stdout.lock())?;

    Ok(())
}
