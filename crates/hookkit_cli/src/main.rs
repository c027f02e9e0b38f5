//! hookkit CLI - Main entry point.
//!
//! Each subcommand exits with the code of its hook report. Errors that stop a
//! hook from reaching a verdict (unreadable files, bad patterns, network
//! failures) exit with 1.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// Exit codes shared by all hooks
pub struct ExitCodes;

impl ExitCodes {
    pub const GENERAL_ERROR: u8 = 1;
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::LintCommitMessage(args) => commands::lint_commit_message::execute(args).await,
        Commands::Commiticketing(args) => commands::commiticketing::execute(args).await,
        Commands::Cojira(args) => commands::cojira::execute(args).await,
        Commands::NoBoms(args) => commands::no_boms::execute(args).await,
        Commands::NoTodos(args) => commands::no_todos::execute(args).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(ExitCodes::GENERAL_ERROR)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "hookkit=debug" } else { "hookkit=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
}
