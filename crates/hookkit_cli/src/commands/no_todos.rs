//! no-todos command - Reject files containing forbidden markers.
//!
//! The exit code is the number of offending lines, capped at 255.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use hookkit_checks::TodoScanner;

#[derive(Args)]
pub struct NoTodosArgs {
    /// Files to check
    pub filenames: Vec<PathBuf>,

    /// Marker to look for (repeatable; default TODO, FIXME, XXX)
    #[arg(short, long)]
    pub todo_tag: Vec<String>,

    /// File name or glob allowed to contain markers (repeatable)
    #[arg(short, long)]
    pub except_in: Vec<String>,
}

pub async fn execute(args: NoTodosArgs) -> Result<u8> {
    let scanner = TodoScanner::new(&args.todo_tag, &args.except_in);
    info!(
        "Scanning {} file(s) for {:?}",
        args.filenames.len(),
        scanner.tags().collect::<Vec<_>>()
    );

    let report = scanner
        .check_files(&args.filenames)
        .context("Failed to scan files for markers")?;
    report.print();
    Ok(report.exit_code)
}
