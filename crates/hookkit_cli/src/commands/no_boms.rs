//! no-boms command - Reject files starting with a byte-order mark.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use hookkit_checks::check_boms;

#[derive(Args)]
pub struct NoBomsArgs {
    /// Files to check
    filenames: Vec<PathBuf>,
}

pub async fn execute(args: NoBomsArgs) -> Result<u8> {
    info!("Checking {} file(s) for BOMs", args.filenames.len());

    let report = check_boms(&args.filenames).context("Failed to check files for BOMs")?;
    report.print();
    Ok(report.exit_code)
}
