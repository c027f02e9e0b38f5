//! commiticketing command - Prefix the commit subject with the branch ticket.
//!
//! Runs as a prepare-commit-msg hook from the repository root. Exit codes:
//! 1 unhandled branch, 2 branch without a valid ticket, 3 no branch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use hookkit_checks::{BranchPrefixer, PrefixerConfig};

#[derive(Args)]
pub struct CommiticketingArgs {
    /// Commit message file
    filename: PathBuf,

    /// Add the branch kind to the prefix, e.g. "ABC-123: (bugfix) "
    #[arg(short, long)]
    long_prefix: bool,

    /// Branch kinds that keep the short prefix (repeatable)
    #[arg(short, long)]
    exclude_long_prefix: Vec<String>,

    /// Branch kinds with the ticket in the third segment (repeatable)
    #[arg(short, long)]
    two_level: Vec<String>,

    /// Branch kinds with the ticket in the second segment (repeatable)
    #[arg(short, long)]
    branch: Vec<String>,
}

pub async fn execute(args: CommiticketingArgs) -> Result<u8> {
    let config = PrefixerConfig::from_args(
        args.long_prefix,
        &args.exclude_long_prefix,
        &args.two_level,
        &args.branch,
    );
    info!("Prefixing commit message with {:?}", config);

    let repo_root = std::env::current_dir().context("Failed to determine repository root")?;
    let report = BranchPrefixer::new(config)
        .run(&repo_root, &args.filename)
        .with_context(|| format!("Failed to prefix {}", args.filename.display()))?;

    report.print();
    Ok(report.exit_code)
}
