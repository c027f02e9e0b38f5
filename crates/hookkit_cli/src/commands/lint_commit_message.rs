//! lint-commit-message command - Check the layout of a commit message.
//!
//! Exit codes: 10 empty message, 1 missing blank line after the subject,
//! 2 subject too long, 4 forbidden subject ending, 6 body line too long.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use hookkit_checks::lint::{DEFAULT_BODY_LINE_LENGTH, DEFAULT_ENDING, DEFAULT_SUBJECT_LINE_LENGTH};
use hookkit_checks::{CommitLinter, LintConfig};

#[derive(Args)]
pub struct LintCommitMessageArgs {
    /// Commit message file
    filename: PathBuf,

    /// Maximum subject line length
    #[arg(long, visible_alias = "sl", default_value_t = DEFAULT_SUBJECT_LINE_LENGTH)]
    subject_line_length: usize,

    /// Maximum body line length
    #[arg(long, visible_alias = "bl", default_value_t = DEFAULT_BODY_LINE_LENGTH)]
    body_line_length: usize,

    /// Regex of characters the subject must not end with
    #[arg(short, long, default_value = DEFAULT_ENDING)]
    ending: String,
}

impl LintCommitMessageArgs {
    pub fn lint_config(&self) -> LintConfig {
        LintConfig {
            subject_line_length: self.subject_line_length,
            body_line_length: self.body_line_length,
            ending: self.ending.clone(),
        }
    }
}

pub async fn execute(args: LintCommitMessageArgs) -> Result<u8> {
    info!("Linting commit message: {:?}", args.filename);

    let linter = CommitLinter::new(args.lint_config()).context("Invalid lint configuration")?;
    let report = linter
        .lint_file(&args.filename)
        .with_context(|| format!("Failed to lint {}", args.filename.display()))?;

    report.print();
    Ok(report.exit_code)
}
