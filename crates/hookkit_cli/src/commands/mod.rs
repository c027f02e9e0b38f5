//! CLI command definitions.
//!
//! Each subcommand is one pre-commit hook. Its `execute` returns the exit code
//! the hook reports back to git.

use clap::{Parser, Subcommand};

pub mod cojira;
pub mod commiticketing;
pub mod lint_commit_message;
pub mod no_boms;
pub mod no_todos;

/// hookkit - git hooks for commit hygiene and ticket tracking
#[derive(Parser)]
#[command(name = "hookkit")]
#[command(version, about = "hookkit - git hooks for commit hygiene and ticket tracking")]
#[command(long_about = r#"
hookkit bundles a set of hooks for the pre-commit framework.

HOOKS:
  lint-commit-message → Check commit message layout          (commit-msg)
  commiticketing      → Prefix the subject with the branch ticket (prepare-commit-msg)
  cojira              → Gate on the ticket's Jira status        (commit-msg)
  no-boms             → Reject files with byte-order marks
  no-todos            → Reject files containing TODO markers

EXIT CODES:
  0 - Success
  1 - General error, or the hook's first failure code
  n - Hook specific, see each subcommand's help
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint the layout of a commit message
    #[command(name = "lint-commit-message")]
    LintCommitMessage(lint_commit_message::LintCommitMessageArgs),

    /// Prefix the commit subject with the ticket named by the branch
    Commiticketing(commiticketing::CommiticketingArgs),

    /// Check the commit's Jira ticket against status and fix version rules
    Cojira(cojira::CojiraArgs),

    /// Reject files starting with a byte-order mark
    #[command(name = "no-boms")]
    NoBoms(no_boms::NoBomsArgs),

    /// Reject files containing forbidden markers
    #[command(name = "no-todos")]
    NoTodos(no_todos::NoTodosArgs),
}
