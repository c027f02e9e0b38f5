//! # hookkit_checks
//!
//! The file-level hooks of hookkit.
//!
//! This crate provides:
//! - **Commit message lint**: blank separator line, subject and body lengths, subject ending
//! - **Branch prefixing**: ticket prefix derived from the checked-out branch
//! - **BOM detection**: UTF-8/16/32 byte-order marks
//! - **TODO scanning**: forbidden markers in file content
//!
//! Every check returns a [`hookkit_core::HookReport`] whose exit code encodes
//! the failure reason.

pub mod bom;
pub mod branch;
pub mod error;
pub mod lint;
pub mod prefixer;
pub mod todo;

pub use bom::{check_boms, detect_bom, Bom};
pub use branch::{active_branch, ticket_prefix};
pub use error::{CheckError, CheckResult};
pub use lint::{CommitLinter, LintConfig};
pub use prefixer::{BranchPrefixer, PrefixerConfig};
pub use todo::TodoScanner;
