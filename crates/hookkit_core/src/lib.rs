//! # hookkit_core
//!
//! Building blocks shared by every hookkit hook.
//!
//! This crate provides:
//! - **Commit messages**: line-preserving read and rewrite of message files
//! - **Environment indirection**: `$NAME` argument values resolved against an [`EnvSource`]
//! - **Hook reports**: the exit code and diagnostic lines a hook produces
//!
//! ## Example
//!
//! ```rust,ignore
//! use hookkit_core::{CommitMessage, HookReport};
//!
//! let message = CommitMessage::read(".git/COMMIT_EDITMSG")?;
//! let report = if message.is_empty() {
//!     HookReport::fail(10).with_line("The commit message must not be empty.")
//! } else {
//!     HookReport::pass()
//! };
//! report.print();
//! ```

pub mod env;
pub mod error;
pub mod message;
pub mod report;

pub use env::{resolve_list, resolve_value, EnvSource, ProcessEnv};
pub use error::{CoreError, CoreResult};
pub use message::CommitMessage;
pub use report::HookReport;
