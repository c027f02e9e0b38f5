//! # hookkit_ticket
//!
//! Ticket gate for commit messages, backed by an issue tracker.
//!
//! This crate provides:
//! - **Ticket extraction**: `ABC-123: subject` lines to [`TicketId`]
//! - **Tracker access**: the [`TicketTracker`] seam and its Jira REST client
//! - **Projections**: fix version and status category out of tracker JSON
//! - **Policies**: allow/deny sets for status categories and fix versions
//! - **Gate**: the ordered decision sequence and its exit codes
//!
//! ## Example
//!
//! ```rust,ignore
//! use hookkit_core::ProcessEnv;
//! use hookkit_ticket::{GateConfig, GateOptions, JiraClient, TicketGate};
//!
//! let options = GateOptions {
//!     tracker_uri: Some("$JIRA_URI".to_string()),
//!     token: Some("$JIRA_PAT".to_string()),
//!     ..GateOptions::default()
//! };
//! let config = GateConfig::resolve(&options, &ProcessEnv);
//! let client = JiraClient::new(&config.tracker_uri, &config.token, config.timeout)?;
//! let report = TicketGate::new(config, client).run(path).await?;
//! std::process::exit(report.exit_code().into());
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod policy;
pub mod projection;
pub mod ticket;
pub mod tracker;

pub use config::{GateConfig, GateOptions};
pub use error::{TicketError, TicketResult};
pub use gate::{GateOutcome, GateReport, TicketGate};
pub use policy::{render_set, StatusPolicy, VersionPolicy, VersionVerdict};
pub use projection::{project_fix_version, project_status_category};
pub use ticket::{extract_ticket, TicketId};
pub use tracker::{JiraClient, TicketTracker, DEFAULT_TIMEOUT, ISSUE_PATH};
