//! The ticket gate: decides whether a commit may reference its ticket.
//!
//! Steps, each of which may end the run:
//! 1. lenient mode without a tracker URI passes without looking at anything
//! 2. the commit message must name a ticket
//! 3. with acceptable fix versions configured, the ticket must have exactly
//!    one fix version and it must be acceptable
//! 4. the ticket's status category must pass the [`StatusPolicy`]

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use hookkit_core::HookReport;

use crate::config::GateConfig;
use crate::error::TicketResult;
use crate::policy::{render_set, StatusPolicy, VersionVerdict};
use crate::projection::{project_fix_version, project_status_category};
use crate::ticket::{extract_ticket, TicketId};
use crate::tracker::TicketTracker;

/// Terminal outcome of a gate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOutcome {
    LenientSkip,
    NoTicket,
    MissingFixVersion,
    FixVersionNotAllowed,
    StatusCategoryRejected,
    Passed,
}

impl GateOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            GateOutcome::LenientSkip | GateOutcome::Passed => 0,
            GateOutcome::StatusCategoryRejected => 1,
            GateOutcome::FixVersionNotAllowed => 2,
            GateOutcome::MissingFixVersion => 3,
            GateOutcome::NoTicket => 4,
        }
    }
}

/// What a gate run found, with the diagnostics to show.
#[derive(Debug, Clone, Serialize)]
pub struct GateReport {
    pub outcome: GateOutcome,
    pub ticket: Option<TicketId>,
    pub fix_version: Option<String>,
    pub status_category: Option<String>,
    pub lines: Vec<String>,
}

impl GateReport {
    fn new(outcome: GateOutcome) -> Self {
        Self {
            outcome,
            ticket: None,
            fix_version: None,
            status_category: None,
            lines: Vec::new(),
        }
    }

    fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn exit_code(&self) -> u8 {
        self.outcome.exit_code()
    }
}

impl From<GateReport> for HookReport {
    fn from(report: GateReport) -> Self {
        HookReport {
            exit_code: report.exit_code(),
            lines: report.lines,
        }
    }
}

/// Runs the gate against one tracker.
pub struct TicketGate<T> {
    config: GateConfig,
    tracker: T,
}

impl<T: TicketTracker> TicketGate<T> {
    pub fn new(config: GateConfig, tracker: T) -> Self {
        Self { config, tracker }
    }

    /// Evaluate the commit message at `commit_message_path`.
    ///
    /// Verdicts are returned in the report; errors are reserved for I/O and
    /// tracker failures.
    pub async fn run(&self, commit_message_path: &Path) -> TicketResult<GateReport> {
        if self.config.lenient && !self.config.has_tracker() {
            info!("Lenient mode and no tracker URI, skipping ticket gate");
            return Ok(GateReport::new(GateOutcome::LenientSkip)
                .with_line("Lenient early exit, because no JIRA URI given"));
        }

        let ticket = match extract_ticket(commit_message_path)? {
            Some(ticket) => ticket,
            None => {
                return Ok(GateReport::new(GateOutcome::NoTicket)
                    .with_line("Could not reify ticket from commit message"));
            }
        };

        let mut report = GateReport::new(GateOutcome::Passed);
        report.ticket = Some(ticket.clone());
        report.lines.push(format!("Checking ticket \"{}\"", ticket));

        let versions = &self.config.versions;
        if versions.is_enabled() {
            let document = self.tracker.fetch(&ticket).await?;
            let fix_version = document.as_ref().and_then(project_fix_version);
            report.fix_version = fix_version.clone();
            let allowed_line = format!("\t(allowed versions are: {})", render_set(&versions.allowed));

            match versions.check(fix_version.as_deref()) {
                VersionVerdict::Missing => {
                    report.outcome = GateOutcome::MissingFixVersion;
                    report.lines.push(format!(
                        "Ticket \"{}\" has no fix version, but it is expected",
                        ticket
                    ));
                    report.lines.push(allowed_line);
                    return Ok(report);
                }
                VersionVerdict::NotAllowed(version) => {
                    report.outcome = GateOutcome::FixVersionNotAllowed;
                    report.lines.push(format!(
                        "Fix version of ticket \"{}\" (\"{}\") is not allowed",
                        ticket, version
                    ));
                    report.lines.push(allowed_line);
                    return Ok(report);
                }
                VersionVerdict::Allowed(version) => {
                    report
                        .lines
                        .push(format!("Ticket fix version (\"{}\") is allowed", version));
                    report.lines.push(allowed_line);
                }
                VersionVerdict::NotChecked => {}
            }
        } else {
            report.lines.push("Ticket fix version not checked".to_string());
        }

        let document = self.tracker.fetch(&ticket).await?;
        let category = document.as_ref().and_then(project_status_category);
        report.status_category = category.clone();
        debug!("Status category of {}: {:?}", ticket, category);

        let status = &self.config.status;
        if status.evaluate(category.as_deref()) {
            report.lines.push("Ticket is OK according to COJIRA rules".to_string());
            return Ok(report);
        }

        report.outcome = GateOutcome::StatusCategoryRejected;
        report.lines.extend(rejection_lines(&ticket, category.as_deref(), status));
        Ok(report)
    }
}

fn rejection_lines(ticket: &TicketId, category: Option<&str>, status: &StatusPolicy) -> Vec<String> {
    let shown = match category {
        Some(category) => format!("\"{}\"", category),
        None => "unknown".to_string(),
    };
    vec![
        format!(
            "Ticket \"{}\" status category ({}) is not allowed",
            ticket, shown
        ),
        format!("\t(allowed categories are: {},", render_set(&status.allowed)),
        format!("\t disallowed categories are: {})", render_set(&status.disallowed)),
    ]
}
