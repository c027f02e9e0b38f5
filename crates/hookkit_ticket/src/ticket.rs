//! Ticket identifiers and their extraction from commit messages.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use hookkit_core::CommitMessage;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::TicketResult;

/// Pattern a subject line must start with to name a ticket.
pub const SUBJECT_PATTERN: &str = r"^([A-Z]{2,}-[1-9][0-9]*): .*";

fn subject_regex() -> &'static Regex {
    static SUBJECT: OnceLock<Regex> = OnceLock::new();
    SUBJECT.get_or_init(|| Regex::new(SUBJECT_PATTERN).expect("subject pattern is valid"))
}

/// An issue tracker ticket identifier such as `ABC-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Extract the ticket from a subject line of the form `ABC-123: text`.
    pub fn from_subject(subject: &str) -> Option<Self> {
        subject_regex()
            .captures(subject)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the ticket named by the first line of a commit message file.
///
/// Returns `Ok(None)` for an empty file or a subject that names no ticket.
pub fn extract_ticket<P: AsRef<Path>>(commit_message_path: P) -> TicketResult<Option<TicketId>> {
    let message = CommitMessage::read(commit_message_path)?;
    let ticket = message.subject().and_then(TicketId::from_subject);
    debug!("Ticket in {}: {:?}", message.path().display(), ticket);
    Ok(ticket)
}
