//! Error types for the ticket gate.

use thiserror::Error;

/// Result type alias for ticket gate operations.
pub type TicketResult<T> = Result<T, TicketError>;

/// Errors that abort a ticket gate run.
///
/// A tracker body that is not JSON is not an error; it is reported as
/// absent data by [`crate::TicketTracker::fetch`].
#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Invalid tracker URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("Tracker rejected the credentials for {url} (HTTP 401)")]
    Unauthorized { url: String },

    #[error("Tracker request to {url} failed with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Tracker request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Message(#[from] hookkit_core::CoreError),
}
