//! Issue tracker access.
//!
//! The gate only ever needs one thing from a tracker: the JSON document of a
//! single ticket. [`TicketTracker`] is that seam; [`JiraClient`] implements it
//! over the Jira REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{TicketError, TicketResult};
use crate::ticket::TicketId;

/// REST path appended to the tracker base URI, followed by the ticket.
pub const ISSUE_PATH: &str = "/rest/api/latest/issue/";

/// Default timeout for a single tracker request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can look up ticket documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketTracker: Send + Sync {
    /// Fetch the JSON document of a ticket.
    ///
    /// `Ok(None)` means the tracker answered with a body that is not JSON.
    /// Transport failures, bad URIs and non-2xx statuses are errors.
    async fn fetch(&self, ticket: &TicketId) -> TicketResult<Option<Value>>;
}

/// Jira REST client authenticating with a personal access token.
pub struct JiraClient {
    base_uri: String,
    token: String,
    client: reqwest::Client,
}

impl JiraClient {
    /// Create a client. The base URI is only validated when a request is made.
    pub fn new(
        base_uri: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> TicketResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_uri: base_uri.into(),
            token: token.into(),
            client,
        })
    }

    /// URL of a ticket's REST resource.
    pub fn issue_url(&self, ticket: &TicketId) -> TicketResult<Url> {
        if self.base_uri.trim().is_empty() {
            return Err(TicketError::InvalidUri {
                uri: self.base_uri.clone(),
                reason: "no tracker URI configured".to_string(),
            });
        }

        let raw = format!("{}{}{}", self.base_uri, ISSUE_PATH, ticket);
        let url = Url::parse(&raw).map_err(|e| TicketError::InvalidUri {
            uri: self.base_uri.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(TicketError::InvalidUri {
                uri: self.base_uri.clone(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }
}

#[async_trait]
impl TicketTracker for JiraClient {
    async fn fetch(&self, ticket: &TicketId) -> TicketResult<Option<Value>> {
        let url = self.issue_url(ticket)?;
        info!("Fetching ticket {} from {}", ticket, url);

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        debug!("Tracker answered {} for {}", status, ticket);
        if status == StatusCode::UNAUTHORIZED {
            return Err(TicketError::Unauthorized {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(TicketError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text_with_charset("utf-8").await?;
        match serde_json::from_str::<Value>(&body) {
            Ok(document) => Ok(Some(document)),
            Err(e) => {
                warn!("Tracker response for {} is not JSON: {}", ticket, e);
                Ok(None)
            }
        }
    }
}
