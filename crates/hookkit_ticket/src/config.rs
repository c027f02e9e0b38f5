//! Gate configuration.
//!
//! Command-line values may point at environment variables (`$NAME`). They are
//! all resolved here, once, into an immutable [`GateConfig`] before any
//! decision is made.

use std::fmt;
use std::time::Duration;

use hookkit_core::{resolve_list, resolve_value, EnvSource};
use tracing::debug;

use crate::policy::{StatusPolicy, VersionPolicy};
use crate::tracker::DEFAULT_TIMEOUT;

/// Gate options as given on the command line, before resolution.
#[derive(Debug, Clone)]
pub struct GateOptions {
    pub lenient: bool,
    pub tracker_uri: Option<String>,
    pub token: Option<String>,
    pub allow_status_categories: Vec<String>,
    pub disallow_status_categories: Vec<String>,
    pub allowed_fix_versions: Vec<String>,
    pub timeout: Duration,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            lenient: false,
            tracker_uri: None,
            token: None,
            allow_status_categories: Vec::new(),
            disallow_status_categories: Vec::new(),
            allowed_fix_versions: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Fully resolved gate configuration.
#[derive(Clone)]
pub struct GateConfig {
    pub lenient: bool,
    pub tracker_uri: String,
    pub token: String,
    pub status: StatusPolicy,
    pub versions: VersionPolicy,
    pub timeout: Duration,
}

impl GateConfig {
    /// Resolve command-line options against an environment.
    pub fn resolve(options: &GateOptions, env: &dyn EnvSource) -> Self {
        let tracker_uri = options
            .tracker_uri
            .as_deref()
            .map(|raw| resolve_value(raw, env))
            .unwrap_or_default();
        let token = options
            .token
            .as_deref()
            .map(|raw| resolve_value(raw, env))
            .unwrap_or_default();

        let config = Self {
            lenient: options.lenient,
            tracker_uri,
            token,
            status: StatusPolicy::from_args(
                &options.allow_status_categories,
                &options.disallow_status_categories,
            ),
            versions: VersionPolicy::new(resolve_list(&options.allowed_fix_versions, env)),
            timeout: options.timeout,
        };
        debug!("Resolved gate configuration: {:?}", config);
        config
    }

    /// True when a non-blank tracker URI was configured.
    pub fn has_tracker(&self) -> bool {
        !self.tracker_uri.trim().is_empty()
    }
}

impl fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateConfig")
            .field("lenient", &self.lenient)
            .field("tracker_uri", &self.tracker_uri)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("status", &self.status)
            .field("versions", &self.versions)
            .field("timeout", &self.timeout)
            .finish()
    }
}
