//! Allow/deny policies for ticket status categories and fix versions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Status category disallowed when none is configured.
pub const DEFAULT_DISALLOWED_CATEGORY: &str = "done";

/// Which status categories a ticket may be in.
///
/// Membership in `allowed` always wins over membership in `disallowed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPolicy {
    pub allowed: BTreeSet<String>,
    pub disallowed: BTreeSet<String>,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            allowed: BTreeSet::new(),
            disallowed: BTreeSet::from([DEFAULT_DISALLOWED_CATEGORY.to_string()]),
        }
    }
}

impl StatusPolicy {
    pub fn new(allowed: BTreeSet<String>, disallowed: BTreeSet<String>) -> Self {
        Self {
            allowed,
            disallowed,
        }
    }

    /// Build a policy from CLI values, applying the defaults for empty input.
    pub fn from_args(allowed: &[String], disallowed: &[String]) -> Self {
        let mut policy = Self::default();
        policy.allowed = allowed.iter().cloned().collect();
        if !disallowed.is_empty() {
            policy.disallowed = disallowed.iter().cloned().collect();
        }
        policy
    }

    /// Decide whether a status category passes.
    pub fn evaluate(&self, category: Option<&str>) -> bool {
        match category {
            None | Some("") => false,
            Some(category) => {
                self.allowed.contains(category) || !self.disallowed.contains(category)
            }
        }
    }
}

/// Which fix versions a ticket may target. An empty set disables the check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionPolicy {
    pub allowed: BTreeSet<String>,
}

/// Result of checking a ticket's fix version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionVerdict {
    /// No acceptable versions configured.
    NotChecked,
    /// The ticket has no single, non-empty fix version.
    Missing,
    /// The ticket's fix version is not acceptable.
    NotAllowed(String),
    Allowed(String),
}

impl VersionPolicy {
    pub fn new(allowed: BTreeSet<String>) -> Self {
        Self { allowed }
    }

    pub fn is_enabled(&self) -> bool {
        !self.allowed.is_empty()
    }

    pub fn check(&self, version: Option<&str>) -> VersionVerdict {
        if !self.is_enabled() {
            return VersionVerdict::NotChecked;
        }
        match version {
            None | Some("") => VersionVerdict::Missing,
            Some(version) if self.allowed.contains(version) => {
                VersionVerdict::Allowed(version.to_string())
            }
            Some(version) => VersionVerdict::NotAllowed(version.to_string()),
        }
    }
}

/// Render a set for diagnostics: sorted, quoted, `{}` when empty.
pub fn render_set(set: &BTreeSet<String>) -> String {
    let items: Vec<String> = set.iter().map(|item| format!("\"{}\"", item)).collect();
    format!("{{{}}}", items.join(", "))
}
