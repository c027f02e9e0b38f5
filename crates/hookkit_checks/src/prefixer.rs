//! Ticket prefixes for commit subjects, derived from the branch name.
//!
//! On a branch such as `feature/ABC-123-topic` the subject `fix it` becomes
//! `ABC-123: Fix it`. With long prefixes enabled the branch kind is added as
//! well, e.g. `ABC-123: (bugfix) Fix it`.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hookkit_core::{CommitMessage, HookReport};

use crate::branch::{active_branch, ticket_prefix};
use crate::error::CheckResult;

/// Exit code: the branch is not one the prefixer handles.
pub const UNHANDLED_BRANCH: u8 = 1;
/// Exit code: the branch is handled but names no ticket.
pub const MALFORMED_BRANCH: u8 = 2;
/// Exit code: no branch could be determined.
pub const NO_BRANCH: u8 = 3;

pub const DEFAULT_BRANCHES: &[&str] = &["feature", "bugfix", "hotfix"];
pub const DEFAULT_TWO_LEVEL: &[&str] = &["user", "backup"];
pub const DEFAULT_SHORT_PREFIX: &[&str] = &["feature", "user", "backup"];

/// Which branches get prefixed and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixerConfig {
    /// Add `(<branch kind>) ` after the ticket.
    pub long_prefix: bool,
    /// Branch kinds that never get the long form.
    pub short_prefix: BTreeSet<String>,
    /// Branch kinds carrying the ticket in the third segment.
    pub two_level: BTreeSet<String>,
    /// Branch kinds carrying the ticket in the second segment.
    pub branches: BTreeSet<String>,
}

impl Default for PrefixerConfig {
    fn default() -> Self {
        Self::from_args(false, &[], &[], &[])
    }
}

impl PrefixerConfig {
    /// Build a configuration from CLI values; empty lists take the defaults.
    pub fn from_args(
        long_prefix: bool,
        exclude_long_prefix: &[String],
        two_level: &[String],
        branches: &[String],
    ) -> Self {
        Self {
            long_prefix,
            short_prefix: or_default(exclude_long_prefix, DEFAULT_SHORT_PREFIX),
            two_level: or_default(two_level, DEFAULT_TWO_LEVEL),
            branches: or_default(branches, DEFAULT_BRANCHES),
        }
    }
}

fn or_default(values: &[String], default: &[&str]) -> BTreeSet<String> {
    if values.is_empty() {
        default.iter().map(|s| s.to_string()).collect()
    } else {
        values.iter().cloned().collect()
    }
}

/// Applies ticket prefixes to commit subjects.
#[derive(Debug, Clone, Default)]
pub struct BranchPrefixer {
    config: PrefixerConfig,
}

impl BranchPrefixer {
    pub fn new(config: PrefixerConfig) -> Self {
        Self { config }
    }

    /// Prefix the message at `message_path` for the branch checked out in
    /// `repo_root`, rewriting the file only when the subject changes.
    pub fn run(&self, repo_root: &Path, message_path: &Path) -> CheckResult<HookReport> {
        let branch = match active_branch(repo_root)? {
            Some(branch) => branch,
            None => return Ok(HookReport::fail(NO_BRANCH).with_line("Could not reify branch name.")),
        };

        let mut message = CommitMessage::read(message_path)?;
        let original = message.content();
        let report = self.apply(&branch, &mut message);

        if message.content() != original {
            info!("Rewriting subject of {}", message_path.display());
            message.write()?;
        }
        Ok(report)
    }

    /// Prefix the subject of `message` in memory.
    pub fn apply(&self, branch: &str, message: &mut CommitMessage) -> HookReport {
        let candidates: BTreeSet<&String> = self
            .config
            .branches
            .iter()
            .chain(self.config.two_level.iter())
            .collect();
        let two_level: Vec<&str> = self.config.two_level.iter().map(String::as_str).collect();

        for candidate in candidates {
            if !branch.starts_with(&format!("{}/", candidate)) {
                continue;
            }
            debug!("Branch {} handled as {}", branch, candidate);

            let ticket = match ticket_prefix(branch, &two_level) {
                Some(ticket) => ticket,
                None => {
                    return HookReport::fail(MALFORMED_BRANCH).with_line(format!(
                        "[{}] does not correspond to branch naming rules, consult guidelines.",
                        branch
                    ));
                }
            };

            let mut prefix = format!("{}: ", ticket);
            if self.config.long_prefix && !self.config.short_prefix.contains(candidate.as_str()) {
                prefix.push_str(&format!("({}) ", candidate));
            }

            let subject = message.subject().unwrap_or_default().to_string();
            let rest = subject.strip_prefix(prefix.as_str()).unwrap_or(&subject);
            let prefixed = format!("{}{}", prefix, sentence_case(rest));

            if prefixed == subject {
                return HookReport::pass().with_line("Commiticketing did not change your subject line.");
            }
            message.set_subject(&prefixed);
            return HookReport::pass().with_line(format!(
                "Commiticketing prefixed your subject line with [{}] and made it sentence case after.",
                prefix
            ));
        }

        HookReport::fail(UNHANDLED_BRANCH).with_line(format!(
            "You wanted to commit to a branch [{}], which does not correspond to the commiticketing setup.",
            branch
        ))
    }
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(config: PrefixerConfig, branch: &str, content: &str) -> (HookReport, String) {
        let mut message = CommitMessage::parse("COMMIT_EDITMSG", content);
        let report = BranchPrefixer::new(config).apply(branch, &mut message);
        (report, message.content())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefix_added() {
        for (branch, prefix) in [
            ("feature/XYZ-987", "XYZ-987"),
            ("bugfix/NM-555-abc", "NM-555"),
            ("hotfix/ABC-123", "ABC-123"),
            ("user/u123/QWE-456-abc", "QWE-456"),
            ("backup/b321/RTY-654", "RTY-654"),
        ] {
            let (report, content) = apply(PrefixerConfig::default(), branch, "abracadabra");
            assert_eq!(report.exit_code, 0);
            assert_eq!(content, format!("{}: Abracadabra", prefix));
            assert_eq!(
                report.last_line().unwrap(),
                format!(
                    "Commiticketing prefixed your subject line with [{}: ] and made it sentence case after.",
                    prefix
                )
            );
        }
    }

    #[test]
    fn test_prefix_not_doubled() {
        let (report, content) = apply(PrefixerConfig::default(), "feature/XYZ-987", "XYZ-987: Abracadabra");
        assert_eq!(content, "XYZ-987: Abracadabra");
        assert_eq!(
            report.last_line(),
            Some("Commiticketing did not change your subject line.")
        );

        let (report, content) = apply(PrefixerConfig::default(), "feature/XYZ-987", "XYZ-987: abracadabra");
        assert_eq!(content, "XYZ-987: Abracadabra");
        assert_ne!(
            report.last_line(),
            Some("Commiticketing did not change your subject line.")
        );
    }

    #[test]
    fn test_body_is_untouched() {
        let (_, content) = apply(
            PrefixerConfig::default(),
            "feature/XYZ-987",
            "abracadabra\n\nbody stays lower case\n",
        );
        assert_eq!(content, "XYZ-987: Abracadabra\n\nbody stays lower case\n");
    }

    #[test]
    fn test_long_prefix_defaults() {
        let config = PrefixerConfig::from_args(true, &[], &[], &[]);
        for (branch, expected) in [
            ("feature/XYZ-987", "XYZ-987: Abracadabra"),
            ("bugfix/NM-555", "NM-555: (bugfix) Abracadabra"),
            ("hotfix/ABC-123", "ABC-123: (hotfix) Abracadabra"),
            ("user/u123/QWE-753", "QWE-753: Abracadabra"),
            ("backup/bak/RTY-654", "RTY-654: Abracadabra"),
        ] {
            let (_, content) = apply(config.clone(), branch, "Abracadabra");
            assert_eq!(content, expected, "{}", branch);
        }
    }

    #[test]
    fn test_long_prefix_custom_kinds() {
        let config = PrefixerConfig::from_args(true, &[], &strings(&["usr"]), &strings(&["feat"]));
        let (_, content) = apply(config.clone(), "feat/XYZ-987", "XYZ-987: (feat) Abracadabra");
        assert_eq!(content, "XYZ-987: (feat) Abracadabra");
        let (_, content) = apply(config, "usr/u123/NM-555", "abracadabra");
        assert_eq!(content, "NM-555: (usr) Abracadabra");

        let excluded = PrefixerConfig::from_args(
            true,
            &strings(&["usr"]),
            &strings(&["usr"]),
            &strings(&["feat"]),
        );
        let (_, content) = apply(excluded, "usr/u123/NM-555", "NM-555: Abracadabra");
        assert_eq!(content, "NM-555: Abracadabra");
    }

    #[test]
    fn test_unhandled_branch() {
        for branch in ["main", "non-main", "ABC-123", "non/ABC-123"] {
            let (report, content) = apply(PrefixerConfig::default(), branch, "Abracadabra");
            assert_eq!(report.exit_code, UNHANDLED_BRANCH, "{}", branch);
            assert_eq!(content, "Abracadabra");
        }

        let config = PrefixerConfig::from_args(false, &[], &strings(&["usr"]), &strings(&["feat"]));
        let (report, _) = apply(config, "feature/XYZ-987", "Abracadabra");
        assert_eq!(report.exit_code, UNHANDLED_BRANCH);
        assert_eq!(
            report.last_line(),
            Some("You wanted to commit to a branch [feature/XYZ-987], which does not correspond to the commiticketing setup.")
        );
    }

    #[test]
    fn test_malformed_branch() {
        for branch in ["feature/XYZ/987", "user/u123/NM/555", "feature/topic"] {
            let (report, content) = apply(PrefixerConfig::default(), branch, "Abracadabra");
            assert_eq!(report.exit_code, MALFORMED_BRANCH, "{}", branch);
            assert_eq!(content, "Abracadabra");
        }
    }

    #[test]
    fn test_empty_subject_gets_prefix() {
        let (report, content) = apply(PrefixerConfig::default(), "feature/XYZ-987", "");
        assert_eq!(report.exit_code, 0);
        assert_eq!(content, "XYZ-987: ");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(sentence_case("abc"), "Abc");
        assert_eq!(sentence_case("\u{e9}t\u{e9}"), "\u{c9}t\u{e9}");
        assert_eq!(sentence_case(""), "");
    }
}
