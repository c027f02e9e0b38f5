//! Commit message style rules.
//!
//! Rules are checked in order and the first failing rule decides the exit
//! code. Subject capitalization is left to the prefixer, and mood and body
//! content are not checked.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use hookkit_core::{CommitMessage, HookReport};

use crate::error::{CheckError, CheckResult};

/// Exit code: the message has no lines.
pub const EMPTY_MESSAGE: u8 = 10;
/// Exit code: subject and body are not separated by a blank line.
pub const MISSING_SEPARATOR: u8 = 1;
/// Exit code: the subject line is too long.
pub const SUBJECT_TOO_LONG: u8 = 2;
/// Exit code: the subject line ends with a forbidden character.
pub const FORBIDDEN_ENDING: u8 = 4;
/// Exit code: a body line is too long.
pub const BODY_LINE_TOO_LONG: u8 = 6;

pub const DEFAULT_SUBJECT_LINE_LENGTH: usize = 72;
pub const DEFAULT_BODY_LINE_LENGTH: usize = 120;
pub const DEFAULT_ENDING: &str = r"[.,;?!\-]";

/// Limits applied by the linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    pub subject_line_length: usize,
    pub body_line_length: usize,
    /// Regex matching the characters a subject must not end with.
    pub ending: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            subject_line_length: DEFAULT_SUBJECT_LINE_LENGTH,
            body_line_length: DEFAULT_BODY_LINE_LENGTH,
            ending: DEFAULT_ENDING.to_string(),
        }
    }
}

/// Lints commit messages against a [`LintConfig`].
#[derive(Debug)]
pub struct CommitLinter {
    config: LintConfig,
    ending: Regex,
}

impl CommitLinter {
    pub fn new(config: LintConfig) -> CheckResult<Self> {
        let pattern = format!("^.*(?:{})$", config.ending);
        let ending = Regex::new(&pattern).map_err(|e| CheckError::InvalidPattern {
            pattern: config.ending.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { config, ending })
    }

    /// Read and lint a commit message file.
    pub fn lint_file<P: AsRef<Path>>(&self, path: P) -> CheckResult<HookReport> {
        let message = CommitMessage::read(path)?;
        Ok(self.lint(&message))
    }

    pub fn lint(&self, message: &CommitMessage) -> HookReport {
        let subject = match message.subject() {
            Some(subject) => subject,
            None => {
                return HookReport::fail(EMPTY_MESSAGE)
                    .with_line("The commit message must not be empty.");
            }
        };

        if let Some(second) = message.line(1) {
            if !second.trim_end().is_empty() {
                return HookReport::fail(MISSING_SEPARATOR)
                    .with_line("The subject line and body must be separated by an empty line.");
            }
        }

        let subject_length = subject.chars().count();
        if subject_length > self.config.subject_line_length {
            return HookReport::fail(SUBJECT_TOO_LONG).with_line(format!(
                "The subject line must not be longer than {}, currently it is {}.",
                self.config.subject_line_length, subject_length
            ));
        }

        if self.ending.is_match(subject.trim_end()) {
            return HookReport::fail(FORBIDDEN_ENDING)
                .with_line("The subject line must not end with punctuation.");
        }

        for (index, line) in message.lines().skip(2).enumerate() {
            let length = line.chars().count();
            if length > self.config.body_line_length {
                return HookReport::fail(BODY_LINE_TOO_LONG).with_line(format!(
                    "Wrap lines of the message body after {} characters, \
                     currently line {} is {} long. The line is: \"{}\".",
                    self.config.body_line_length,
                    index + 1,
                    length,
                    line
                ));
            }
        }

        debug!("Commit message {} passed all lint rules", message.path().display());
        HookReport::pass()
    }
}
