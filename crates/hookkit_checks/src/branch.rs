//! Branch names and the ticket prefixes derived from them.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use hookkit_core::CoreError;

use crate::error::CheckResult;

/// Name of the branch checked out in the repository at `repo_root`.
///
/// Reads `.git/HEAD` directly. With a detached HEAD (an interactive rebase
/// stopped on a conflict), the branch being rebased is taken from
/// `.git/rebase-merge/head-name`. Returns `None` outside a repository or when
/// no branch can be determined.
pub fn active_branch(repo_root: &Path) -> CheckResult<Option<String>> {
    let git_dir = match git_dir(repo_root)? {
        Some(dir) => dir,
        None => return Ok(None),
    };

    let mut head = None;
    if let Some(content) = read_optional(&git_dir.join("HEAD"))? {
        for line in content.lines() {
            if line.starts_with("ref:") {
                head = Some(line.strip_prefix("ref: refs/heads/").unwrap_or(line).to_string());
            }
        }
    }
    if let Some(branch) = head.filter(|h| !h.is_empty()) {
        debug!("Active branch from HEAD: {}", branch);
        return Ok(Some(branch));
    }

    let mut head = None;
    if let Some(content) = read_optional(&git_dir.join("rebase-merge").join("head-name"))? {
        for line in content.lines() {
            head = Some(line.strip_prefix("refs/heads/").unwrap_or(line).to_string());
        }
    }
    let head = head.filter(|h| !h.is_empty());
    debug!("Active branch from rebase-merge: {:?}", head);
    Ok(head)
}

/// Locate the git directory, following a `gitdir:` file for worktrees.
fn git_dir(repo_root: &Path) -> CheckResult<Option<PathBuf>> {
    let dot_git = repo_root.join(".git");
    if dot_git.is_dir() {
        return Ok(Some(dot_git));
    }

    let content = match read_optional(&dot_git)? {
        Some(content) => content,
        None => return Ok(None),
    };
    let target = content
        .lines()
        .find_map(|line| line.strip_prefix("gitdir:"))
        .map(|target| PathBuf::from(target.trim()));

    Ok(target.map(|target| {
        if target.is_absolute() {
            target
        } else {
            repo_root.join(target)
        }
    }))
}

fn read_optional(path: &Path) -> CheckResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CoreError::read(path, e).into()),
    }
}

const ONE_LEVEL: &str = r"^[^/]+/([A-Z]{2,}-[1-9][0-9]*)(-.+)?$";
const TWO_LEVEL: &str = r"^([^/]+)/[^/]+/([A-Z]{2,}-[1-9][0-9]*)(-.+)?$";

fn one_level() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ONE_LEVEL).expect("one-level branch pattern is valid"))
}

fn two_level() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(TWO_LEVEL).expect("two-level branch pattern is valid"))
}

/// Ticket prefix (`ABC-123`) encoded in a branch name.
///
/// Branches whose first segment is one of `two_level_kinds` carry the ticket in
/// their third segment (`user/u123/ABC-123-topic`); all others in their second
/// (`feature/ABC-123-topic`). Anything after the ticket number is dropped.
pub fn ticket_prefix<S: AsRef<str>>(branch: &str, two_level_kinds: &[S]) -> Option<String> {
    if let Some(captures) = two_level().captures(branch) {
        let kind = &captures[1];
        if two_level_kinds.iter().any(|k| k.as_ref() == kind) {
            return Some(captures[2].to_string());
        }
    }

    one_level()
        .captures(branch)
        .map(|captures| captures[1].to_string())
}
